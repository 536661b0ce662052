//! Transient notices (vote feedback, form confirmations)

use leptos::prelude::*;
use thaw::{Toast, ToastBody, ToastIntent, ToastOptions, ToastTitle, ToasterInjection};

pub fn notify(
    toaster: &ToasterInjection,
    intent: ToastIntent,
    title: &'static str,
    body: Option<String>,
) {
    toaster.dispatch_toast(
        move || {
            view! {
                <Toast>
                    <ToastTitle>{title}</ToastTitle>
                    {body.map(|b| view! { <ToastBody>{b}</ToastBody> })}
                </Toast>
            }
        },
        ToastOptions::default().with_intent(intent),
    );
}
