//! Leptos bindings for `FormController`

use crate::shared::components::ui::{Input, Textarea};
use crate::shared::toast::notify;
use contracts::shared::contact::FormValues;
use contracts::shared::form::{FormController, SubmitBlocked, SubmitOutcome, SubmitStatus};
use leptos::prelude::*;
use std::future::Future;
use thaw::{Button, ButtonAppearance, ToastIntent, ToasterInjection};
use wasm_bindgen_futures::spawn_local;

/// Per-field rendering hints; fields not listed are single-line text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Number,
    Multiline,
}

impl FieldKind {
    fn input_type(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            FieldKind::Number => "number",
            FieldKind::Text | FieldKind::Multiline => "text",
        }
    }
}

/// Renders every field of the form's schema
#[component]
pub fn FormFields(
    form: RwSignal<FormController>,
    /// (field name, kind) overrides
    #[prop(optional)]
    kinds: &'static [(&'static str, FieldKind)],
) -> impl IntoView {
    let schema = form.with_untracked(|f| *f.schema());
    let disabled = Signal::derive(move || form.with(|f| f.is_submitting()));

    schema
        .fields
        .iter()
        .map(|spec| {
            let name = spec.name;
            let kind = kinds
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, k)| *k)
                .unwrap_or(FieldKind::Text);
            let id = format!("{}-{}", schema.name, name);
            let value = Signal::derive(move || form.with(|f| f.value(name).to_string()));
            let error = Signal::derive(move || form.with(|f| f.error(name).map(str::to_string)));
            let on_input = Callback::new(move |v: String| form.update(|f| f.edit(name, v)));

            if kind == FieldKind::Multiline {
                view! {
                    <Textarea
                        id=id
                        label=spec.label.to_string()
                        value=value
                        on_input=on_input
                        error=error
                        disabled=disabled
                        required=spec.is_required()
                    />
                }
                .into_any()
            } else {
                view! {
                    <Input
                        id=id
                        label=spec.label.to_string()
                        input_type=kind.input_type().to_string()
                        value=value
                        on_input=on_input
                        error=error
                        disabled=disabled
                        required=spec.is_required()
                    />
                }
                .into_any()
            }
        })
        .collect_view()
}

/// Submit button plus the success / error notice of the form
#[component]
pub fn FormActions(
    form: RwSignal<FormController>,
    #[prop(into)] label: String,
    on_submit: Callback<()>,
    #[prop(optional, into)] success_text: String,
) -> impl IntoView {
    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));
    let label = StoredValue::new(label);
    let success_text = StoredValue::new(success_text);

    view! {
        <div class="form__actions">
            <Button
                appearance=ButtonAppearance::Primary
                disabled=submitting
                on_click=move |_| on_submit.run(())
            >
                {move || if submitting.get() { "Enviando...".to_string() } else { label.get_value() }}
            </Button>
            {move || match form.with(|f| f.status().clone()) {
                SubmitStatus::Error(message) => view! {
                    <div class="form__notice form__notice--error" role="alert">
                        <span>{message}</span>
                        <button class="form__notice-close" on:click=move |_| form.update(|f| f.dismiss())>
                            "×"
                        </button>
                    </div>
                }.into_any(),
                SubmitStatus::Success if !success_text.with_value(String::is_empty) => view! {
                    <div class="form__notice form__notice--success" role="status">
                        {success_text.get_value()}
                    </div>
                }.into_any(),
                _ => view! { <></> }.into_any(),
            }}
        </div>
    }
}

/// Validate, send and apply the outcome.
///
/// Invalid drafts and double clicks never reach `send`. The form signal may
/// be disposed while the request is pending; the outcome is dropped then.
pub fn submit_form<F, Fut>(
    form: RwSignal<FormController>,
    toaster: ToasterInjection,
    success_title: &'static str,
    send: F,
) where
    F: FnOnce(FormValues) -> Fut + 'static,
    Fut: Future<Output = SubmitOutcome> + 'static,
{
    let values = match form.try_update(|f| f.begin_submit()) {
        Some(Ok(values)) => values,
        Some(Err(SubmitBlocked::Invalid(errors))) => {
            log::debug!("form blocked by {} field error(s)", errors.len());
            return;
        }
        Some(Err(SubmitBlocked::InFlight)) | None => return,
    };

    spawn_local(async move {
        let outcome = send(values).await;
        let accepted = outcome == SubmitOutcome::Accepted;
        if form.try_update(|f| f.finish(outcome)).is_none() {
            log::debug!("form disposed before the response arrived");
            return;
        }
        if accepted {
            notify(&toaster, ToastIntent::Success, success_title, None);
        }
    });
}
