use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::{ConfigProvider, ToasterProvider};

#[component]
pub fn App() -> impl IntoView {
    log::info!("starting site, api base: {}", crate::shared::api_utils::api_base());

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <AppRoutes />
            </ToasterProvider>
        </ConfigProvider>
    }
}
