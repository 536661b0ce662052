use crate::layout::header::header::NAV_ITEMS;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="site-footer">
            <nav class="site-footer__links">
                {NAV_ITEMS
                    .iter()
                    .map(|item| view! { <A href=item.href>{item.title}</A> })
                    .collect_view()}
            </nav>
            <span class="site-footer__copy">"© Norte Digital · Diseño y desarrollo digital"</span>
        </footer>
    }
}
