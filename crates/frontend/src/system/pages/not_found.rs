use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Página no encontrada"</h1>
            <A href="/" attr:class="button button--primary">"Volver al inicio"</A>
        </div>
    }
}
