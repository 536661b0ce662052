use leptos::prelude::*;

/// Title block of a catalog page with optional actions on the right
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,

    /// Accepts plain strings and signals
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <p class="page-header__subtitle">{s}</p>
                })}
            </div>
            {children.map(|children| view! {
                <div class="page-header__actions">{children()}</div>
            })}
        </div>
    }
}
