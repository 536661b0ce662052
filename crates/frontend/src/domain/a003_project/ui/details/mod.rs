use crate::shared::gallery::GalleryStrip;
use crate::shared::components::ui::category_badge;
use crate::shared::icons::icon;
use contracts::domain::a003_project::Project;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ProjectDetails(
    project: Project,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] is_favorite: Signal<bool>,
    on_favorite: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="project-detail">
            <GalleryStrip images=project.images.clone() alt=project.title.clone() open=open />

            <div class="project-detail__facts">
                {category_badge::<Project>(&project.category)}
                <span>{format!("{} · {}", project.client, project.year)}</span>
                <button
                    class="favorite favorite--inline"
                    class:favorite--active=move || is_favorite.get()
                    on:click=move |_| on_favorite.run(())
                >
                    {move || if is_favorite.get() { icon("heart-filled") } else { icon("heart") }}
                    {move || if is_favorite.get() { "Guardado" } else { "Guardar" }}
                </button>
            </div>

            <p class="project-detail__description">{project.description.clone()}</p>

            <ul class="tags">
                {project
                    .technologies
                    .iter()
                    .map(|t| view! { <li class="tag">{t.clone()}</li> })
                    .collect_view()}
            </ul>

            {project.url.clone().map(|url| view! {
                <a class="button button--secondary" href=url target="_blank" rel="noopener">
                    "Ver proyecto"
                    {icon("external")}
                </a>
            })}
        </div>
    }
}
