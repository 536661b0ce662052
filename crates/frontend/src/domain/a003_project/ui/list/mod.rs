use crate::domain::a003_project::ui::details::ProjectDetails;
use crate::shared::components::ui::category_badge;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, CatalogToolbar, NoResults};
use crate::shared::modal::{bind_detail, open_record, use_detail, use_selected_id, DetailModal};
use contracts::domain::a003_project::{self, Project, ProjectId};
use contracts::shared::catalog::Catalog;
use leptos::prelude::*;

/// Showroom of case studies with favorites
#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let catalog = RwSignal::new(Catalog::new(a003_project::seed()));
    let detail = use_detail::<Project>();
    let selected = use_selected_id(detail);
    let bindings = bind_detail(detail);

    let open = Callback::new(move |id: ProjectId| open_record(detail, catalog, id));

    let toggle_favorite = Callback::new(move |id: ProjectId| {
        catalog.update(|c| {
            if let Err(e) = c.favorite(&id) {
                log::warn!("favorite rejected: {}", e);
            }
        });
    });

    let favorites = Signal::derive(move || catalog.with(|c| c.favorites_count()));

    let title = Signal::derive(move || {
        detail.with(|d| d.selected().map(|p| p.title.clone()).unwrap_or_default())
    });

    let cards = move || {
        let (projects, term) = catalog.with(|c| {
            (
                c.visible().into_iter().cloned().collect::<Vec<Project>>(),
                c.filter().search_term.clone(),
            )
        });
        if projects.is_empty() {
            return view! { <NoResults catalog=catalog /> }.into_any();
        }

        view! {
            <div class="card-grid">
                {projects
                    .into_iter()
                    .map(|project| {
                        let id = StoredValue::new(project.id.clone());
                        let is_favorite =
                            move || catalog.with(|c| id.with_value(|id| c.is_favorite(id)));
                        let cover = project.images.first().cloned().unwrap_or_default();
                        view! {
                            <article class="card project-card">
                                <div class="card__media">
                                    <img src=cover alt=project.title.clone() loading="lazy" />
                                    <button
                                        class="favorite"
                                        class:favorite--active=is_favorite
                                        aria-label="Favorito"
                                        aria-pressed=move || is_favorite().to_string()
                                        on:click=move |_| toggle_favorite.run(id.get_value())
                                    >
                                        {move || if is_favorite() { icon("heart-filled") } else { icon("heart") }}
                                    </button>
                                </div>
                                <div class="card__body">
                                    {category_badge::<Project>(&project.category)}
                                    <h3 class="card__title">{highlight_matches(&project.title, &term)}</h3>
                                    <p class="card__meta">{format!("{} · {}", project.client, project.year)}</p>
                                    <p class="card__text">{highlight_matches(&project.description, &term)}</p>
                                    <ul class="tags">
                                        {project
                                            .technologies
                                            .iter()
                                            .map(|t| view! { <li class="tag">{highlight_matches(t, &term)}</li> })
                                            .collect_view()}
                                    </ul>
                                    <button class="button button--primary" on:click=move |_| open.run(id.get_value())>
                                        "Ver caso"
                                    </button>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page page--showroom">
            <PageHeader title="Showroom" subtitle="Proyectos que hemos diseñado y desarrollado.">
                <span class="favorites-counter">
                    {icon("heart")}
                    {move || format!("Favoritos ({})", favorites.get())}
                </span>
            </PageHeader>

            <CatalogToolbar catalog=catalog placeholder="Busca por proyecto, cliente o tecnología..." />

            {cards}

            <DetailModal
                open=bindings.open
                title=title
                on_key=bindings.on_key
                on_click=bindings.on_click
                on_close=bindings.on_close
            >
                {move || {
                    let project = selected
                        .get()
                        .and_then(|_| detail.with_untracked(|d| d.selected().cloned()));
                    project.map(|project| {
                        let id = StoredValue::new(project.id.clone());
                        let open = Signal::derive(move || {
                            selected.with(|current| id.with_value(|id| current.as_ref() == Some(id)))
                        });
                        let is_favorite = Signal::derive(move || {
                            catalog.with(|c| id.with_value(|id| c.is_favorite(id)))
                        });
                        view! {
                            <ProjectDetails
                                project=project
                                open=open
                                is_favorite=is_favorite
                                on_favorite=Callback::new(move |_| toggle_favorite.run(id.get_value()))
                            />
                        }
                    })
                }}
            </DetailModal>
        </div>
    }
}
