use crate::domain::a004_vacancy::ui::details::VacancyDetails;
use crate::shared::components::ui::category_badge;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, CatalogToolbar, NoResults};
use crate::shared::modal::{bind_detail, open_record, use_detail, use_selected_id, DetailModal};
use contracts::domain::a004_vacancy::{self, Vacancy, VacancyId};
use contracts::shared::catalog::Catalog;
use leptos::prelude::*;

/// Careers page: open positions with the application form
#[component]
#[allow(non_snake_case)]
pub fn VacancyList() -> impl IntoView {
    let catalog = RwSignal::new(Catalog::new(a004_vacancy::seed()));
    let detail = use_detail::<Vacancy>();
    let selected = use_selected_id(detail);
    let bindings = bind_detail(detail);

    let open = Callback::new(move |id: VacancyId| open_record(detail, catalog, id));

    let title = Signal::derive(move || {
        detail.with(|d| d.selected().map(|v| v.title.clone()).unwrap_or_default())
    });

    let open_positions = Signal::derive(move || {
        format!("{} posiciones abiertas", catalog.with(|c| c.records().len()))
    });

    let rows = move || {
        let (vacancies, term) = catalog.with(|c| {
            (
                c.visible().into_iter().cloned().collect::<Vec<Vacancy>>(),
                c.filter().search_term.clone(),
            )
        });
        if vacancies.is_empty() {
            return view! { <NoResults catalog=catalog /> }.into_any();
        }

        view! {
            <div class="vacancy-list">
                {vacancies
                    .into_iter()
                    .map(|vacancy| {
                        let id = StoredValue::new(vacancy.id.clone());
                        view! {
                            <article class="vacancy-card">
                                <div class="vacancy-card__main">
                                    {category_badge::<Vacancy>(&vacancy.category)}
                                    <h3 class="vacancy-card__title">{highlight_matches(&vacancy.title, &term)}</h3>
                                    <p class="card__meta">
                                        {icon("map-pin")}
                                        {format!("{} · {} · {}", vacancy.location, vacancy.modality, vacancy.kind)}
                                    </p>
                                    <p class="card__text">{highlight_matches(&vacancy.description, &term)}</p>
                                </div>
                                <div class="vacancy-card__side">
                                    {vacancy.salary_range.clone().map(|s| view! { <span class="salary">{s}</span> })}
                                    <button class="button button--primary" on:click=move |_| open.run(id.get_value())>
                                        "Ver oferta"
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
        <div class="page page--careers">
            <PageHeader title="Trabaja con nosotros" subtitle=open_positions />

            <CatalogToolbar catalog=catalog placeholder="Busca por puesto o tecnología..." />

            {rows}

            <DetailModal
                open=bindings.open
                title=title
                on_key=bindings.on_key
                on_click=bindings.on_click
                on_close=bindings.on_close
            >
                {move || {
                    selected
                        .get()
                        .and_then(|_| detail.with_untracked(|d| d.selected().cloned()))
                        .map(|vacancy| view! { <VacancyDetails vacancy=vacancy /> })
                }}
            </DetailModal>
        </div>
    }
}
