use crate::domain::a002_destination::ui::details::DestinationDetails;
use crate::shared::components::ui::category_badge;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, CatalogToolbar, NoResults};
use crate::shared::modal::{bind_detail, open_record, use_detail, use_selected_id, DetailModal};
use contracts::domain::a002_destination::{self, Destination, DestinationId};
use contracts::shared::catalog::Catalog;
use leptos::prelude::*;

/// Travel demo: destinations with favorites, gallery and booking
#[component]
#[allow(non_snake_case)]
pub fn DestinationList() -> impl IntoView {
    let catalog = RwSignal::new(Catalog::new(a002_destination::seed()));
    let detail = use_detail::<Destination>();
    let selected = use_selected_id(detail);
    let bindings = bind_detail(detail);

    let open = Callback::new(move |id: DestinationId| open_record(detail, catalog, id));

    let toggle_favorite = move |id: DestinationId| {
        catalog.update(|c| {
            if let Err(e) = c.favorite(&id) {
                log::warn!("favorite rejected: {}", e);
            }
        });
    };

    let favorites = Signal::derive(move || catalog.with(|c| c.favorites_count()));

    let title = Signal::derive(move || {
        detail.with(|d| {
            d.selected()
                .map(|dest| format!("{}, {}", dest.name, dest.country))
                .unwrap_or_default()
        })
    });

    let cards = move || {
        let (destinations, term) = catalog.with(|c| {
            (
                c.visible().into_iter().cloned().collect::<Vec<Destination>>(),
                c.filter().search_term.clone(),
            )
        });
        if destinations.is_empty() {
            return view! { <NoResults catalog=catalog /> }.into_any();
        }

        view! {
            <div class="card-grid">
                {destinations
                    .into_iter()
                    .map(|dest| {
                        let id = dest.id;
                        let is_favorite = move || catalog.with(|c| c.is_favorite(&id));
                        let cover = dest.images.first().cloned().unwrap_or_default();
                        view! {
                            <article class="card destination-card">
                                <div class="card__media">
                                    <img src=cover alt=dest.name.clone() loading="lazy" />
                                    <button
                                        class="favorite"
                                        class:favorite--active=is_favorite
                                        aria-label="Favorito"
                                        aria-pressed=move || is_favorite().to_string()
                                        on:click=move |_| toggle_favorite(id)
                                    >
                                        {move || if is_favorite() { icon("heart-filled") } else { icon("heart") }}
                                    </button>
                                </div>
                                <div class="card__body">
                                    {category_badge::<Destination>(&dest.category)}
                                    <h3 class="card__title">{highlight_matches(&dest.name, &term)}</h3>
                                    <p class="card__meta">
                                        {icon("map-pin")}
                                        {highlight_matches(&dest.country, &term)}
                                    </p>
                                    <p class="card__text">{highlight_matches(&dest.description, &term)}</p>
                                    <div class="card__footer">
                                        <span>{dest.duration_label()}</span>
                                        <strong>{dest.price_label()}</strong>
                                    </div>
                                    <button class="button button--primary" on:click=move |_| open.run(id)>
                                        "Ver destino"
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
        <div class="page page--travel">
            <PageHeader
                title="Viajes"
                subtitle="Demo de agencia de viajes: filtra destinos, guarda favoritos y solicita una reserva."
            >
                <span class="favorites-counter">
                    {icon("heart")}
                    {move || format!("Favoritos ({})", favorites.get())}
                </span>
            </PageHeader>

            <CatalogToolbar catalog=catalog placeholder="Busca destino o país..." />

            {cards}

            <DetailModal
                open=bindings.open
                title=title
                on_key=bindings.on_key
                on_click=bindings.on_click
                on_close=bindings.on_close
            >
                {move || {
                    let dest = selected
                        .get()
                        .and_then(|_| detail.with_untracked(|d| d.selected().cloned()));
                    dest.map(|dest| {
                        let id = dest.id;
                        let open = Signal::derive(move || selected.get() == Some(id));
                        view! { <DestinationDetails destination=dest open=open /> }
                    })
                }}
            </DetailModal>
        </div>
    }
}
