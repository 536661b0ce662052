use crate::domain::a001_faq::ui::details::FaqDetails;
use crate::shared::components::ui::category_badge;
use crate::shared::components::PageHeader;
use crate::shared::config::site_config;
use crate::shared::list_utils::{highlight_matches, CatalogToolbar, NoResults};
use crate::shared::modal::{bind_detail, open_record, use_detail, use_selected_id, DetailModal};
use crate::shared::timers::KeyedTimers;
use crate::shared::toast::notify;
use contracts::domain::a001_faq::{self, Faq, FaqId};
use contracts::shared::catalog::{Catalog, CatalogError, VoteDirection};
use leptos::prelude::*;
use thaw::{ToastIntent, ToasterInjection};

#[component]
#[allow(non_snake_case)]
pub fn FaqList() -> impl IntoView {
    let catalog = RwSignal::new(Catalog::new(a001_faq::seed()));
    let detail = use_detail::<Faq>();
    let selected = use_selected_id(detail);
    let bindings = bind_detail(detail);
    let thanks_timers = KeyedTimers::<FaqId>::new();
    let toaster = StoredValue::new_local(ToasterInjection::expect_context());
    let thanks_ms = site_config().catalog.thanks_visible_ms;

    let vote = Callback::new(move |(id, direction): (FaqId, VoteDirection)| {
        match catalog.try_update(|c| c.vote(&id, direction)) {
            Some(Ok(_)) => {
                thanks_timers.schedule(id, thanks_ms, move || {
                    catalog.try_update(|c| c.clear_thanks(&id));
                });
            }
            Some(Err(CatalogError::AlreadyVoted)) => toaster.with_value(|t| {
                notify(
                    t,
                    ToastIntent::Warning,
                    "Ya has valorado esta respuesta",
                    Some("Solo se admite un voto por pregunta.".to_string()),
                )
            }),
            Some(Err(e)) => log::warn!("vote rejected: {}", e),
            None => {}
        }
    });

    let open = Callback::new(move |id: FaqId| open_record(detail, catalog, id));

    let title = Signal::derive(move || {
        detail.with(|d| d.selected().map(|f| f.question.clone()).unwrap_or_default())
    });

    let rows = move || {
        let (faqs, term) = catalog.with(|c| {
            (
                c.visible().into_iter().cloned().collect::<Vec<Faq>>(),
                c.filter().search_term.clone(),
            )
        });
        if faqs.is_empty() {
            return view! { <NoResults catalog=catalog /> }.into_any();
        }

        view! {
            <div class="faq-list">
                {faqs
                    .into_iter()
                    .map(|faq| {
                        let id = faq.id;
                        view! {
                            <article class="faq-card">
                                {category_badge::<Faq>(&faq.category)}
                                <h3 class="faq-card__question">{highlight_matches(&faq.question, &term)}</h3>
                                <p class="faq-card__excerpt">{highlight_matches(&excerpt(&faq.answer), &term)}</p>
                                <button class="button button--link" on:click=move |_| open.run(id)>
                                    "Ver respuesta"
                                </button>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page page--faq">
            <PageHeader
                title="Preguntas frecuentes"
                subtitle="Todo lo que suelen preguntarnos antes de empezar un proyecto."
            />

            <CatalogToolbar catalog=catalog placeholder="Busca una pregunta..." />

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
                        .map(|faq| view! { <FaqDetails faq=faq catalog=catalog on_vote=vote on_open=open /> })
                }}
            </DetailModal>
        </div>
    }
}

/// First sentence of the answer, or the first 140 characters
fn excerpt(answer: &str) -> String {
    let sentence = answer.split_inclusive(". ").next().unwrap_or(answer).trim_end();
    if sentence.chars().count() <= 140 {
        return sentence.to_string();
    }
    let mut short: String = sentence.chars().take(140).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_takes_first_sentence() {
        assert_eq!(excerpt("Depende del alcance. Te damos un presupuesto."), "Depende del alcance.");
    }

    #[test]
    fn test_excerpt_truncates_long_sentence() {
        let long = "a".repeat(200);
        let short = excerpt(&long);
        assert_eq!(short.chars().count(), 141);
        assert!(short.ends_with('…'));
    }
}
