use crate::shared::components::ui::category_badge;
use crate::shared::icons::icon;
use contracts::domain::a001_faq::{Faq, FaqId};
use contracts::domain::common::CatalogRecord;
use contracts::shared::catalog::{Catalog, VoteDirection};
use leptos::prelude::*;

/// Answer, helpfulness vote and related questions of an open FAQ
#[component]
#[allow(non_snake_case)]
pub fn FaqDetails(
    faq: Faq,
    catalog: RwSignal<Catalog<Faq>>,
    on_vote: Callback<(FaqId, VoteDirection)>,
    /// Opens another question in place of this one
    on_open: Callback<FaqId>,
) -> impl IntoView {
    let id = faq.id;
    let counts = Signal::derive(move || catalog.with(|c| c.counts(&id).unwrap_or_default()));
    let voted = Signal::derive(move || catalog.with(|c| c.tracker().vote_of(&id)));
    let thanks = Signal::derive(move || catalog.with(|c| c.thanks_visible(&id)));

    let related: Vec<(FaqId, String)> = catalog.with_untracked(|c| {
        faq.related()
            .iter()
            .filter_map(|rid| c.get(rid).map(|r| (r.id, r.question.clone())))
            .collect()
    });

    view! {
        <div class="faq-detail">
            {category_badge::<Faq>(&faq.category)}
            <p class="faq-detail__answer">{faq.answer.clone()}</p>

            <div class="vote">
                <span class="vote__prompt">"¿Te ha resultado útil?"</span>
                <button
                    class="vote__button"
                    class:vote__button--chosen=move || voted.get() == Some(VoteDirection::Helpful)
                    aria-label="Útil"
                    on:click=move |_| on_vote.run((id, VoteDirection::Helpful))
                >
                    {icon("thumbs-up")}
                    <span class="vote__count">{move || counts.get().helpful}</span>
                </button>
                <button
                    class="vote__button"
                    class:vote__button--chosen=move || voted.get() == Some(VoteDirection::NotHelpful)
                    aria-label="No útil"
                    on:click=move |_| on_vote.run((id, VoteDirection::NotHelpful))
                >
                    {icon("thumbs-down")}
                    <span class="vote__count">{move || counts.get().not_helpful}</span>
                </button>
            </div>

            <Show when=move || thanks.get()>
                <p class="vote__thanks" role="status">"¡Gracias por tu opinión!"</p>
            </Show>

            {(!related.is_empty()).then(|| view! {
                <div class="related">
                    <h4 class="related__title">"Preguntas relacionadas"</h4>
                    <ul class="related__list">
                        {related
                            .into_iter()
                            .map(|(rid, question)| view! {
                                <li>
                                    <button class="button button--link" on:click=move |_| on_open.run(rid)>
                                        {question}
                                    </button>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
}
