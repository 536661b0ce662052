use super::api::fetch_testimonials;
use contracts::shared::load_state::LoadState;
use contracts::shared::testimonial::Testimonial;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn TestimonialsStrip() -> impl IntoView {
    let state = RwSignal::new(LoadState::<Vec<Testimonial>>::Loading);

    spawn_local(async move {
        let result = fetch_testimonials().await;
        if let Err(e) = &result {
            log::warn!("testimonials unavailable: {}", e);
        }
        // the page may be gone by now
        let _ = state.try_set(LoadState::from_result(result));
    });

    view! {
        <section class="testimonials">
            <h2 class="section__title">"Lo que dicen nuestros clientes"</h2>
            {move || state.with(|s| match s {
                LoadState::Loading => view! {
                    <p class="testimonials__status">"Cargando opiniones..."</p>
                }.into_any(),
                LoadState::Failed(_) => view! {
                    <p class="testimonials__status">"Ahora mismo no podemos mostrar las opiniones."</p>
                }.into_any(),
                LoadState::Loaded(items) => view! {
                    <div class="testimonials__grid">
                        {items
                            .iter()
                            .map(|t| view! {
                                <blockquote class="testimonial">
                                    <p class="testimonial__quote">{t.quote.clone()}</p>
                                    <footer>
                                        <strong>{t.author.clone()}</strong>
                                        <span class="testimonial__role">{t.role.clone()}</span>
                                    </footer>
                                </blockquote>
                            })
                            .collect_view()}
                    </div>
                }.into_any(),
            })}
        </section>
    }
}
