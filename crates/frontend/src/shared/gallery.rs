//! Horizontally scrolling image strip of an open record

use crate::shared::config::site_config;
use crate::shared::icons::icon;
use contracts::shared::catalog::{GalleryScroller, GalleryViewport, ScrollDirection};
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn GalleryStrip(
    images: Vec<String>,
    /// Alt text prefix for the images
    #[prop(into)]
    alt: String,
    /// Whether the owning record is still open
    #[prop(into)]
    open: Signal<bool>,
) -> impl IntoView {
    let strip = NodeRef::<html::Div>::new();
    let scroller = GalleryScroller::new(site_config().catalog.gallery_step_px);
    let image_count = images.len();

    let scroll = move |direction: ScrollDirection| {
        let Some(el) = strip.get() else {
            return;
        };
        let images_in_view = ((el.client_width() as f64) / scroller.step_px).floor().max(1.0) as usize;
        let viewport = GalleryViewport {
            open: open.get_untracked(),
            image_count,
            images_in_view,
        };

        if let Some(cmd) = scroller.command(direction, &viewport) {
            let options = web_sys::ScrollToOptions::new();
            options.set_left(cmd.delta_px);
            if cmd.smooth {
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
            }
            el.scroll_by_with_scroll_to_options(&options);
        }
    };

    view! {
        <div class="gallery">
            <button
                class="gallery__nav gallery__nav--left"
                aria-label="Anterior"
                on:click=move |_| scroll(ScrollDirection::Left)
            >
                {icon("chevron-left")}
            </button>
            <div class="gallery__strip" node_ref=strip>
                {images
                    .into_iter()
                    .enumerate()
                    .map(|(i, src)| {
                        let alt = format!("{} {}", alt, i + 1);
                        view! { <img class="gallery__image" src=src alt=alt loading="lazy" /> }
                    })
                    .collect_view()}
            </div>
            <button
                class="gallery__nav gallery__nav--right"
                aria-label="Siguiente"
                on:click=move |_| scroll(ScrollDirection::Right)
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
