use crate::domain::a002_destination::ui::booking::DestinationBooking;
use crate::shared::components::ui::category_badge;
use crate::shared::gallery::GalleryStrip;
use contracts::domain::a002_destination::Destination;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn DestinationDetails(
    destination: Destination,
    /// Whether the destination is still the open record
    #[prop(into)]
    open: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="destination-detail">
            <GalleryStrip
                images=destination.images.clone()
                alt=destination.name.clone()
                open=open
            />

            <div class="destination-detail__facts">
                {category_badge::<Destination>(&destination.category)}
                <span>{destination.country.clone()}</span>
                <span>{destination.duration_label()}</span>
                <span class="destination-detail__price">{destination.price_label()}</span>
                <span class="rating">{format!("★ {:.1}", destination.rating)}</span>
            </div>

            <p class="destination-detail__description">{destination.description.clone()}</p>

            <h4>"Lo más destacado"</h4>
            <ul class="highlights">
                {destination
                    .highlights
                    .iter()
                    .map(|h| view! { <li>{h.clone()}</li> })
                    .collect_view()}
            </ul>

            <DestinationBooking destination=destination />
        </div>
    }
}
