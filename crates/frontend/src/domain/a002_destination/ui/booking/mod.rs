use crate::shared::api_utils::post_form;
use crate::shared::config::site_config;
use crate::shared::form_view::{submit_form, FieldKind, FormActions, FormFields};
use contracts::domain::a002_destination::Destination;
use contracts::shared::contact::ContactRequest;
use contracts::shared::form::{FormController, BOOKING_FORM};
use leptos::prelude::*;
use thaw::ToasterInjection;

const BOOKING_FIELD_KINDS: &[(&str, FieldKind)] = &[
    ("email", FieldKind::Email),
    ("travellers", FieldKind::Number),
    ("date", FieldKind::Date),
    ("message", FieldKind::Multiline),
];

/// Booking request for the open destination, sent through the contact endpoint
#[component]
#[allow(non_snake_case)]
pub fn DestinationBooking(destination: Destination) -> impl IntoView {
    let form = RwSignal::new(FormController::new(BOOKING_FORM));
    let toaster = StoredValue::new_local(ToasterInjection::expect_context());
    let destination = StoredValue::new(destination);

    let on_submit = Callback::new(move |_| {
        let destination = destination.get_value();
        submit_form(
            form,
            toaster.get_value(),
            "Solicitud de reserva enviada",
            move |values| async move {
                let request = ContactRequest::from_booking(
                    &values,
                    &destination,
                    &site_config().api.contact_source,
                );
                post_form("/contact", &request).await
            },
        );
    });

    view! {
        <section class="booking">
            <h3 class="booking__title">"Solicita tu reserva"</h3>
            <div class="form">
                <FormFields form=form kinds=BOOKING_FIELD_KINDS />
                <FormActions
                    form=form
                    label="Solicitar reserva"
                    on_submit=on_submit
                    success_text="Te escribiremos en menos de 24 horas para confirmar la reserva."
                />
            </div>
        </section>
    }
}
