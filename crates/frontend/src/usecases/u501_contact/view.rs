use super::api::send_contact;
use crate::shared::form_view::{submit_form, FieldKind, FormActions, FormFields};
use contracts::shared::form::{FormController, CONTACT_FORM};
use leptos::prelude::*;
use thaw::ToasterInjection;

const CONTACT_FIELD_KINDS: &[(&str, FieldKind)] =
    &[("email", FieldKind::Email), ("message", FieldKind::Multiline)];

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(FormController::new(CONTACT_FORM));
    let toaster = StoredValue::new_local(ToasterInjection::expect_context());

    let on_submit = Callback::new(move |_| {
        submit_form(form, toaster.get_value(), "Mensaje enviado", send_contact);
    });

    view! {
        <section class="contact" id="contacto">
            <h2 class="section__title">"Hablemos de tu proyecto"</h2>
            <p class="section__subtitle">"Cuéntanos qué necesitas y te respondemos en un día laborable."</p>
            <div class="form">
                <FormFields form=form kinds=CONTACT_FIELD_KINDS />
                <FormActions
                    form=form
                    label="Enviar mensaje"
                    on_submit=on_submit
                    success_text="¡Gracias! Hemos recibido tu mensaje."
                />
            </div>
        </section>
    }
}
