use crate::shared::api_utils::post_form;
use crate::shared::form_view::{submit_form, FieldKind, FormActions, FormFields};
use contracts::domain::a004_vacancy::{Vacancy, VacancyRef};
use contracts::shared::contact::ApplicationRequest;
use contracts::shared::form::{FormController, APPLICATION_FORM};
use leptos::prelude::*;
use thaw::ToasterInjection;

const APPLICATION_FIELD_KINDS: &[(&str, FieldKind)] = &[
    ("email", FieldKind::Email),
    ("phone", FieldKind::Tel),
    ("coverLetter", FieldKind::Multiline),
];

/// Application form for the open vacancy
#[component]
#[allow(non_snake_case)]
pub fn VacancyApplication(vacancy: Vacancy) -> impl IntoView {
    let form = RwSignal::new(FormController::new(APPLICATION_FORM));
    let toaster = StoredValue::new_local(ToasterInjection::expect_context());
    let vacancy = StoredValue::new(VacancyRef::from(&vacancy));

    let on_submit = Callback::new(move |_| {
        let vacancy = vacancy.get_value();
        submit_form(
            form,
            toaster.get_value(),
            "Candidatura enviada",
            move |values| async move {
                log::info!("applying to vacancy {}", vacancy.id);
                let request = ApplicationRequest::from_values(&values, vacancy);
                post_form("/careers/applications", &request).await
            },
        );
    });

    view! {
        <section class="application">
            <h3 class="application__title">"Envía tu candidatura"</h3>
            <div class="form">
                <FormFields form=form kinds=APPLICATION_FIELD_KINDS />
                <FormActions
                    form=form
                    label="Enviar candidatura"
                    on_submit=on_submit
                    success_text="Hemos recibido tu candidatura. Te contactaremos si encajas en el proceso."
                />
            </div>
        </section>
    }
}
