use crate::shared::api_utils::post_form;
use crate::shared::config::site_config;
use contracts::shared::contact::{ContactRequest, FormValues};
use contracts::shared::form::SubmitOutcome;

/// POST /contact
pub async fn send_contact(values: FormValues) -> SubmitOutcome {
    let request = ContactRequest::from_values(&values, &site_config().api.contact_source);
    post_form("/contact", &request).await
}
