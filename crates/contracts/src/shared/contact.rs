//! Wire types of the contact and application endpoints

use crate::domain::a002_destination::Destination;
use crate::domain::a004_vacancy::VacancyRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type FormValues = BTreeMap<String, String>;

fn field(values: &FormValues, name: &str) -> String {
    values.get(name).map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Body of `POST /contact`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Which page/form the message came from
    pub source: String,
}

impl ContactRequest {
    pub fn from_values(values: &FormValues, source: &str) -> Self {
        Self {
            name: field(values, "name"),
            email: field(values, "email"),
            message: field(values, "message"),
            source: source.to_string(),
        }
    }

    /// Booking requests of the travel demo go through the contact endpoint
    pub fn from_booking(values: &FormValues, destination: &Destination, source: &str) -> Self {
        let mut message = format!(
            "Reserva: {} ({}) para {} viajero(s), salida {}.",
            destination.name,
            destination.country,
            field(values, "travellers"),
            field(values, "date"),
        );
        let notes = field(values, "message");
        if !notes.is_empty() {
            message.push_str("\n\n");
            message.push_str(&notes);
        }

        Self {
            name: field(values, "name"),
            email: field(values, "email"),
            message,
            source: format!("{}:{}", source, destination.id),
        }
    }
}

/// Body of `POST /careers/applications`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "coverLetter")]
    pub cover_letter: String,
    #[serde(rename = "portfolioUrl", skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    pub vacancy: VacancyRef,
}

impl ApplicationRequest {
    pub fn from_values(values: &FormValues, vacancy: VacancyRef) -> Self {
        let portfolio = field(values, "portfolio");
        Self {
            name: field(values, "name"),
            email: field(values, "email"),
            phone: field(values, "phone"),
            cover_letter: field(values, "coverLetter"),
            portfolio_url: (!portfolio.is_empty()).then_some(portfolio),
            vacancy,
        }
    }
}

/// Field-level problem reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    /// Form field the issue belongs to (`body.email` -> `email`)
    pub fn field_name(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }
}

/// Non-2xx JSON body of the endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<FieldIssue>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_destination;
    use crate::domain::a004_vacancy;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_contact_request_json_shape() {
        let req = ContactRequest::from_values(
            &values(&[("name", " Ana "), ("email", "ana@example.com"), ("message", "Hola")]),
            "website",
        );
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ana",
                "email": "ana@example.com",
                "message": "Hola",
                "source": "website"
            })
        );
    }

    #[test]
    fn test_error_body_parses_partial_shapes() {
        let body: ContactErrorBody =
            serde_json::from_str(r#"{"errors":[{"path":"body.email","message":"Email inválido"}]}"#)
                .unwrap();
        assert_eq!(body.message, None);
        let errors = body.errors.unwrap();
        assert_eq!(errors[0].field_name(), "email");

        let empty: ContactErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ContactErrorBody::default());
    }

    #[test]
    fn test_booking_message_mentions_destination() {
        let destination = a002_destination::seed().remove(0);
        let req = ContactRequest::from_booking(
            &values(&[
                ("name", "Luis"),
                ("email", "luis@example.com"),
                ("travellers", "2"),
                ("date", "2026-06-01"),
            ]),
            &destination,
            "travel-booking",
        );
        assert!(req.message.starts_with("Reserva: Santorini (Grecia) para 2 viajero(s)"));
        assert_eq!(req.source, "travel-booking:1");
    }

    #[test]
    fn test_application_carries_vacancy() {
        let vacancy = a004_vacancy::seed().remove(0);
        let req = ApplicationRequest::from_values(
            &values(&[("name", "Marta"), ("email", "m@example.com"), ("coverLetter", "...")]),
            VacancyRef::from(&vacancy),
        );
        assert_eq!(req.vacancy.id, "rust-backend");
        assert_eq!(req.portfolio_url, None);
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("portfolioUrl").is_none());
        assert_eq!(json["coverLetter"], "...");
    }
}
