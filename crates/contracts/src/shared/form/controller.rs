use super::schema::FormSchema;
use crate::shared::contact::{FieldIssue, FormValues};
use std::collections::BTreeMap;
use thiserror::Error;

pub const GENERIC_FAILURE: &str = "No se pudo enviar el formulario. Inténtalo de nuevo.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Result of the request, as seen by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx
    Accepted,
    /// Non-2xx with an optional message and field issues
    Rejected {
        message: Option<String>,
        errors: Vec<FieldIssue>,
    },
    /// Network error, timeout or unreadable response
    Failed(String),
}

/// Why `begin_submit` did not start a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("el formulario tiene {} error(es)", .0.len())]
    Invalid(BTreeMap<String, String>),

    #[error("ya se está enviando")]
    InFlight,
}

/// Field values, per-field errors and submission status of one form
#[derive(Debug, Clone)]
pub struct FormController {
    schema: FormSchema,
    values: FormValues,
    errors: BTreeMap<String, String>,
    status: SubmitStatus,
}

impl FormController {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            values: Self::blank_values(&schema),
            errors: BTreeMap::new(),
            status: SubmitStatus::Idle,
        }
    }

    fn blank_values(schema: &FormSchema) -> FormValues {
        schema
            .fields
            .iter()
            .map(|f| (f.name.to_string(), String::new()))
            .collect()
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Update one field; drops only that field's error and leaves a
    /// finished Success/Error state for Idle
    pub fn edit(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
        self.errors.remove(field);
        if matches!(self.status, SubmitStatus::Success | SubmitStatus::Error(_)) {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Hide the success / error notice without touching the fields
    pub fn dismiss(&mut self) {
        if !self.is_submitting() {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn validate(&self) -> BTreeMap<String, String> {
        self.schema
            .fields
            .iter()
            .filter_map(|spec| {
                spec.validate(self.value(spec.name))
                    .err()
                    .map(|msg| (spec.name.to_string(), msg))
            })
            .collect()
    }

    /// Validate and enter Submitting; returns the values to send.
    ///
    /// Invalid forms stay Idle with `errors` filled in.
    pub fn begin_submit(&mut self) -> Result<FormValues, SubmitBlocked> {
        if self.is_submitting() {
            log::warn!("{}: submit ignored, request in flight", self.schema.name);
            return Err(SubmitBlocked::InFlight);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            log::info!("{}: {} validation error(s)", self.schema.name, errors.len());
            self.errors = errors.clone();
            self.status = SubmitStatus::Idle;
            return Err(SubmitBlocked::Invalid(errors));
        }

        self.errors.clear();
        self.status = SubmitStatus::Submitting;
        log::debug!("{}: submitting", self.schema.name);
        Ok(self.values.clone())
    }

    /// Apply the request result; ignored unless a submit is in flight
    pub fn finish(&mut self, outcome: SubmitOutcome) {
        if !self.is_submitting() {
            log::warn!("{}: outcome without pending submit ignored", self.schema.name);
            return;
        }

        match outcome {
            SubmitOutcome::Accepted => {
                self.values = Self::blank_values(&self.schema);
                self.errors.clear();
                self.status = SubmitStatus::Success;
                log::info!("{}: submitted", self.schema.name);
            }
            SubmitOutcome::Rejected { message, errors } => {
                // the server's message is only shown next to field errors
                let message = match message {
                    Some(message) if !errors.is_empty() => message,
                    _ => GENERIC_FAILURE.to_string(),
                };
                for issue in errors {
                    self.errors
                        .insert(issue.field_name().to_string(), issue.message);
                }
                log::warn!("{}: rejected: {}", self.schema.name, message);
                self.status = SubmitStatus::Error(message);
            }
            SubmitOutcome::Failed(reason) => {
                log::error!("{}: submission failed: {}", self.schema.name, reason);
                self.status = SubmitStatus::Error(GENERIC_FAILURE.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::CONTACT_FORM;

    fn filled() -> FormController {
        let mut form = FormController::new(CONTACT_FORM);
        form.edit("name", "Ana");
        form.edit("email", "ana@example.com");
        form.edit("message", "Quiero rediseñar mi tienda online");
        form
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut form = FormController::new(CONTACT_FORM);
        form.edit("email", "no-es-email");

        let blocked = form.begin_submit().unwrap_err();
        assert!(matches!(blocked, SubmitBlocked::Invalid(ref e) if e.len() == 3));
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert_eq!(form.error("email"), Some("Introduce un email válido"));
        assert_eq!(form.error("name"), Some("Este campo es obligatorio"));
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        let sent = form.begin_submit().unwrap();
        assert_eq!(sent["name"], "Ana");
        assert!(form.is_submitting());

        form.finish(SubmitOutcome::Accepted);
        assert_eq!(form.status(), &SubmitStatus::Success);
        assert_eq!(form.value("name"), "");
        assert_eq!(form.value("message"), "");

        form.edit("name", "B");
        assert_eq!(form.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_in_flight_guard() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
        form.dismiss();
        assert!(form.is_submitting());
    }

    #[test]
    fn test_server_errors_take_precedence() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish(SubmitOutcome::Rejected {
            message: Some("Revisa los campos".to_string()),
            errors: vec![
                FieldIssue {
                    path: "email".to_string(),
                    message: "Dominio no permitido".to_string(),
                },
                FieldIssue {
                    path: "body.message".to_string(),
                    message: "Mensaje sospechoso".to_string(),
                },
            ],
        });

        assert_eq!(form.status(), &SubmitStatus::Error("Revisa los campos".to_string()));
        assert_eq!(form.error("email"), Some("Dominio no permitido"));
        assert_eq!(form.error("message"), Some("Mensaje sospechoso"));
        // draft is kept for a retry
        assert_eq!(form.value("name"), "Ana");
    }

    #[test]
    fn test_rejection_without_field_errors_is_generic() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish(SubmitOutcome::Rejected {
            message: Some("Internal Server Error".to_string()),
            errors: Vec::new(),
        });

        assert_eq!(form.status(), &SubmitStatus::Error(GENERIC_FAILURE.to_string()));
        assert!(form.errors().is_empty());
        assert_eq!(form.value("email"), "ana@example.com");
    }

    #[test]
    fn test_edit_after_error_clears_only_that_field() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish(SubmitOutcome::Rejected {
            message: None,
            errors: vec![
                FieldIssue {
                    path: "email".to_string(),
                    message: "x".to_string(),
                },
                FieldIssue {
                    path: "name".to_string(),
                    message: "y".to_string(),
                },
            ],
        });
        assert_eq!(form.status(), &SubmitStatus::Error(GENERIC_FAILURE.to_string()));

        form.edit("email", "otra@example.com");
        assert_eq!(form.error("email"), None);
        assert_eq!(form.error("name"), Some("y"));
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_network_failure_keeps_draft() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish(SubmitOutcome::Failed("timeout".to_string()));

        assert_eq!(form.status(), &SubmitStatus::Error(GENERIC_FAILURE.to_string()));
        assert_eq!(form.value("email"), "ana@example.com");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_outcome_without_submit_is_ignored() {
        let mut form = filled();
        form.finish(SubmitOutcome::Accepted);
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert_eq!(form.value("name"), "Ana");
    }
}
