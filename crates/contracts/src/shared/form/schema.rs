use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    /// Something `@` a domain with a dot; empty values pass (combine with `Required`)
    Email,
    MinLength(usize),
}

impl FieldRule {
    pub fn check(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        match self {
            FieldRule::Required if value.is_empty() => Err("Este campo es obligatorio".to_string()),
            FieldRule::Email if !value.is_empty() && !EMAIL_RE.is_match(value) => {
                Err("Introduce un email válido".to_string())
            }
            FieldRule::MinLength(min) if !value.is_empty() && value.chars().count() < *min => {
                Err(format!("Debe tener al menos {} caracteres", min))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub rules: &'static [FieldRule],
}

impl FieldSpec {
    pub fn is_required(&self) -> bool {
        self.rules.contains(&FieldRule::Required)
    }

    /// First failing rule wins
    pub fn validate(&self, value: &str) -> Result<(), String> {
        self.rules.iter().try_for_each(|rule| rule.check(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

pub const CONTACT_FORM: FormSchema = FormSchema {
    name: "contact",
    fields: &[
        FieldSpec {
            name: "name",
            label: "Nombre",
            rules: &[FieldRule::Required],
        },
        FieldSpec {
            name: "email",
            label: "Email",
            rules: &[FieldRule::Required, FieldRule::Email],
        },
        FieldSpec {
            name: "message",
            label: "Mensaje",
            rules: &[FieldRule::Required, FieldRule::MinLength(10)],
        },
    ],
};

pub const APPLICATION_FORM: FormSchema = FormSchema {
    name: "application",
    fields: &[
        FieldSpec {
            name: "name",
            label: "Nombre completo",
            rules: &[FieldRule::Required],
        },
        FieldSpec {
            name: "email",
            label: "Email",
            rules: &[FieldRule::Required, FieldRule::Email],
        },
        FieldSpec {
            name: "phone",
            label: "Teléfono",
            rules: &[],
        },
        FieldSpec {
            name: "portfolio",
            label: "Portfolio o LinkedIn",
            rules: &[],
        },
        FieldSpec {
            name: "coverLetter",
            label: "Carta de presentación",
            rules: &[FieldRule::Required, FieldRule::MinLength(30)],
        },
    ],
};

pub const BOOKING_FORM: FormSchema = FormSchema {
    name: "booking",
    fields: &[
        FieldSpec {
            name: "name",
            label: "Nombre",
            rules: &[FieldRule::Required],
        },
        FieldSpec {
            name: "email",
            label: "Email",
            rules: &[FieldRule::Required, FieldRule::Email],
        },
        FieldSpec {
            name: "travellers",
            label: "Viajeros",
            rules: &[FieldRule::Required],
        },
        FieldSpec {
            name: "date",
            label: "Fecha de salida",
            rules: &[FieldRule::Required],
        },
        FieldSpec {
            name: "message",
            label: "Comentarios",
            rules: &[],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        let email = CONTACT_FORM.field("email").unwrap();
        assert!(email.validate("ana@example.com").is_ok());
        assert!(email.validate("  ana@sub.example.es ").is_ok());
        assert!(email.validate("ana@example").is_err());
        assert!(email.validate("ana.example.com").is_err());
        assert!(email.validate("ana @example.com").is_err());
        assert_eq!(email.validate("").unwrap_err(), "Este campo es obligatorio");
    }

    #[test]
    fn test_optional_field_accepts_empty() {
        let phone = APPLICATION_FORM.field("phone").unwrap();
        assert!(!phone.is_required());
        assert!(phone.validate("").is_ok());
    }

    #[test]
    fn test_min_length_counts_chars() {
        let message = CONTACT_FORM.field("message").unwrap();
        assert!(message.validate("corto").is_err());
        assert!(message.validate("ññññññññññ").is_ok());
    }
}
