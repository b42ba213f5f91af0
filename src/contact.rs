//! Contact form validation and simulated submission.
//!
//! The form collects `{name, email, phone?, company?, message}`. Validation
//! is synchronous and reports every failing field at once, with messages in
//! the visitor's language. A valid submission is acknowledged after a
//! configured artificial delay; it is never sent anywhere or stored.
//!
//! | Field | Rule |
//! |-------|------|
//! | name | required, 2–100 characters |
//! | email | required, `local@domain.tld` |
//! | phone | optional, digits/spaces/`()-`, optional leading `+`, 7–20 chars |
//! | company | optional, at most 100 characters |
//! | message | required, 10–2000 characters |

use crate::config::ContactConfig;
use crate::i18n::Language;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("email pattern must compile")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ()-]{7,20}$").expect("phone pattern must compile"));

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const COMPANY_MAX: usize = 100;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 2000;

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Message => "message",
        }
    }
}

/// A single failed rule with its localized message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Every failed rule, in field order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field.as_str(), e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Localized validation and acknowledgement strings.
#[derive(Debug, Clone)]
pub struct FormStrings {
    pub name_required: &'static str,
    pub name_length: &'static str,
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub phone_invalid: &'static str,
    pub company_length: &'static str,
    pub message_required: &'static str,
    pub message_length: &'static str,
    pub submitted: &'static str,
}

pub const ENGLISH_FORM_STRINGS: FormStrings = FormStrings {
    name_required: "Please enter your name.",
    name_length: "Name must be between 2 and 100 characters.",
    email_required: "Please enter your email address.",
    email_invalid: "Please enter a valid email address.",
    phone_invalid: "Please enter a valid phone number.",
    company_length: "Company name must be at most 100 characters.",
    message_required: "Please enter a message.",
    message_length: "Message must be between 10 and 2000 characters.",
    submitted: "Thank you for contacting us. Our team will get back to you shortly.",
};

pub const ARABIC_FORM_STRINGS: FormStrings = FormStrings {
    name_required: "يرجى إدخال اسمك.",
    name_length: "يجب أن يتراوح الاسم بين 2 و100 حرف.",
    email_required: "يرجى إدخال بريدك الإلكتروني.",
    email_invalid: "يرجى إدخال بريد إلكتروني صحيح.",
    phone_invalid: "يرجى إدخال رقم هاتف صحيح.",
    company_length: "يجب ألا يتجاوز اسم الشركة 100 حرف.",
    message_required: "يرجى إدخال رسالتك.",
    message_length: "يجب أن تتراوح الرسالة بين 10 و2000 حرف.",
    submitted: "شكراً لتواصلك معنا. سيتواصل معك فريقنا قريباً.",
};

impl FormStrings {
    pub fn for_language(language: Language) -> &'static FormStrings {
        match language {
            Language::En => &ENGLISH_FORM_STRINGS,
            Language::Ar => &ARABIC_FORM_STRINGS,
        }
    }
}

/// Result of a (simulated) successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub message: &'static str,
    /// How long a client should wait before showing `message`.
    pub simulated_delay: Duration,
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ContactForm {
    /// Check every rule. Input is trimmed before checking.
    pub fn validate(&self, language: Language) -> Result<(), ValidationErrors> {
        let strings = FormStrings::for_language(language);
        let mut errors = Vec::new();
        let mut fail = |field, message| errors.push(FieldError { field, message });

        let name = self.name.trim();
        if name.is_empty() {
            fail(Field::Name, strings.name_required);
        } else if !(NAME_MIN..=NAME_MAX).contains(&char_len(name)) {
            fail(Field::Name, strings.name_length);
        }

        let email = self.email.trim();
        if email.is_empty() {
            fail(Field::Email, strings.email_required);
        } else if !EMAIL_RE.is_match(email) {
            fail(Field::Email, strings.email_invalid);
        }

        if let Some(phone) = optional(&self.phone) {
            if !PHONE_RE.is_match(phone) {
                fail(Field::Phone, strings.phone_invalid);
            }
        }

        if let Some(company) = optional(&self.company) {
            if char_len(company) > COMPANY_MAX {
                fail(Field::Company, strings.company_length);
            }
        }

        let message = self.message.trim();
        if message.is_empty() {
            fail(Field::Message, strings.message_required);
        } else if !(MESSAGE_MIN..=MESSAGE_MAX).contains(&char_len(message)) {
            fail(Field::Message, strings.message_length);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Validate, then acknowledge. Nothing leaves the process.
    pub fn submit(
        &self,
        language: Language,
        config: &ContactConfig,
    ) -> Result<Acknowledgement, ValidationErrors> {
        self.validate(language)?;
        tracing::info!(language = %language, "contact form accepted (simulated)");
        Ok(Acknowledgement {
            message: FormStrings::for_language(language).submitted,
            simulated_delay: Duration::from_millis(config.simulated_delay_ms),
        })
    }
}
