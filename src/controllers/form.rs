//! Contact form validation.
//!
//! Each submit clears previous annotations, checks name, email and message
//! in that order, and renders one inline error per failing field. Any
//! failure blocks submission. Server-side validation still applies; this is
//! a client-side gate only.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::UiConfig;
use crate::dom::{Dom, NodeId};
use crate::error::DomError;
use crate::event::Action;

/// Quoted or dot-separated local part; bracketed IPv4 literal or dotted
/// hostname ending in an alphabetic label of two or more letters.
const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Whether `email` looks like a deliverable address. Case-insensitive.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(&email.to_lowercase())
}

/// Which contact field an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Validation failure with its user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter your name")]
    NameMissing,
    #[error("Please enter your email")]
    EmailMissing,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Please enter your message")]
    MessageMissing,
    #[error("Message must be at least {min} characters long")]
    MessageTooShort { min: usize },
}

impl FieldError {
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Self::NameMissing => Field::Name,
            Self::EmailMissing | Self::EmailInvalid => Field::Email,
            Self::MessageMissing | Self::MessageTooShort { .. } => Field::Message,
        }
    }
}

/// Raw field values as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Check `fields` in order name, email, message. At most one error per field.
#[must_use]
pub fn validate(fields: &ContactFields, min_message_chars: usize) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if fields.name.trim().is_empty() {
        errors.push(FieldError::NameMissing);
    }

    if fields.email.trim().is_empty() {
        errors.push(FieldError::EmailMissing);
    } else if !is_valid_email(&fields.email) {
        errors.push(FieldError::EmailInvalid);
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.push(FieldError::MessageMissing);
    } else if message.chars().count() < min_message_chars {
        errors.push(FieldError::MessageTooShort { min: min_message_chars });
    }

    errors
}

#[derive(Debug, Clone)]
pub struct FormValidator {
    form: NodeId,
    name: NodeId,
    email: NodeId,
    message: NodeId,
    error_class: String,
    invalid_class: String,
    min_message_chars: usize,
}

impl FormValidator {
    /// Bind to the contact form and its three fields.
    ///
    /// A page without the form, or a form missing any field, has no validator.
    pub fn discover<D: Dom + ?Sized>(dom: &D, config: &UiConfig) -> Result<Option<Self>, DomError> {
        let selectors = &config.selectors;
        let Some(form) = dom.query(&selectors.contact_form)? else {
            return Ok(None);
        };
        let (Some(name), Some(email), Some(message)) = (
            dom.query_within(form, &selectors.name_field)?,
            dom.query_within(form, &selectors.email_field)?,
            dom.query_within(form, &selectors.message_field)?,
        ) else {
            log::debug!("contact form is missing a required field; validation disabled");
            return Ok(None);
        };

        Ok(Some(Self {
            form,
            name,
            email,
            message,
            error_class: config.classes.field_error.clone(),
            invalid_class: config.classes.field_invalid.clone(),
            min_message_chars: config.min_message_chars,
        }))
    }

    #[must_use]
    pub fn form(&self) -> NodeId {
        self.form
    }

    /// Current values of the three fields.
    #[must_use]
    pub fn read<D: Dom + ?Sized>(&self, dom: &D) -> ContactFields {
        ContactFields {
            name: dom.value(self.name).unwrap_or_default(),
            email: dom.value(self.email).unwrap_or_default(),
            message: dom.value(self.message).unwrap_or_default(),
        }
    }

    /// Validate on submit and render inline errors.
    ///
    /// Returns `[PreventDefault]` when any field failed, otherwise nothing.
    pub fn on_submit<D: Dom + ?Sized>(&self, dom: &mut D) -> Result<Vec<Action>, DomError> {
        self.clear(dom)?;

        let errors = validate(&self.read(dom), self.min_message_chars);
        for error in &errors {
            let input = self.input(error.field());
            let group = dom.parent(input).unwrap_or(self.form);
            dom.append_element(group, "div", &self.error_class, &error.to_string())?;
            dom.set_class(input, &self.invalid_class, true)?;
        }

        if errors.is_empty() { Ok(Vec::new()) } else { Ok(vec![Action::PreventDefault]) }
    }

    /// Remove every inline error inside the form and reset the invalid markers.
    pub fn clear<D: Dom + ?Sized>(&self, dom: &mut D) -> Result<(), DomError> {
        let selector = format!(".{}", self.error_class);
        for node in dom.query_all_within(self.form, &selector)? {
            dom.remove(node)?;
        }
        for input in [self.name, self.email, self.message] {
            dom.set_class(input, &self.invalid_class, false)?;
        }
        Ok(())
    }

    fn input(&self, field: Field) -> NodeId {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }
}
