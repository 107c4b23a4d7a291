//! Contact form messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactError {
    #[error("{0}")]
    Invalid(String),
}

/// Contact form fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "Name is too long"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        email(message = "Invalid email format"),
        length(max = 254, message = "Email is too long")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Subject is too long"))]
    pub subject: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "Message is too long"))]
    pub message: String,
}

impl ContactRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Trim and validate the fields, producing a message ready to store.
    pub fn validated(&self) -> Result<ContactMessage, ContactError> {
        let trimmed = ContactRequest::new(
            self.name.trim(),
            self.email.trim(),
            self.subject.trim(),
            self.message.trim(),
        );

        if [&trimmed.name, &trimmed.email, &trimmed.subject, &trimmed.message]
            .iter()
            .any(|f| f.is_empty())
        {
            return Err(ContactError::Invalid(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        trimmed
            .validate()
            .map_err(|e| ContactError::Invalid(first_message(&e)))?;

        // The validator accepts dotless domains; the form does not.
        if !has_dotted_domain(&trimmed.email) {
            return Err(ContactError::Invalid(INVALID_EMAIL_MESSAGE.to_string()));
        }

        Ok(ContactMessage {
            name: trimmed.name,
            email: trimmed.email,
            subject: trimmed.subject,
            message: trimmed.message,
            submitted_at: Utc::now(),
        })
    }
}

/// A validated contact message. Append-only once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

fn has_dotted_domain(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !email.chars().any(char::is_whitespace)
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    ["name", "email", "subject", "message"]
        .iter()
        .filter_map(|field| fields.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid contact form".to_string())
}
