//! Contact form fields, validation, and submission status.
//!
//! The form is plain data edited one keystroke at a time by the app layer.
//! Submission progress is tracked with [`SubmissionStatus`] so the renderer
//! never depends on how (or how long) the forms backend takes to answer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Fields in tab order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

/// A validation failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

/// Values currently typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: ContactField, c: char) {
        self.get_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: ContactField) {
        self.get_mut(field).pop();
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks that every field is filled in and the email looks deliverable.
    ///
    /// All failures are reported at once, in field order.
    ///
    /// # Errors
    ///
    /// Returns the list of [`FieldError`]s when any field is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use jobboard_landing::domain::{ContactField, ContactForm};
    ///
    /// let mut form = ContactForm::default();
    /// form.set(ContactField::Name, "Ada");
    /// form.set(ContactField::Email, "ada@example");
    ///
    /// let errors = form.validate().unwrap_err();
    /// let fields: Vec<ContactField> = errors.iter().map(|e| e.field).collect();
    /// assert_eq!(fields, vec![ContactField::Email, ContactField::Subject, ContactField::Message]);
    /// ```
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for field in ContactField::ALL {
            let value = self.get(field).trim();
            if value.is_empty() {
                errors.push(FieldError {
                    field,
                    message: "is required",
                });
            } else if field == ContactField::Email && !is_plausible_email(value) {
                errors.push(FieldError {
                    field,
                    message: "must be a valid email address",
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// `local@domain.tld` with no whitespace and a non-empty label on each side of
/// the last dot in the domain.
fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Progress of a contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing submitted yet, or the last result was dismissed.
    #[default]
    Idle,
    /// Handed to the forms backend; waiting for a response.
    Pending,
    /// Accepted by the backend, carrying its reference code.
    Success(String),
    /// Rejected by validation or by the backend.
    Failure(String),
}

impl SubmissionStatus {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}
