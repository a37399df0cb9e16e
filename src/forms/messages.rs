//! Request and response types exchanged with the forms backend.
//!
//! Both types serialize to JSON so a real backend can receive them over the
//! wire unchanged.

use crate::domain::ContactForm;
use serde::{Deserialize, Serialize};

/// A validated contact form ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Unix timestamp (seconds) at which the user pressed submit.
    pub submitted_at: i64,
}

impl SubmissionRequest {
    /// Builds a request from the form, trimming surrounding whitespace and
    /// stamping it with the current time.
    ///
    /// The caller is expected to have run [`ContactForm::validate`] first.
    ///
    /// # Examples
    ///
    /// ```
    /// use jobboard_landing::domain::{ContactField, ContactForm};
    /// use jobboard_landing::forms::SubmissionRequest;
    ///
    /// let mut form = ContactForm::default();
    /// form.set(ContactField::Email, "  ada@example.com ");
    ///
    /// let request = SubmissionRequest::from_form(&form);
    /// assert_eq!(request.email, "ada@example.com");
    /// ```
    #[must_use]
    pub fn from_form(form: &ContactForm) -> Self {
        Self::from_form_at(form, chrono::Utc::now().timestamp())
    }

    /// Same as [`from_form`](Self::from_form) with an explicit timestamp.
    #[must_use]
    pub fn from_form_at(form: &ContactForm, submitted_at: i64) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            subject: form.subject.trim().to_string(),
            message: form.message.trim().to_string(),
            submitted_at,
        }
    }
}

/// Outcome reported by the forms backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionResponse {
    /// The message was accepted for delivery.
    Accepted {
        /// Reference code shown to the user, e.g. `"MSG-0001"`.
        reference: String,
    },
    /// The backend refused the message.
    Rejected {
        /// Reason shown to the user.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_wire_format_is_tagged() {
        let accepted = SubmissionResponse::Accepted {
            reference: "MSG-0001".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&accepted).unwrap(),
            r#"{"status":"accepted","reference":"MSG-0001"}"#
        );

        let rejected: SubmissionResponse =
            serde_json::from_str(r#"{"status":"rejected","reason":"spam"}"#).unwrap();
        assert_eq!(
            rejected,
            SubmissionResponse::Rejected {
                reason: "spam".to_string()
            }
        );
    }

    #[test]
    fn request_keeps_explicit_timestamp() {
        let form = ContactForm {
            name: " Lin ".to_string(),
            email: "lin@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there\n".to_string(),
        };
        let request = SubmissionRequest::from_form_at(&form, 1_700_000_000);
        assert_eq!(request.name, "Lin");
        assert_eq!(request.message, "Hello there");
        assert_eq!(request.submitted_at, 1_700_000_000);
    }
}
