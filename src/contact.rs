//! Contact submission payload and wire response.

use serde::{Deserialize, Serialize};

use crate::error::ContactError;

/// One visitor submission from the contact form.
///
/// All four fields are required. Absent JSON fields deserialize to empty
/// strings via `#[serde(default)]`, so "missing" and "empty" are rejected the
/// same way. Presence is the only check - no email-shape validation beyond
/// what the transport enforces at send time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// The visitor's name.
    #[serde(default)]
    pub name: String,
    /// The visitor's email address (confirmation recipient, owner reply-to).
    #[serde(default)]
    pub email: String,
    /// Subject line as typed.
    #[serde(default)]
    pub subject: String,
    /// Message body as typed.
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from the four form fields.
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

    /// Reject the submission if any field is empty.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.subject.is_empty()
            || self.message.is_empty()
        {
            return Err(ContactError::MissingFields);
        }
        Ok(())
    }
}

/// JSON body returned by the contact endpoint.
///
/// `{ "ok": true }` on success, `{ "ok": false, "error": "..." }` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Whether both sends completed.
    pub ok: bool,
    /// Generic, client-safe error text when `ok` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    /// Successful submission.
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    /// Failed submission with the given client-facing message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}

impl From<ContactError> for SubmitResponse {
    fn from(err: ContactError) -> Self {
        Self::failure(err.to_string())
    }
}
