//! Mailer trait and delivery result types.
//!
//! Uses `#[async_trait]` rather than native async traits because the pipeline
//! selects its transport at runtime via `Arc<dyn Mailer>`: real SMTP in
//! production, [`LocalMailer`](crate::LocalMailer) in tests. Email delivery is
//! I/O-bound, so the per-call boxing is noise next to network latency.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::email::Email;
use crate::error::MailError;

/// Result of a successful email delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryResult {
    /// Message ID assigned by the transport
    pub message_id: String,
}

impl DeliveryResult {
    /// Create a new delivery result.
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
        }
    }
}

/// Trait for email delivery transports.
///
/// # Example
///
/// ```ignore
/// use holler::{Email, Mailer, SmtpMailer};
///
/// let mailer = SmtpMailer::new("smtp.example.com", 587)
///     .credentials("user", "pass")
///     .build();
///
/// let email = Email::new()
///     .from("noreply@example.com")
///     .to("owner@example.com")
///     .subject("Hello")
///     .text_body("World");
///
/// let result = mailer.deliver(&email).await?;
/// ```
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a single email.
    ///
    /// Returns the message ID on success.
    async fn deliver(&self, email: &Email) -> Result<DeliveryResult, MailError>;

    /// Get the transport name (for logging/debugging).
    fn provider_name(&self) -> &'static str {
        "unknown"
    }
}
