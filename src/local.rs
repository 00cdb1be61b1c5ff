//! Local mailer for development and testing.
//!
//! Captures emails in memory, in send order, instead of delivering them.
//! Tests use it to assert on what the pipeline dispatched and in what order,
//! and to simulate transport failures at a chosen point in the sequence.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use holler::{ContactService, DeliveryConfig, LocalMailer};
//!
//! let mailer = Arc::new(LocalMailer::new());
//! let service = ContactService::with_mailer(config, mailer.clone());
//!
//! service.handle(&submission).await?;
//!
//! assert_eq!(mailer.email_count(), 2);
//! assert!(mailer.sent_to("owner@example.com"));
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::email::Email;
use crate::error::MailError;
use crate::mailer::{DeliveryResult, Mailer};

/// A captured email with metadata.
#[derive(Debug, Clone)]
pub struct SentEmail {
    /// Unique identifier for this email.
    pub id: String,
    /// The email content.
    pub email: Email,
    /// When the email was "sent" (captured).
    pub sent_at: DateTime<Utc>,
}

/// How the mailer should (pretend to) fail.
#[derive(Debug, Clone)]
enum FailureMode {
    /// Deliver everything.
    Off,
    /// Reject every send with this message.
    Always(String),
    /// Accept `remaining` more sends, then reject with this message.
    After { remaining: usize, message: String },
}

/// Mailer that captures emails in memory rather than sending them.
pub struct LocalMailer {
    sent: RwLock<Vec<SentEmail>>,
    attempts: AtomicUsize,
    failure: RwLock<FailureMode>,
}

impl LocalMailer {
    /// Create a new local mailer with empty capture storage.
    pub fn new() -> Self {
        Self {
            sent: RwLock::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            failure: RwLock::new(FailureMode::Off),
        }
    }

    // =========================================================================
    // Failure Simulation
    // =========================================================================

    /// Reject every subsequent send with an error.
    ///
    /// ```rust,ignore
    /// let mailer = LocalMailer::new();
    /// mailer.set_failure("SMTP connection refused");
    /// assert!(mailer.deliver(&email).await.is_err());
    /// ```
    pub fn set_failure(&self, message: impl Into<String>) {
        *self.failure.write().unwrap() = FailureMode::Always(message.into());
    }

    /// Accept the next `count` sends, then reject every send after that.
    ///
    /// Lets tests exercise partial failure: the owner notification goes
    /// through, the confirmation does not.
    pub fn fail_after(&self, count: usize, message: impl Into<String>) {
        *self.failure.write().unwrap() = FailureMode::After {
            remaining: count,
            message: message.into(),
        };
    }

    /// Clear any configured failure.
    pub fn clear_failure(&self) {
        *self.failure.write().unwrap() = FailureMode::Off;
    }

    // =========================================================================
    // Capture Access
    // =========================================================================

    /// All captured emails, in send order (oldest first).
    pub fn emails(&self) -> Vec<SentEmail> {
        self.sent.read().unwrap().clone()
    }

    /// The most recently captured email.
    pub fn last_email(&self) -> Option<SentEmail> {
        self.sent.read().unwrap().last().cloned()
    }

    /// How many emails have been captured.
    pub fn email_count(&self) -> usize {
        self.sent.read().unwrap().len()
    }

    /// Whether any email was captured.
    pub fn has_emails(&self) -> bool {
        self.email_count() > 0
    }

    /// How many deliveries were attempted, counting rejected ones.
    ///
    /// `email_count` only sees what got through, so a failed first send
    /// and no send at all look the same there. This distinguishes them.
    pub fn delivery_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Drop all captured emails and reset the attempt counter.
    pub fn clear(&self) {
        self.sent.write().unwrap().clear();
        self.attempts.store(0, Ordering::SeqCst);
    }

    /// Whether an email was sent to the given address (case-insensitive).
    pub fn sent_to(&self, email: &str) -> bool {
        self.sent.read().unwrap().iter().any(|sent| {
            sent.email
                .to
                .iter()
                .any(|addr| addr.email.eq_ignore_ascii_case(email))
        })
    }

    /// Whether an email with a subject containing `text` was sent.
    pub fn sent_with_subject_containing(&self, text: &str) -> bool {
        self.sent
            .read()
            .unwrap()
            .iter()
            .any(|sent| sent.email.subject.contains(text))
    }
}

impl Default for LocalMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for LocalMailer {
    async fn deliver(&self, email: &Email) -> Result<DeliveryResult, MailError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        {
            let mut failure = self.failure.write().unwrap();
            match &mut *failure {
                FailureMode::Off => {}
                FailureMode::Always(message) => {
                    return Err(MailError::SendError(message.clone()));
                }
                FailureMode::After { remaining, message } => {
                    if *remaining == 0 {
                        return Err(MailError::SendError(message.clone()));
                    }
                    *remaining -= 1;
                }
            }
        }

        let id = uuid::Uuid::new_v4().to_string();
        let sent = SentEmail {
            id: id.clone(),
            email: email.clone(),
            sent_at: Utc::now(),
        };
        self.sent.write().unwrap().push(sent);

        Ok(DeliveryResult::new(id))
    }

    fn provider_name(&self) -> &'static str {
        "local"
    }
}
