//! # Holler
//!
//! A contact-form submission pipeline: validate the payload, email the site
//! owner a notification, email the visitor a confirmation receipt. One POST
//! endpoint on the server side, one small state machine on the client side.
//!
//! ## Quick Start
//!
//! Set environment variables:
//! ```bash
//! SMTP_HOST=smtp.example.com
//! SMTP_USER=mailer
//! SMTP_PASS=secret
//! CONTACT_FROM=noreply@example.com
//! CONTACT_TO=owner@example.com
//! ```
//!
//! Serve the endpoint:
//! ```rust,ignore
//! use std::sync::Arc;
//! use holler::{contact_router, ContactService, DeliveryConfig};
//!
//! let service = Arc::new(ContactService::new(DeliveryConfig::from_env()));
//! let app = contact_router(service);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! Each accepted request sends two emails in a fixed order: the owner
//! notification first, then the visitor confirmation. Validation failures and
//! misconfiguration are rejected before anything is sent; transport failures
//! abort the sequence. The caller only ever sees `{ ok: true }` or a generic
//! error string - details stay in the server logs.
//!
//! ## Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SMTP_HOST` | SMTP server host (required) |
//! | `SMTP_PORT` | SMTP server port (default: 587) |
//! | `SMTP_USER` | SMTP username (required) |
//! | `SMTP_PASS` | SMTP password (required) |
//! | `CONTACT_FROM` | Sender address for both emails (required) |
//! | `CONTACT_TO` | The owner inbox notifications land in (required) |
//! | `CONTACT_OWNER_NAME` | Display name and signature (optional) |
//!
//! ## Feature Flags
//!
//! - `smtp` - SMTP transport via lettre (default)
//! - `router` - Axum router for `POST /api/contact` (default)
//! - `client` - reqwest-backed submission client (default)
//!
//! ## Testing
//!
//! [`LocalMailer`] captures emails in memory instead of sending them, and the
//! [`testing`] module provides assertions over the capture. Inject it with
//! [`ContactService::with_mailer`] to exercise any pipeline path, including
//! partial transport failure via [`LocalMailer::fail_after`].

/// The version of the holler crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod address;
mod client;
mod config;
mod contact;
mod email;
mod error;
mod local;
mod mailer;
mod messages;
mod service;
mod ui;

#[cfg(feature = "smtp")]
mod smtp;

#[cfg(feature = "router")]
mod router;

pub mod testing;

// Re-exports
pub use address::{Address, ToAddress};
pub use client::{ClientError, ContactApi};
pub use config::{DeliveryConfig, SmtpSettings, DEFAULT_SMTP_PORT};
pub use contact::{ContactSubmission, SubmitResponse};
pub use email::Email;
pub use error::{ConfigError, ContactError, MailError};
pub use local::{LocalMailer, SentEmail};
pub use mailer::{DeliveryResult, Mailer};
pub use messages::{confirmation_email, owner_email};
pub use service::ContactService;
pub use ui::{
    Feedback, FeedbackKind, Outcome, Phase, SubmissionController, FEEDBACK_TTL,
    NETWORK_FAILED_TEXT, SEND_FAILED_TEXT, SUCCESS_TEXT,
};

#[cfg(feature = "client")]
pub use client::HttpContactApi;

#[cfg(feature = "smtp")]
pub use smtp::{SmtpBuilder, SmtpMailer, TlsMode};

#[cfg(feature = "router")]
pub use router::contact_router;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Address;
    pub use crate::ContactError;
    pub use crate::ContactService;
    pub use crate::ContactSubmission;
    pub use crate::DeliveryConfig;
    pub use crate::Email;
    pub use crate::Mailer;
    pub use crate::SubmissionController;
    pub use crate::SubmitResponse;
    pub use crate::ToAddress;
}
