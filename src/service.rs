//! The contact submission pipeline.
//!
//! One stateless handler per request: validate the payload, check the
//! delivery configuration, then send the owner notification followed by the
//! visitor confirmation. The stages are strictly sequential and fail closed -
//! nothing is sent until both validations pass, and the confirmation does not
//! start until the owner mail has been accepted.
//!
//! The two sends are deliberately not transactional. Email is not revocable,
//! so if the owner mail succeeds and the confirmation fails, the caller still
//! sees a delivery failure even though one message went out.

use std::sync::Arc;

use crate::config::DeliveryConfig;
use crate::contact::ContactSubmission;
use crate::error::ContactError;
use crate::mailer::Mailer;
use crate::messages;

/// How the pipeline reaches its transport.
enum Transport {
    /// Build an SMTP mailer from checked settings, one per accepted request.
    #[cfg(feature = "smtp")]
    Smtp,
    /// Use an injected mailer (tests, alternative transports).
    Custom(Arc<dyn Mailer>),
}

/// Stateless delivery handler for contact submissions.
///
/// Holds the delivery configuration (read-only after construction) and the
/// transport choice; everything else lives for one `handle` call. Concurrent
/// requests share nothing mutable and need no coordination.
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use holler::{ContactService, DeliveryConfig};
///
/// let service = Arc::new(ContactService::new(DeliveryConfig::from_env()));
/// let app = holler::contact_router(service);
/// ```
pub struct ContactService {
    config: DeliveryConfig,
    transport: Transport,
}

impl ContactService {
    /// Create a service that delivers over SMTP.
    ///
    /// The config may be incomplete; every request re-checks it and is
    /// rejected with a misconfiguration error until it is complete.
    #[cfg(feature = "smtp")]
    pub fn new(config: DeliveryConfig) -> Self {
        Self {
            config,
            transport: Transport::Smtp,
        }
    }

    /// Create a service that delivers through the given mailer.
    pub fn with_mailer(config: DeliveryConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            config,
            transport: Transport::Custom(mailer),
        }
    }

    /// Handle one submission: validate, check config, send both emails.
    ///
    /// On error the returned [`ContactError`]'s `Display` string is the only
    /// text safe to show the caller; the specific cause is logged here.
    pub async fn handle(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        submission.validate()?;

        let settings = match self.config.check() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(error = %e, "Contact delivery config incomplete");
                return Err(ContactError::ServerMisconfigured);
            }
        };

        let span = tracing::info_span!(
            "contact.deliver",
            from = %submission.email,
            subject = %submission.subject,
        );
        let _guard = span.enter();

        let mailer: Arc<dyn Mailer> = match &self.transport {
            #[cfg(feature = "smtp")]
            Transport::Smtp => Arc::new(crate::smtp::SmtpMailer::from_settings(&settings)),
            Transport::Custom(mailer) => Arc::clone(mailer),
        };

        let owner = messages::owner_email(&settings, submission);
        let result = mailer.deliver(&owner).await.map_err(|e| {
            tracing::error!(error = %e, provider = mailer.provider_name(), "Owner notification failed");
            ContactError::DeliveryFailed
        })?;
        tracing::debug!(message_id = %result.message_id, "Owner notification sent");

        let confirmation = messages::confirmation_email(&settings, submission);
        let result = mailer.deliver(&confirmation).await.map_err(|e| {
            tracing::error!(error = %e, provider = mailer.provider_name(), "Visitor confirmation failed");
            ContactError::DeliveryFailed
        })?;
        tracing::debug!(message_id = %result.message_id, "Visitor confirmation sent");

        tracing::info!("Contact submission delivered");
        Ok(())
    }
}
