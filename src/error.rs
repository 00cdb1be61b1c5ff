//! Error types for holler.

use thiserror::Error;

/// Errors that can occur when sending emails through a transport.
#[derive(Debug, Clone, Error)]
pub enum MailError {
    /// Invalid email address format.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Error building the email message.
    #[error("Build error: {0}")]
    BuildError(String),

    /// Error sending the email.
    #[error("Send error: {0}")]
    SendError(String),
}

#[cfg(feature = "smtp")]
impl From<lettre::error::Error> for MailError {
    fn from(err: lettre::error::Error) -> Self {
        Self::BuildError(err.to_string())
    }
}

#[cfg(feature = "smtp")]
impl From<lettre::transport::smtp::Error> for MailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Self::SendError(err.to_string())
    }
}

#[cfg(feature = "smtp")]
impl From<lettre::address::AddressError> for MailError {
    fn from(err: lettre::address::AddressError) -> Self {
        Self::InvalidAddress(err.to_string())
    }
}

/// Outcome of a rejected contact submission.
///
/// The `Display` string of each variant is exactly what the caller is allowed
/// to see. Anything more specific (which config value is missing, what the
/// transport said) is logged server-side and never carried in the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    /// One or more of the four submission fields is empty or absent.
    #[error("Missing required fields.")]
    MissingFields,

    /// A required delivery setting is missing from the configuration.
    #[error("Server email configuration is incomplete.")]
    ServerMisconfigured,

    /// The transport rejected one of the two sends.
    #[error("Failed to send message.")]
    DeliveryFailed,
}

impl ContactError {
    /// HTTP-equivalent status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingFields => 400,
            Self::ServerMisconfigured | Self::DeliveryFailed => 500,
        }
    }
}

/// Configuration errors, naming the missing environment variable.
///
/// Logged server-side only; the caller sees [`ContactError::ServerMisconfigured`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required setting has no value.
    #[error("missing required setting: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_error_messages_are_the_client_facing_strings() {
        assert_eq!(ContactError::MissingFields.to_string(), "Missing required fields.");
        assert_eq!(
            ContactError::ServerMisconfigured.to_string(),
            "Server email configuration is incomplete."
        );
        assert_eq!(ContactError::DeliveryFailed.to_string(), "Failed to send message.");
    }

    #[test]
    fn status_codes() {
        assert_eq!(ContactError::MissingFields.status(), 400);
        assert_eq!(ContactError::ServerMisconfigured.status(), 500);
        assert_eq!(ContactError::DeliveryFailed.status(), 500);
    }
}
