//! Delivery configuration.
//!
//! Configuration is an explicit value, not ambient process state: read it
//! once (usually with [`DeliveryConfig::from_env`]) and hand it to the
//! [`ContactService`](crate::ContactService). The pipeline calls
//! [`DeliveryConfig::check`] per request and fails closed - no email leaves
//! the process while a required value is missing. Tests construct deliberately
//! incomplete configs with the builder setters.
//!
//! ## Environment Variables
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `SMTP_HOST` | yes | none |
//! | `SMTP_PORT` | no | 587 |
//! | `SMTP_USER` | yes | none |
//! | `SMTP_PASS` | yes | none |
//! | `CONTACT_FROM` | yes | none |
//! | `CONTACT_TO` | yes | none |
//! | `CONTACT_OWNER_NAME` | no | none |

use std::env;

use crate::error::ConfigError;

/// Default SMTP submission port, also used when `SMTP_PORT` fails to parse.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Delivery settings, possibly incomplete.
///
/// Every required value is an `Option` so that a partially configured process
/// can still boot and answer requests; [`check`](Self::check) turns this into
/// [`SmtpSettings`] or names the first missing variable.
#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    /// SMTP server host.
    pub smtp_host: Option<String>,
    /// SMTP server port.
    pub smtp_port: u16,
    /// SMTP username.
    pub smtp_user: Option<String>,
    /// SMTP password.
    pub smtp_pass: Option<String>,
    /// Sender address for both outgoing emails.
    pub from_address: Option<String>,
    /// The site owner's inbox, where notifications land.
    pub to_address: Option<String>,
    /// Display name for the sender and the confirmation signature.
    pub owner_name: Option<String>,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            smtp_host: None,
            smtp_port: DEFAULT_SMTP_PORT,
            smtp_user: None,
            smtp_pass: None,
            from_address: None,
            to_address: None,
            owner_name: None,
        }
    }
}

impl DeliveryConfig {
    /// Create an empty config (port defaulted, everything else unset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the config from environment variables.
    ///
    /// Missing variables stay `None`; a non-numeric `SMTP_PORT` falls back to
    /// 587 rather than failing.
    pub fn from_env() -> Self {
        Self {
            smtp_host: env::var("SMTP_HOST").ok(),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            smtp_user: env::var("SMTP_USER").ok(),
            smtp_pass: env::var("SMTP_PASS").ok(),
            from_address: env::var("CONTACT_FROM").ok(),
            to_address: env::var("CONTACT_TO").ok(),
            owner_name: env::var("CONTACT_OWNER_NAME").ok(),
        }
    }

    /// Set the SMTP host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.smtp_host = Some(host.into());
        self
    }

    /// Set the SMTP port.
    pub fn port(mut self, port: u16) -> Self {
        self.smtp_port = port;
        self
    }

    /// Set the SMTP credentials.
    pub fn credentials(mut self, user: impl Into<String>, pass: impl Into<String>) -> Self {
        self.smtp_user = Some(user.into());
        self.smtp_pass = Some(pass.into());
        self
    }

    /// Set the sender address.
    pub fn from_address(mut self, addr: impl Into<String>) -> Self {
        self.from_address = Some(addr.into());
        self
    }

    /// Set the owner inbox address.
    pub fn to_address(mut self, addr: impl Into<String>) -> Self {
        self.to_address = Some(addr.into());
        self
    }

    /// Set the owner display name.
    pub fn owner_name(mut self, name: impl Into<String>) -> Self {
        self.owner_name = Some(name.into());
        self
    }

    /// Validate that every required value is present.
    ///
    /// Returns the first missing variable by name; callers log it server-side
    /// and surface only the generic misconfiguration error.
    pub fn check(&self) -> Result<SmtpSettings, ConfigError> {
        let host = self
            .smtp_host
            .clone()
            .ok_or(ConfigError::Missing("SMTP_HOST"))?;
        let user = self
            .smtp_user
            .clone()
            .ok_or(ConfigError::Missing("SMTP_USER"))?;
        let pass = self
            .smtp_pass
            .clone()
            .ok_or(ConfigError::Missing("SMTP_PASS"))?;
        let from = self
            .from_address
            .clone()
            .ok_or(ConfigError::Missing("CONTACT_FROM"))?;
        let to = self
            .to_address
            .clone()
            .ok_or(ConfigError::Missing("CONTACT_TO"))?;

        Ok(SmtpSettings {
            host,
            port: self.smtp_port,
            user,
            pass,
            from,
            to,
            owner_name: self.owner_name.clone(),
        })
    }
}

/// Checked delivery settings - every required value present.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    /// SMTP server host.
    pub host: String,
    /// SMTP server port.
    pub port: u16,
    /// SMTP username.
    pub user: String,
    /// SMTP password.
    pub pass: String,
    /// Sender address for both outgoing emails.
    pub from: String,
    /// The site owner's inbox.
    pub to: String,
    /// Optional owner display name.
    pub owner_name: Option<String>,
}
