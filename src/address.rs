//! Email address type with optional display name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An email address with an optional display name.
///
/// # Examples
///
/// ```
/// use holler::Address;
///
/// let addr: Address = "visitor@example.com".into();
/// assert_eq!(addr.email, "visitor@example.com");
/// assert_eq!(addr.name, None);
///
/// let addr: Address = ("Jane", "jane@example.com").into();
/// assert_eq!(addr.name, Some("Jane".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Optional display name (e.g., "Jane Doe")
    pub name: Option<String>,
    /// Email address (e.g., "jane@example.com")
    pub email: String,
}

impl Address {
    /// Create a new address with just an email.
    ///
    /// Performs a basic sanity check (non-empty, contains @) and logs a
    /// warning if the email looks invalid. Submitted addresses are accepted
    /// as-is; the transport is the final arbiter of validity.
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();

        if !Self::basic_sanity_check(&email) {
            tracing::warn!(email = %email, "Creating address with potentially invalid email");
        }

        Self { name: None, email }
    }

    /// Create a new address with a name and email.
    pub fn with_name(name: impl Into<String>, email: impl Into<String>) -> Self {
        let email = email.into();

        if !Self::basic_sanity_check(&email) {
            tracing::warn!(email = %email, "Creating address with potentially invalid email");
        }

        Self {
            name: Some(name.into()),
            email,
        }
    }

    /// Basic sanity check: non-empty and contains @. Not a full validation.
    fn basic_sanity_check(email: &str) -> bool {
        !email.is_empty() && email.contains('@')
    }

    /// Format for an email header: `"Name" <email>` or bare `email`.
    ///
    /// Display names are quoted with backslash-escaping of `"` and `\`.
    pub fn formatted(&self) -> String {
        match &self.name {
            Some(name) => {
                let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
                format!("\"{}\" <{}>", escaped, self.email)
            }
            None => self.email.clone(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl From<&str> for Address {
    fn from(email: &str) -> Self {
        Self::new(email)
    }
}

impl From<String> for Address {
    fn from(email: String) -> Self {
        Self::new(email)
    }
}

impl From<(&str, &str)> for Address {
    fn from((name, email): (&str, &str)) -> Self {
        Self::with_name(name, email)
    }
}

impl From<(String, String)> for Address {
    fn from((name, email): (String, String)) -> Self {
        Self::with_name(name, email)
    }
}

/// Conversion trait used by the [`Email`](crate::Email) builder.
///
/// Implemented for strings, `(name, email)` tuples, and [`Address`] itself,
/// so builder methods accept any of them.
pub trait ToAddress {
    /// Convert to an [`Address`].
    fn to_address(&self) -> Address;
}

impl ToAddress for Address {
    fn to_address(&self) -> Address {
        self.clone()
    }
}

impl ToAddress for &Address {
    fn to_address(&self) -> Address {
        (*self).clone()
    }
}

impl ToAddress for &str {
    fn to_address(&self) -> Address {
        Address::new(*self)
    }
}

impl ToAddress for String {
    fn to_address(&self) -> Address {
        Address::new(self.clone())
    }
}

impl ToAddress for (&str, &str) {
    fn to_address(&self) -> Address {
        Address::with_name(self.0, self.1)
    }
}

impl ToAddress for (String, String) {
    fn to_address(&self) -> Address {
        Address::with_name(self.0.clone(), self.1.clone())
    }
}
