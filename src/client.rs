//! Client-side edge of the pipeline: how the form controller reaches the
//! contact endpoint.
//!
//! The [`ContactApi`] trait keeps the controller testable with a fake; the
//! reqwest-backed [`HttpContactApi`] is the production implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::contact::{ContactSubmission, SubmitResponse};

/// Errors from the submission request itself (not from the server's verdict).
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The request never completed (DNS, connection, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with something that is not a `SubmitResponse`.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Abstraction over the POST to the contact endpoint.
#[async_trait]
pub trait ContactApi: Send + Sync {
    /// Submit the form. A served error response (400/500) still resolves to
    /// `Ok` with `ok: false`; only request-level failures are `Err`.
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmitResponse, ClientError>;
}

/// HTTP client posting submissions as JSON to `{base_url}/api/contact`.
#[cfg(feature = "client")]
pub struct HttpContactApi {
    base_url: String,
    client: reqwest::Client,
}

#[cfg(feature = "client")]
impl HttpContactApi {
    /// Create a client for the given base URL (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(feature = "client")]
#[async_trait]
impl ContactApi for HttpContactApi {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmitResponse, ClientError> {
        let url = format!("{}/api/contact", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(submission)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        // The endpoint returns a JSON body on every status code
        response
            .json::<SubmitResponse>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
