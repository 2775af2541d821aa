//! Resend HTTP client
//!
//! Sends one message per call to `POST {base_url}/emails`.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::models::{SendEmailRequest, SendOutcome, decode_send_response};

/// Resend client errors
///
/// Provider rejections are not errors; they are [`SendOutcome::Rejected`].
#[derive(Debug, Error)]
pub enum ResendError {
    /// Connection to the Resend API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the Resend API failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// No answer within the configured timeout
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// The response could not be decoded
    #[error("Unexpected response (status {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },
}

impl ResendError {
    fn from_transport(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

/// Resend service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendConfig {
    /// Resend API base URL (default: <https://api.resend.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds (default: 30000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://api.resend.com".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Resend client trait for sending email
#[async_trait]
pub trait ResendClient: Send + Sync {
    /// Send one message to all of its recipients
    async fn send_email(&self, request: &SendEmailRequest) -> Result<SendOutcome, ResendError>;
}

/// Resend HTTP client implementation
pub struct ResendHttpClient {
    client: Client,
    config: ResendConfig,
    api_key: SecretString,
}

impl fmt::Debug for ResendHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResendHttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ResendHttpClient {
    /// Create a new Resend client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ResendConfig, api_key: SecretString) -> Result<Self, ResendError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ResendError::ConnectionFailed(e.to_string()))?;

        info!(base_url = %config.base_url, "Initialized Resend client");

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ResendClient for ResendHttpClient {
    #[instrument(skip(self, request), fields(recipients = request.to.len()))]
    async fn send_email(&self, request: &SendEmailRequest) -> Result<SendOutcome, ResendError> {
        debug!("Sending email via Resend");

        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| ResendError::from_transport(&e, self.config.timeout_ms))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ResendError::from_transport(&e, self.config.timeout_ms))?;

        let outcome = decode_send_response(status, &body)?;
        match &outcome {
            SendOutcome::Accepted { id } => debug!(status, id = ?id, "Resend accepted email"),
            SendOutcome::Rejected { error } => {
                warn!(status, error = %error, "Resend rejected email");
            },
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ResendConfig::default();
        assert_eq!(config.base_url, "https://api.resend.com");
        assert_eq!(config.timeout_ms, 30000);
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let config: ResendConfig = serde_json::from_str(r#"{"timeout_ms": 1000}"#).unwrap();
        assert_eq!(config.base_url, "https://api.resend.com");
        assert_eq!(config.timeout_ms, 1000);
    }

    #[test]
    fn emails_url_tolerates_trailing_slash() {
        let config = ResendConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..ResendConfig::default()
        };
        let client = ResendHttpClient::new(config, SecretString::from("re_test")).unwrap();
        assert_eq!(client.emails_url(), "http://localhost:9000/emails");
    }

    #[test]
    fn debug_omits_key() {
        let client =
            ResendHttpClient::new(ResendConfig::default(), SecretString::from("re_secret")).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("ResendHttpClient"));
        assert!(!debug.contains("re_secret"));
    }
}
