//! Email delivery port
//!
//! Defines how the application hands a finished message to the email
//! provider. Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApplicationError;

/// A fully rendered outbound message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    /// Verified sender address
    pub from: String,
    /// Every recipient; one message fans out to all of them
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Decoded provider answer
///
/// Transport success is not business success: a provider may answer a
/// well-formed request with an embedded rejection.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    /// The provider accepted the message
    Accepted {
        /// Provider-assigned identifier, if any
        message_id: Option<String>,
    },
    /// The provider declined the message
    Rejected {
        /// Raw provider diagnostic
        detail: Value,
    },
}

/// Port for sending email
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmailDeliveryPort: Send + Sync {
    /// Send one message in a single provider call
    ///
    /// Transport failures are returned as `Err`; provider rejections are
    /// returned as [`DeliveryOutcome::Rejected`].
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryOutcome, ApplicationError>;
}
