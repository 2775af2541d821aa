//! Resend email adapter - Implements EmailDeliveryPort using integration_resend

use application::{
    error::ApplicationError,
    ports::{DeliveryOutcome, EmailDeliveryPort, OutboundEmail},
};
use async_trait::async_trait;
use integration_resend::{
    ResendClient, ResendConfig, ResendError, ResendHttpClient, SendEmailRequest, SendOutcome,
};
use secrecy::SecretString;
use tracing::{debug, instrument};

/// Adapter for Resend email delivery
#[derive(Debug)]
pub struct ResendEmailAdapter {
    client: ResendHttpClient,
}

impl ResendEmailAdapter {
    /// Create a new adapter with the given configuration and API key
    pub fn new(config: ResendConfig, api_key: SecretString) -> Result<Self, ApplicationError> {
        let client = ResendHttpClient::new(config, api_key).map_err(Self::map_error)?;

        Ok(Self { client })
    }

    /// Convert Resend error to application error
    fn map_error(e: ResendError) -> ApplicationError {
        ApplicationError::Delivery(e.to_string())
    }
}

#[async_trait]
impl EmailDeliveryPort for ResendEmailAdapter {
    #[instrument(skip(self, email), fields(recipients = email.to.len()))]
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryOutcome, ApplicationError> {
        let request = SendEmailRequest {
            from: email.from.clone(),
            to: email.to.clone(),
            subject: email.subject.clone(),
            html: email.html.clone(),
            text: email.text.clone(),
        };

        let outcome = self
            .client
            .send_email(&request)
            .await
            .map_err(Self::map_error)?;

        debug!(accepted = outcome.is_accepted(), "Email handed to Resend");

        Ok(match outcome {
            SendOutcome::Accepted { id } => DeliveryOutcome::Accepted { message_id: id },
            SendOutcome::Rejected { error } => DeliveryOutcome::Rejected { detail: error },
        })
    }
}
