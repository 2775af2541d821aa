//! Distribution service - emails a summary to a recipient list
//!
//! One validated request becomes exactly one outbound message addressed to
//! every recipient. The provider answer is decoded into a
//! [`DeliveryOutcome`] by the adapter; an embedded rejection is surfaced as
//! [`ApplicationError::ProviderRejected`] and never reported as delivered.

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use domain::{DistributionRequest, DistributionResult};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{DeliveryOutcome, EmailDeliveryPort, OutboundEmail, SummaryEmail, SummaryRendererPort},
};

const CREDENTIAL_VARIABLE: &str = "RESEND_API_KEY";
const SENDER_VARIABLE: &str = "EMAIL_FROM";

/// Format the date line used in the subject and body, e.g. "October 19, 2026"
pub fn format_summary_date(now: DateTime<Utc>, timezone: Tz) -> String {
    now.with_timezone(&timezone).format("%B %-d, %Y").to_string()
}

/// Subject line for a summary sent on `date`
pub fn summary_subject(date: &str) -> String {
    format!("Meeting Summary - {date}")
}

/// Service for distributing summaries by email
pub struct DistributionService {
    delivery: Option<Arc<dyn EmailDeliveryPort>>,
    sender: Option<String>,
    renderer: Arc<dyn SummaryRendererPort>,
    timezone: Tz,
}

impl fmt::Debug for DistributionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistributionService")
            .field("has_delivery", &self.delivery.is_some())
            .field("sender", &self.sender)
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}

impl DistributionService {
    /// Create a new distribution service
    ///
    /// A blank sender counts as unconfigured.
    pub fn new(
        delivery: Option<Arc<dyn EmailDeliveryPort>>,
        sender: Option<String>,
        renderer: Arc<dyn SummaryRendererPort>,
    ) -> Self {
        Self {
            delivery,
            sender: sender.filter(|s| !s.trim().is_empty()),
            renderer,
            timezone: Tz::UTC,
        }
    }

    /// Timezone used for the date line
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Validate a raw JSON record and distribute it
    #[instrument(skip(self, record))]
    pub async fn distribute_record(
        &self,
        record: &Value,
    ) -> Result<DistributionResult, ApplicationError> {
        let request = DistributionRequest::from_record(record)?;
        self.distribute(&request).await
    }

    /// Distribute an already validated request, dated now
    pub async fn distribute(
        &self,
        request: &DistributionRequest,
    ) -> Result<DistributionResult, ApplicationError> {
        self.distribute_at(request, Utc::now()).await
    }

    /// Distribute an already validated request with an explicit send time
    #[instrument(
        skip(self, request),
        fields(recipient_count = request.recipient_count(), summary_len = request.summary.len())
    )]
    pub async fn distribute_at(
        &self,
        request: &DistributionRequest,
        now: DateTime<Utc>,
    ) -> Result<DistributionResult, ApplicationError> {
        let Some(delivery) = &self.delivery else {
            warn!("Distribution requested without an email provider");
            return Err(ApplicationError::unconfigured(CREDENTIAL_VARIABLE));
        };
        let Some(sender) = &self.sender else {
            warn!("Distribution requested without a sender address");
            return Err(ApplicationError::unconfigured(SENDER_VARIABLE));
        };

        let email = self.compose(request, sender, now)?;

        match delivery.send(&email).await? {
            DeliveryOutcome::Accepted { message_id } => {
                info!(message_id = ?message_id, "Summary email accepted");
                Ok(DistributionResult::delivered(
                    message_id,
                    request.recipient_count(),
                ))
            },
            DeliveryOutcome::Rejected { detail } => {
                warn!(detail = %detail, "Email provider rejected summary");
                Err(ApplicationError::ProviderRejected { detail })
            },
        }
    }

    fn compose(
        &self,
        request: &DistributionRequest,
        sender: &str,
        now: DateTime<Utc>,
    ) -> Result<OutboundEmail, ApplicationError> {
        let date = format_summary_date(now, self.timezone);
        let rendered = self.renderer.render(&SummaryEmail {
            summary: request.summary.clone(),
            date: date.clone(),
        })?;

        Ok(OutboundEmail {
            from: sender.to_string(),
            to: request.recipients.to_strings(),
            subject: summary_subject(&date),
            html: rendered.html,
            text: rendered.text,
        })
    }
}
