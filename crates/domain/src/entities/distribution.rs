//! Distribution request and result

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{errors::DomainError, validation, value_objects::RecipientList};

/// Wire name of the summary field
pub const SUMMARY_FIELD: &str = "summary";
/// Wire name of the recipient list field
pub const EMAILS_FIELD: &str = "emails";

/// A validated request to email a summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionRequest {
    /// Summary text, sent as-is
    pub summary: String,
    /// Every recipient of the single outbound message
    pub recipients: RecipientList,
}

impl DistributionRequest {
    /// Validate a candidate JSON record
    ///
    /// The summary is checked before the recipient list, so a record with
    /// both problems reports the missing summary.
    pub fn from_record(record: &Value) -> Result<Self, DomainError> {
        validation::require_text_fields(record, &[SUMMARY_FIELD])?;
        let recipients = validation::recipients(record.get(EMAILS_FIELD), EMAILS_FIELD)?;

        Ok(Self {
            summary: validation::text_field(record, SUMMARY_FIELD)
                .unwrap_or_default()
                .to_string(),
            recipients,
        })
    }

    pub fn recipient_count(&self) -> usize {
        self.recipients.len()
    }
}

/// Acknowledgment of an accepted outbound message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResult {
    pub delivered: bool,
    /// Opaque identifier assigned by the provider, when it returned one
    pub provider_message_id: Option<String>,
    pub recipient_count: usize,
}

impl DistributionResult {
    /// A delivered result for `recipient_count` recipients
    pub fn delivered(provider_message_id: Option<String>, recipient_count: usize) -> Self {
        Self {
            delivered: true,
            provider_message_id,
            recipient_count,
        }
    }

    /// Caller-facing confirmation text
    pub fn confirmation(&self) -> String {
        format!("Summary sent to {} recipient(s)", self.recipient_count)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn valid_record_is_accepted() {
        let record = json!({"summary": "S", "emails": ["a@example.com", "b@example.com"]});
        let request = DistributionRequest::from_record(&record).unwrap();
        assert_eq!(request.summary, "S");
        assert_eq!(request.recipient_count(), 2);
    }

    #[test]
    fn summary_is_checked_first() {
        let record = json!({"emails": "nope"});
        let err = DistributionRequest::from_record(&record).unwrap_err();
        assert_eq!(err, DomainError::missing("summary"));
    }

    #[test]
    fn missing_emails_requires_array() {
        let record = json!({"summary": "S"});
        let err = DistributionRequest::from_record(&record).unwrap_err();
        assert_eq!(err, DomainError::ArrayRequired("emails".to_string()));
    }

    #[test]
    fn invalid_entries_are_all_listed() {
        let record = json!({"summary": "S", "emails": ["x", "a@example.com", "y@z"]});
        let err = DistributionRequest::from_record(&record).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidFormat(vec!["x".to_string(), "y@z".to_string()])
        );
    }

    #[test]
    fn confirmation_counts_recipients() {
        let result = DistributionResult::delivered(Some("id-1".to_string()), 2);
        assert!(result.delivered);
        assert_eq!(result.confirmation(), "Summary sent to 2 recipient(s)");
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = DistributionResult::delivered(None, 1);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            json!({"delivered": true, "providerMessageId": null, "recipientCount": 1})
        );
    }
}
