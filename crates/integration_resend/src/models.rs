//! Resend wire models
//!
//! Request body for `POST /emails` and the decoder for its responses.

use serde::Serialize;
use serde_json::Value;

use crate::client::ResendError;

/// Body of `POST /emails`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendEmailRequest {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Decoded result of a send call
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// Resend queued the message
    Accepted { id: Option<String> },
    /// Resend declined the message; `error` is its diagnostic payload
    Rejected { error: Value },
}

impl SendOutcome {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Decode a `POST /emails` response
///
/// - A JSON body with a non-null `error` member is a rejection carrying that
///   member, whatever the status.
/// - Any other JSON body on a non-2xx status is a rejection carrying the
///   whole body (`{ statusCode, name, message }`).
/// - A 2xx body is accepted; `id` (or `data.id`) is the message id.
///
/// # Errors
///
/// Returns [`ResendError::UnexpectedResponse`] for a non-JSON failure body
/// or a non-JSON, non-empty success body.
pub fn decode_send_response(status: u16, body: &str) -> Result<SendOutcome, ResendError> {
    let success = (200..300).contains(&status);

    if body.trim().is_empty() {
        return if success {
            Ok(SendOutcome::Accepted { id: None })
        } else {
            Err(ResendError::UnexpectedResponse {
                status,
                body: String::new(),
            })
        };
    }

    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return Err(ResendError::UnexpectedResponse {
            status,
            body: body.to_string(),
        });
    };

    if let Some(error) = json.get("error").filter(|e| !e.is_null()) {
        return Ok(SendOutcome::Rejected {
            error: error.clone(),
        });
    }

    if !success {
        return Ok(SendOutcome::Rejected { error: json });
    }

    let id = json
        .get("id")
        .or_else(|| json.get("data").and_then(|d| d.get("id")))
        .and_then(Value::as_str)
        .map(ToString::to_string);

    Ok(SendOutcome::Accepted { id })
}
