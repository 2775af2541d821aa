//! API error handling
//!
//! `ApiError` is the single place where application failures are classified
//! into HTTP status codes and a stable JSON body.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

/// Hint attached to every provider rejection
pub const PROVIDER_REJECTION_HINT: &str = "This might be due to domain verification requirements. \
     Please verify a domain at resend.com/domains or use your verified email address for testing.";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not configured: {0}")]
    Unconfigured(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Email service error")]
    ProviderRejected { detail: Value },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Raw diagnostic from the email provider
    #[serde(rename = "resendError", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub resend_error: Option<Value>,
}

impl ApiError {
    /// Stable machine-readable code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::Unconfigured(_) => "unconfigured",
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::ProviderRejected { .. } => "provider_rejected",
            Self::Internal(_) => "internal_error",
        }
    }

    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ProviderRejected { .. } => StatusCode::FORBIDDEN,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Unconfigured(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().to_string();

        let body = match self {
            Self::BadRequest(msg)
            | Self::Unconfigured(msg)
            | Self::PayloadTooLarge(msg)
            | Self::Internal(msg) => ErrorResponse {
                error: msg,
                code,
                details: None,
                resend_error: None,
            },
            Self::ProviderRejected { detail } => ErrorResponse {
                error: "Email service error".to_string(),
                code,
                details: Some(PROVIDER_REJECTION_HINT.to_string()),
                resend_error: Some(detail),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Unconfigured(msg) => Self::Unconfigured(msg),
            ApplicationError::ProviderRejected { detail } => Self::ProviderRejected { detail },
            other @ (ApplicationError::Inference(_)
            | ApplicationError::Delivery(_)
            | ApplicationError::Internal(_)) => Self::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use domain::DomainError;
    use serde_json::json;

    use super::*;

    async fn body_json(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn domain_errors_are_bad_requests() {
        let err: ApiError =
            ApplicationError::Domain(DomainError::missing("transcript")).into();

        assert!(matches!(&err, ApiError::BadRequest(msg) if msg == "Missing required fields: transcript"));
        assert_eq!(err.code(), "bad_request");
    }

    #[test]
    fn unconfigured_keeps_message() {
        let err: ApiError = ApplicationError::unconfigured("GROQ_API_KEY").into();

        assert!(matches!(&err, ApiError::Unconfigured(msg) if msg == "GROQ_API_KEY is not configured"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn provider_failures_are_internal_with_prefix() {
        let err: ApiError = ApplicationError::Inference("Invalid API Key".to_string()).into();
        assert!(matches!(&err, ApiError::Internal(msg) if msg == "Failed to generate summary: Invalid API Key"));

        let err: ApiError = ApplicationError::Delivery("timed out".to_string()).into();
        assert!(matches!(&err, ApiError::Internal(msg) if msg == "Failed to send email: timed out"));
    }

    #[tokio::test]
    async fn bad_request_body() {
        let (status, body) = body_json(ApiError::BadRequest("nope".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "nope", "code": "bad_request"}));
    }

    #[tokio::test]
    async fn provider_rejection_body() {
        let detail = json!({"name": "validation_error", "message": "verify your domain"});

        let (status, body) = body_json(ApiError::ProviderRejected {
            detail: detail.clone(),
        })
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Email service error");
        assert_eq!(body["code"], "provider_rejected");
        assert_eq!(body["details"], PROVIDER_REJECTION_HINT);
        assert_eq!(body["resendError"], detail);
    }

    #[tokio::test]
    async fn payload_too_large_body() {
        let (status, body) =
            body_json(ApiError::PayloadTooLarge("length limit exceeded".to_string())).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body,
            json!({"error": "length limit exceeded", "code": "payload_too_large"})
        );
    }

    #[tokio::test]
    async fn internal_body_has_no_details() {
        let (status, body) = body_json(ApiError::Internal("boom".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "boom", "code": "internal_error"}));
    }
}
