//! JSON record extraction
//!
//! Request bodies are parsed into a raw JSON object and handed to the domain
//! validator untouched, so that missing or mistyped fields are reported by
//! name instead of as a generic deserialization failure. The Content-Type
//! header is not required.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;

use crate::error::ApiError;

/// Rejection for [`JsonRecord`]
#[derive(Debug, Error)]
pub enum JsonRecordRejection {
    /// The body could not be read (e.g. it exceeded the size limit)
    #[error(transparent)]
    Body(#[from] BytesRejection),

    /// The body is not valid JSON
    #[error("Invalid JSON body: {0}")]
    Malformed(String),

    /// The body is valid JSON but not an object
    #[error("Request body must be a JSON object")]
    NotAnObject,
}

impl From<JsonRecordRejection> for ApiError {
    fn from(rejection: JsonRecordRejection) -> Self {
        match rejection {
            JsonRecordRejection::Body(body) if body.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Self::PayloadTooLarge(body.body_text())
            },
            JsonRecordRejection::Body(body) => Self::BadRequest(body.body_text()),
            other => Self::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for JsonRecordRejection {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

/// A request body that parsed as a JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecord(pub Value);

impl<S> FromRequest<S> for JsonRecord
where
    S: Send + Sync,
{
    type Rejection = JsonRecordRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| JsonRecordRejection::Malformed(e.to_string()))?;

        if !value.is_object() {
            return Err(JsonRecordRejection::NotAnObject);
        }

        Ok(Self(value))
    }
}
