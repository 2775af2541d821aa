//! Summarization handler

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::{error::ApiError, middleware::JsonRecord, state::AppState};

/// Summarize request body
///
/// Documented shape only; the handler validates the raw record so that
/// every missing field is reported by name.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "transcript": "Alice and Bob discussed Q3 budget.",
    "instruction": "Summarize in one sentence."
}))]
pub struct SummarizeRequest {
    /// Meeting transcript
    pub transcript: String,
    /// How to summarize it
    pub instruction: String,
}

/// Summarize response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummarizeResponse {
    /// Generated summary, or "No summary generated"
    pub summary: String,
}

/// Summarize a transcript following an instruction
#[utoipa::path(
    post,
    path = "/summarize",
    tag = "summaries",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Summary generated", body = SummarizeResponse),
        (status = 400, description = "Missing transcript or instruction", body = crate::error::ErrorResponse),
        (status = 500, description = "Provider unconfigured or failed", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, record))]
pub async fn summarize(
    State(state): State<AppState>,
    JsonRecord(record): JsonRecord,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let result = state.summarization_service.summarize_record(&record).await?;

    Ok(Json(SummarizeResponse {
        summary: result.summary,
    }))
}
