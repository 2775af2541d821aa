//! Distribution handler

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::{error::ApiError, middleware::JsonRecord, state::AppState};

/// Send request body (documented shape)
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "summary": "Alice and Bob reviewed the Q3 budget.",
    "emails": ["a@example.com", "b@example.com"]
}))]
pub struct SendSummaryRequest {
    /// Summary text to distribute
    pub summary: String,
    /// Recipient addresses; all receive one shared message
    pub emails: Vec<String>,
}

/// Send response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendSummaryResponse {
    /// Always true on this path
    pub success: bool,
    /// Provider message identifier, when returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
    /// "Summary sent to N recipient(s)"
    pub message: String,
}

/// Email a summary to a list of recipients
#[utoipa::path(
    post,
    path = "/send",
    tag = "distribution",
    request_body = SendSummaryRequest,
    responses(
        (status = 200, description = "Summary accepted by the email provider", body = SendSummaryResponse),
        (status = 400, description = "Missing summary or invalid recipients", body = crate::error::ErrorResponse),
        (status = 403, description = "Email provider rejected the message", body = crate::error::ErrorResponse),
        (status = 500, description = "Provider unconfigured or unreachable", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, record))]
pub async fn send_summary(
    State(state): State<AppState>,
    JsonRecord(record): JsonRecord,
) -> Result<Json<SendSummaryResponse>, ApiError> {
    let result = state.distribution_service.distribute_record(&record).await?;

    info!(recipients = result.recipient_count, "Summary distributed");

    Ok(Json(SendSummaryResponse {
        success: result.delivered,
        message: result.confirmation(),
        email_id: result.provider_message_id,
    }))
}
