//! Health and diagnostics handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Server is running", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Diagnostics response; never contains the key itself
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsResponse {
    pub success: bool,
    pub has_groq_key: bool,
    pub key_length: usize,
}

/// Report whether the completion key is configured
#[utoipa::path(
    get,
    path = "/diagnostics",
    tag = "system",
    responses((status = 200, description = "Credential presence", body = DiagnosticsResponse))
)]
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    Json(DiagnosticsResponse {
        success: true,
        has_groq_key: state.credentials.has_completion_key,
        key_length: state.credentials.completion_key_length,
    })
}
