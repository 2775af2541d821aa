//! OpenAPI documentation module
//!
//! Serves the OpenAPI 3 document for the meeting minutes API at
//! `/openapi.json`.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::{handlers, state::AppState};

/// OpenAPI documentation for the meeting minutes service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Meeting Minutes API",
        description = "Summarize meeting transcripts with a hosted LLM and email the summary",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "summaries", description = "Transcript summarization"),
        (name = "distribution", description = "Summary email distribution"),
        (name = "system", description = "Health and diagnostics")
    ),
    paths(
        handlers::summarize::summarize,
        handlers::send::send_summary,
        handlers::system::health_check,
        handlers::system::diagnostics,
    ),
    components(
        schemas(
            handlers::summarize::SummarizeRequest,
            handlers::summarize::SummarizeResponse,
            handlers::send::SendSummaryRequest,
            handlers::send::SendSummaryResponse,
            handlers::system::HealthResponse,
            handlers::system::DiagnosticsResponse,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Create OpenAPI documentation routes
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new().route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
