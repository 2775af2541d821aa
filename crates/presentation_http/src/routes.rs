//! Route definitions and the middleware stack

use std::any::Any;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use crate::{error::ApiError, handlers, middleware::RequestIdLayer, openapi, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(handlers::summarize::summarize))
        .route("/send", post(handlers::send::send_summary))
        .route("/diagnostics", get(handlers::system::diagnostics))
        .route("/health", get(handlers::system::health_check))
        .merge(openapi::create_openapi_routes())
        .with_state(state)
}

/// Create the router wrapped in the full middleware stack
pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    apply_middleware(create_router(state), server)
}

/// Wrap a router with panic catching, body limit, CORS, tracing and
/// request IDs (outermost)
///
/// The body limit is enforced when [`crate::middleware::JsonRecord`] reads
/// the body, so an oversized request gets the JSON error shape.
pub fn apply_middleware(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(DefaultBodyLimit::max(server.max_body_size_bytes))
        .layer(cors_layer(&server.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(cors::Any)
            .allow_methods(cors::Any)
            .allow_headers(cors::Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(cors::Any)
    }
}

/// Render a handler panic as an internal error instead of dropping the
/// connection
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    error!(panic = %detail, "Handler panicked");

    ApiError::Internal(format!("Unexpected failure: {detail}")).into_response()
}
