//! Meeting minutes HTTP presentation layer
//!
//! This crate provides the HTTP API: `/summarize`, `/send`, `/diagnostics`,
//! `/health` and `/openapi.json`.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{JsonRecord, REQUEST_ID_HEADER, RequestId, RequestIdLayer};
pub use routes::{apply_middleware, create_app, create_router};
pub use state::{AppState, CredentialReport};
