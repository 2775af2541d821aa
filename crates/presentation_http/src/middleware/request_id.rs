//! Request ID middleware for log correlation
//!
//! Reuses a caller-supplied `X-Request-Id` when it is a valid UUID and
//! generates a v7 UUID otherwise. Each request runs inside an
//! `http_request` span carrying the ID, and the ID is echoed on the response.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use axum::{body::Body, extract::Request, http::header::HeaderValue, response::Response};
use tower::{Layer, Service};
use tracing::Instrument;
use uuid::Uuid;

/// The header name for the request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Layer that adds request ID handling to HTTP services
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service that tags each request with a [`RequestId`]
#[derive(Debug, Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

/// Caller-supplied ID if it parses as a UUID, otherwise a fresh v7 UUID
fn resolve_request_id(request: &Request<Body>) -> Uuid {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s.trim()).ok())
        .unwrap_or_else(Uuid::now_v7)
}

impl<S> Service<Request<Body>> for RequestIdService<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Body>) -> Self::Future {
        let request_id = RequestId(resolve_request_id(&request));
        request.extensions_mut().insert(request_id);

        let span = tracing::info_span!(
            "http_request",
            request_id = %request_id,
            method = %request.method(),
            path = %request.uri().path(),
        );

        // Take the service that was driven to readiness, leave a clone behind
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(
            async move {
                let mut response = inner.call(request).await?;

                if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                    response.headers_mut().insert(REQUEST_ID_HEADER, value);
                }

                Ok(response)
            }
            .instrument(span),
        )
    }
}

/// Request ID extracted from the request headers or generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use axum::{Extension, Router, routing::get};
    use tower::ServiceExt;

    use super::*;

    async fn echo_id(Extension(id): Extension<RequestId>) -> String {
        id.to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/", get(echo_id))
            .layer(RequestIdLayer)
    }

    #[tokio::test]
    async fn valid_caller_id_is_propagated() {
        let id = "0192b7d8-3c4e-7a10-8000-000000000001";
        let request = Request::builder()
            .uri("/")
            .header(REQUEST_ID_HEADER, id)
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], id);
    }

    #[tokio::test]
    async fn invalid_caller_id_is_replaced() {
        let request = Request::builder()
            .uri("/")
            .header(REQUEST_ID_HEADER, "not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        let header = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        let parsed = Uuid::parse_str(header).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[tokio::test]
    async fn handler_sees_same_id_as_header() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();

        let header = response.headers()[REQUEST_ID_HEADER]
            .to_str()
            .unwrap()
            .to_string();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(header, String::from_utf8(body.to_vec()).unwrap());
    }

    #[test]
    fn request_id_display() {
        let id = RequestId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
