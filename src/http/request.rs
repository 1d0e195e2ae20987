//! Request identification.
//!
//! # Responsibilities
//! - Assign a UUID v4 `x-request-id` to requests that lack one
//! - Echo the ID back on the response
//! - Expose the ID to the tracing span of each request

use axum::body::Body;
use axum::http::{HeaderName, Request};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::Span;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer assigning IDs to incoming requests.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), MakeRequestUuid)
}

/// Layer copying the ID onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID))
}

/// Span for one inbound request, tagged with its ID.
pub fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
