//! Request id propagation and per-request spans.
//!
//! The id itself is assigned by `tower-http`'s `SetRequestIdLayer`, which
//! keeps a caller-supplied `x-request-id` and otherwise generates a UUID.
//! The span built here carries it so every log line of a request can be
//! correlated.

use axum::{body::Body, http::Request};
use tracing::{Span, info_span};

/// Header carrying the request id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the tracing span for one request.
pub fn make_request_span(req: &Request<Body>) -> Span {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        request_id = %request_id,
    )
}
