//! OperationOutcome bodies for errors raised outside the handlers.
//!
//! Axum answers an unsupported method with a bare 405, and the timeout layer
//! answers a slow request with a bare 408. Both arrive here without a body
//! and leave as OperationOutcomes. A handler panic is caught and reported as
//! a 500 OperationOutcome.

use std::any::Any;

use axum::{
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::error::RestError;

/// Rewrites bodiless 405 and 408 responses as OperationOutcomes.
///
/// The `Allow` header of a 405 is carried over. Responses that already have
/// a `Content-Type` are passed through untouched.
pub async fn outcome_for_bare_errors(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    if response.headers().contains_key(header::CONTENT_TYPE) {
        return response;
    }

    let error = match response.status() {
        StatusCode::METHOD_NOT_ALLOWED => RestError::MethodNotAllowed { method, path },
        StatusCode::REQUEST_TIMEOUT => RestError::RequestTimeout,
        _ => return response,
    };

    let mut outcome = error.into_response();
    if let Some(allow) = response.headers().get(header::ALLOW) {
        outcome.headers_mut().insert(header::ALLOW, allow.clone());
    }
    outcome
}

/// Converts a caught handler panic into a 500 OperationOutcome.
pub fn panic_outcome(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    error!(panic = %detail, "Request handler panicked");

    RestError::InternalError {
        message: "internal server error".to_string(),
    }
    .into_response()
}
