//! Handler for requests that match no route.

use axum::http::Uri;
use tracing::debug;

use crate::error::RestError;

/// Answers unknown paths with a 404 OperationOutcome.
pub async fn fallback_handler(uri: Uri) -> RestError {
    debug!(path = %uri.path(), "No route matched");
    RestError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
