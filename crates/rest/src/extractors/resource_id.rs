//! Resource id path extractor.
//!
//! Wraps axum's `Path<String>` so that a path axum can not decode (for
//! example invalid percent-encoded UTF-8) is reported as an OperationOutcome
//! rather than axum's plain-text rejection. The id grammar itself is checked
//! by the endpoint.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use tracing::debug;

use crate::error::RestError;

/// The `{id}` segment of an instance route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId(pub String);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(ResourceId(id)),
            Err(rejection) => {
                debug!(path = %parts.uri.path(), error = %rejection.body_text(), "Rejected resource id");
                Err(RestError::bad_request("invalid resource id in request path"))
            }
        }
    }
}
