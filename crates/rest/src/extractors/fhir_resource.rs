//! FHIR resource extractor.
//!
//! Reads the request body and parses it as JSON. The body is parsed whatever
//! the declared `Content-Type`. Object shape and `resourceType` are checked by
//! the endpoint, which knows the served type.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::debug;

use crate::error::RestError;

/// Axum extractor for a JSON request body.
///
/// # Example
///
/// ```rust,ignore
/// use hfs_lite_rest::extractors::FhirResource;
///
/// async fn create_handler(FhirResource(resource): FhirResource) {
///     println!("Resource type: {}", resource["resourceType"]);
/// }
/// ```
#[derive(Debug)]
pub struct FhirResource(pub Value);

/// Error type for body extraction failures.
#[derive(Debug)]
pub enum FhirResourceRejection {
    /// The body could not be read (too large, aborted).
    Unreadable(String),
    /// The body is not well-formed JSON.
    InvalidJson(String),
}

impl IntoResponse for FhirResourceRejection {
    fn into_response(self) -> Response {
        let error = match self {
            FhirResourceRejection::Unreadable(msg) => RestError::bad_request(msg),
            FhirResourceRejection::InvalidJson(msg) => {
                debug!(error = %msg, "Rejected request body");
                RestError::bad_request("invalid JSON body")
            }
        };
        error.into_response()
    }
}

impl<S> FromRequest<S> for FhirResource
where
    S: Send + Sync,
{
    type Rejection = FhirResourceRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| FhirResourceRejection::Unreadable(e.body_text()))?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| FhirResourceRejection::InvalidJson(e.to_string()))?;

        Ok(FhirResource(value))
    }
}
