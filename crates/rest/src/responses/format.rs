//! FHIR JSON response building.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// The media type of every resource and OperationOutcome body.
pub const FHIR_JSON: &str = "application/fhir+json";

const SERIALIZATION_FAILURE: &str = r#"{"resourceType":"OperationOutcome","issue":[{"severity":"error","code":"exception","details":{"text":"failed to encode response"}}]}"#;

/// Serializes `content` as an `application/fhir+json` response.
///
/// A value that can not be encoded yields a 500 OperationOutcome instead.
pub fn fhir_json_response<T>(status: StatusCode, mut headers: HeaderMap, content: &T) -> Response
where
    T: Serialize + ?Sized,
{
    match serde_json::to_vec(content) {
        Ok(body) => {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(FHIR_JSON));
            (status, headers, Body::from(body)).into_response()
        }
        Err(err) => {
            error!(error = %err, "Failed to encode response body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, FHIR_JSON)],
                SERIALIZATION_FAILURE,
            )
                .into_response()
        }
    }
}
