//! Create interaction handler.
//!
//! Implements the FHIR [create interaction](https://hl7.org/fhir/http.html#create):
//! `POST [base]/[type]`

use axum::{extract::State, http::StatusCode, response::Response};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::FhirResource;
use crate::responses::{ResourceHeaders, fhir_json_response};
use crate::state::AppState;

/// Handler for the create interaction.
///
/// # HTTP Request
///
/// `POST [base]/[type]`
///
/// The server assigns the id unless the body carries a valid one.
///
/// # Response
///
/// - `201 Created` - Resource created, with `Location`, `ETag` and `Last-Modified`
/// - `400 Bad Request` - Malformed body, wrong `resourceType` or invalid `id`
///
/// # Example
///
/// ```http
/// POST /fhir/Patient HTTP/1.1
/// Content-Type: application/fhir+json
///
/// {"resourceType": "Patient", "name": [{"family": "Smith"}]}
/// ```
pub async fn create_handler(
    State(state): State<AppState>,
    FhirResource(resource): FhirResource,
) -> RestResult<Response> {
    debug!(resource_type = %state.resource_type(), "Processing create request");

    let created = state.endpoint().create(resource).await?;

    let headers =
        ResourceHeaders::from_document(&created.resource).with_location(created.location);

    Ok(fhir_json_response(
        StatusCode::CREATED,
        headers.to_header_map(),
        &created.resource,
    ))
}
