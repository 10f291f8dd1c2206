//! Update interaction handler.
//!
//! Implements the FHIR [update interaction](https://hl7.org/fhir/http.html#update):
//! `PUT [base]/[type]/[id]`

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{FhirResource, ResourceId};
use crate::responses::{ResourceHeaders, fhir_json_response};
use crate::state::AppState;

/// Handler for the update interaction.
///
/// Replaces the whole resource and advances its version. There is no
/// `If-Match` check, so concurrent updates to one id race and the last write
/// wins. Updating an unknown id creates it.
///
/// # Response
///
/// - `200 OK` - Resource stored, returns the new version
/// - `400 Bad Request` - Invalid path id, bad body, or `id` differing from the path
pub async fn update_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    FhirResource(resource): FhirResource,
) -> RestResult<Response> {
    debug!(
        resource_type = %state.resource_type(),
        id = %id,
        "Processing update request"
    );

    let updated = state.endpoint().update(&id, resource).await?;
    let headers = ResourceHeaders::from_document(&updated);

    Ok(fhir_json_response(
        StatusCode::OK,
        headers.to_header_map(),
        &updated,
    ))
}
