//! Read interaction handler.
//!
//! Implements the FHIR [read interaction](https://hl7.org/fhir/http.html#read):
//! `GET [base]/[type]/[id]`

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::ResourceId;
use crate::responses::{ResourceHeaders, fhir_json_response};
use crate::state::AppState;

/// Handler for the read interaction.
///
/// # Response
///
/// - `200 OK` - Resource found
/// - `400 Bad Request` - The id is not a valid FHIR id
/// - `404 Not Found` - Resource does not exist
pub async fn read_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> RestResult<Response> {
    debug!(
        resource_type = %state.resource_type(),
        id = %id,
        "Processing read request"
    );

    let resource = state.endpoint().read(&id).await?;
    let headers = ResourceHeaders::from_document(&resource);

    Ok(fhir_json_response(
        StatusCode::OK,
        headers.to_header_map(),
        &resource,
    ))
}
