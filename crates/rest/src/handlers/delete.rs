//! Delete interaction handler.
//!
//! Implements the FHIR [delete interaction](https://hl7.org/fhir/http.html#delete):
//! `DELETE [base]/[type]/[id]`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::ResourceId;
use crate::state::AppState;

/// Handler for the delete interaction.
///
/// Removes the resource and its version counter. A later create of the same
/// id starts again at version 1.
///
/// # Response
///
/// - `204 No Content` - Resource deleted
/// - `400 Bad Request` - The id is not a valid FHIR id
/// - `404 Not Found` - Resource does not exist
pub async fn delete_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> RestResult<Response> {
    debug!(
        resource_type = %state.resource_type(),
        id = %id,
        "Processing delete request"
    );

    state.endpoint().delete(&id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
