//! Search interaction handler.
//!
//! Implements the type-level [search interaction](https://hl7.org/fhir/http.html#search):
//! `GET [base]/[type]`
//!
//! There is no filtering, sorting or paging. Query parameters are ignored
//! and every stored resource is returned in one searchset Bundle.

use axum::{extract::State, http::StatusCode, response::Response};
use tracing::debug;

use crate::error::RestResult;
use crate::responses::fhir_json_response;
use crate::state::AppState;

/// Handler for the type-level search interaction.
pub async fn search_handler(State(state): State<AppState>) -> RestResult<Response> {
    debug!(resource_type = %state.resource_type(), "Processing search request");

    let bundle = state.endpoint().search().await?;

    Ok(fhir_json_response(
        StatusCode::OK,
        Default::default(),
        &bundle,
    ))
}
