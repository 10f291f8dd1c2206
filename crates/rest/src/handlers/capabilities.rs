//! Capabilities (CapabilityStatement) handler.
//!
//! Implements the FHIR [capabilities interaction](https://hl7.org/fhir/http.html#capabilities):
//! `GET [base]/metadata`

use axum::{extract::State, http::StatusCode, response::Response};
use chrono::Utc;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::RestResult;
use crate::fhir_types::{FHIR_VERSION, format_instant};
use crate::responses::fhir_json_response;
use crate::state::AppState;

/// Interactions offered on the served resource type.
const INTERACTIONS: [&str; 5] = ["create", "read", "update", "delete", "search-type"];

/// Handler for the capabilities interaction.
///
/// Describes the one resource type this server exposes and the interactions
/// available on it.
pub async fn capabilities_handler(State(state): State<AppState>) -> RestResult<Response> {
    debug!("Processing capabilities request");

    let statement = capability_statement(state.resource_type());

    Ok(fhir_json_response(
        StatusCode::OK,
        Default::default(),
        &statement,
    ))
}

fn capability_statement(resource_type: &str) -> Value {
    let interactions: Vec<Value> = INTERACTIONS
        .iter()
        .map(|code| json!({ "code": code }))
        .collect();

    json!({
        "resourceType": "CapabilityStatement",
        "status": "active",
        "date": format_instant(Utc::now()),
        "kind": "instance",
        "software": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        },
        "fhirVersion": FHIR_VERSION,
        "format": ["json"],
        "rest": [{
            "mode": "server",
            "resource": [{
                "type": resource_type,
                "interaction": interactions,
                "versioning": "versioned",
                "readHistory": false,
                "updateCreate": true
            }]
        }]
    })
}
