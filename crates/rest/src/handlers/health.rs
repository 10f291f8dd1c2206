//! Liveness and discovery endpoints.
//!
//! - `GET /ping` - cheap liveness check
//! - `GET /health` - store backend and resource count
//! - `GET /` - the paths this server answers

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;
use tracing::debug;

use crate::error::RestResult;
use crate::fhir_types::format_instant;
use crate::state::AppState;

/// Handler for `GET /ping`.
pub async fn ping_handler() -> impl IntoResponse {
    Json(json!({
        "pong": true,
        "time": format_instant(Utc::now())
    }))
}

/// Handler for the health check endpoint.
///
/// Counts stored resources, so a failing store shows up as a 500.
///
/// # HTTP Request
///
/// `GET /health`
pub async fn health_handler(State(state): State<AppState>) -> RestResult<Response> {
    debug!("Processing health check request");

    let storage = state.storage();
    let count = storage.count().await?;

    let health_response = json!({
        "status": "healthy",
        "backend": storage.backend_name(),
        "resourceType": state.resource_type(),
        "count": count,
        "timestamp": format_instant(Utc::now())
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for `GET /`.
pub async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config();
    let type_path = config.type_path();

    Json(json!({
        "ok": true,
        "paths": [
            "/ping",
            "/health",
            format!("{}/metadata (GET capabilities)", config.fhir_base()),
            format!("{} (POST create, GET search)", type_path),
            format!("{}/{{id}} (GET read, PUT update, DELETE delete)", type_path),
        ]
    }))
}
