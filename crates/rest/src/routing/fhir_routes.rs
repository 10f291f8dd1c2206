//! FHIR route configuration.

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Creates all routes for the configured resource type.
///
/// With the default configuration (`/fhir`, `Patient`):
///
/// ## System-level
/// - `GET /` - Path listing
/// - `GET /ping` - Liveness
/// - `GET /health` - Health check
/// - `GET /fhir/metadata` - CapabilityStatement
///
/// ## Type-level
/// - `GET /fhir/Patient` - Search
/// - `POST /fhir/Patient` - Create
///
/// ## Instance-level
/// - `GET /fhir/Patient/{id}` - Read
/// - `PUT /fhir/Patient/{id}` - Update
/// - `DELETE /fhir/Patient/{id}` - Delete
///
/// Anything else falls through to a 404 OperationOutcome.
pub fn create_routes(state: AppState) -> Router {
    let config = state.config();
    let metadata_path = format!("{}/metadata", config.fhir_base());
    let type_path = config.type_path();
    let instance_path = format!("{}/{{id}}", type_path);

    Router::new()
        // System-level routes
        .route("/", get(handlers::root_handler))
        .route("/ping", get(handlers::ping_handler))
        .route("/health", get(handlers::health_handler))
        .route(&metadata_path, get(handlers::capabilities_handler))
        // Type-level routes
        .route(
            &type_path,
            get(handlers::search_handler).post(handlers::create_handler),
        )
        // Instance-level routes
        .route(
            &instance_path,
            get(handlers::read_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .fallback(handlers::fallback_handler)
        .with_state(state)
}
