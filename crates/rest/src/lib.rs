//! # hfs-lite-rest - Single-resource FHIR RESTful API
//!
//! This crate serves create, read, update, delete and search for one FHIR
//! resource type over the [FHIR RESTful API](https://hl7.org/fhir/http.html),
//! backed by any [`ResourceStore`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hfs_lite_persistence::MemoryStore;
//! use hfs_lite_rest::{ServerConfig, create_app_with_config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let addr = config.socket_addr();
//!     let app = create_app_with_config(MemoryStore::new(), config);
//!
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | create | POST | `/fhir/[type]` |
//! | search | GET | `/fhir/[type]` |
//! | read | GET | `/fhir/[type]/[id]` |
//! | update | PUT | `/fhir/[type]/[id]` |
//! | delete | DELETE | `/fhir/[type]/[id]` |
//! | capabilities | GET | `/fhir/metadata` |
//!
//! `/ping`, `/health` and `/` are served outside the FHIR base.
//!
//! ## Error Handling
//!
//! All errors are returned as FHIR [OperationOutcome](https://hl7.org/fhir/operationoutcome.html)
//! resources with `Content-Type: application/fhir+json`:
//!
//! | HTTP Status | FHIR Issue Code | Description |
//! |-------------|-----------------|-------------|
//! | 400 | invalid | Malformed body, wrong type, bad or mismatched id |
//! | 404 | not-found | Resource or route not found |
//! | 405 | not-supported | Method not allowed on the route |
//! | 409 | duplicate | Create named an id that is already live |
//! | 408 | timeout | Request exceeded the configured timeout |
//! | 500 | exception | Storage fault or handler panic |
//!
//! ## Architecture
//!
//! - [`endpoint`] - The CRUD protocol over the store
//! - [`error`] - Error types and OperationOutcome generation
//! - [`config`] - Server configuration
//! - [`state`] - Application state
//! - [`handlers`] - HTTP request handlers for each interaction
//! - [`middleware`] - Request ids, spans and error outcomes
//! - [`extractors`] - Request body extraction
//! - [`responses`] - Response formatting and header generation
//! - [`routing`] - Route configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod endpoint;
pub mod error;
pub mod extractors;
pub mod fhir_types;
pub mod handlers;
pub mod middleware;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use endpoint::ResourceEndpoint;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::DefaultBodyLimit, http::StatusCode};
use hfs_lite_persistence::ResourceStore;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: ResourceStore + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust
/// use hfs_lite_persistence::MemoryStore;
/// use hfs_lite_rest::{ServerConfig, create_app_with_config};
///
/// let config = ServerConfig {
///     resource_type: "Observation".to_string(),
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryStore::new(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: ResourceStore + 'static,
{
    info!(
        backend = storage.backend_name(),
        resource_type = %config.resource_type,
        fhir_base = %config.fhir_base(),
        "Creating REST API server"
    );

    let state = AppState::new(Arc::new(storage), config.clone());
    let router = routing::fhir_routes::create_routes(state);

    apply_middleware(router, &config)
}

/// Wraps `router` in the server's middleware stack.
///
/// Outermost first: request id assignment, tracing, request id propagation,
/// OperationOutcome rewriting, timeout, panic recovery, body size limit.
pub fn apply_middleware(router: Router, config: &ServerConfig) -> Router {
    let service_builder = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http().make_span_with(middleware::make_request_span))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(axum::middleware::from_fn(
            middleware::outcome_for_bare_errors,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ))
        .layer(CatchPanicLayer::custom(middleware::panic_outcome))
        .layer(DefaultBodyLimit::max(config.max_body_size));

    let router = if config.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(service_builder)
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "hfs_lite={level},hfs_lite_rest={level},hfs_lite_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
