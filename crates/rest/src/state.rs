//! Application state for the FHIR REST API.
//!
//! Handlers receive an [`AppState`] holding the resource endpoint (and
//! through it the store) plus the server configuration.

use std::sync::Arc;

use hfs_lite_persistence::ResourceStore;

use crate::config::ServerConfig;
use crate::endpoint::ResourceEndpoint;

/// Shared application state for the REST API.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use hfs_lite_persistence::MemoryStore;
/// use hfs_lite_rest::{AppState, ServerConfig};
///
/// let state = AppState::new(Arc::new(MemoryStore::new()), ServerConfig::default());
/// assert_eq!(state.resource_type(), "Patient");
/// ```
#[derive(Clone)]
pub struct AppState {
    endpoint: Arc<ResourceEndpoint>,
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<dyn ResourceStore>, config: ServerConfig) -> Self {
        let endpoint = ResourceEndpoint::new(store, &config.resource_type, config.fhir_base());
        Self {
            endpoint: Arc::new(endpoint),
            config: Arc::new(config),
        }
    }

    /// Returns the resource endpoint.
    pub fn endpoint(&self) -> &ResourceEndpoint {
        &self.endpoint
    }

    /// Returns the store behind the endpoint.
    pub fn storage(&self) -> &dyn ResourceStore {
        self.endpoint.store()
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the served resource type.
    pub fn resource_type(&self) -> &str {
        &self.config.resource_type
    }
}
