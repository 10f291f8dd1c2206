//! REST API test harness.

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use hfs_lite_persistence::{MemoryStore, ResourceStore};
use hfs_lite_rest::routing::create_routes;
use hfs_lite_rest::{AppState, ServerConfig, apply_middleware};
use serde_json::{Value, json};

/// A test server over an in-memory store the test can inspect directly.
pub struct TestApp {
    /// The test server instance.
    pub server: TestServer,
    /// The store behind the server.
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    /// Creates a server with the test configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a server with a custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let dyn_store: Arc<dyn ResourceStore> = store.clone();

        let state = AppState::new(dyn_store, config.clone());
        let app = apply_middleware(create_routes(state), &config);

        Self {
            server: TestServer::new(app).expect("Failed to create test server"),
            store,
        }
    }

    /// Creates a resource through the API and returns the response body.
    pub async fn seed(&self, resource: Value) -> Value {
        let response = self.server.post("/fhir/Patient").json(&resource).await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json()
    }

    /// Creates a patient with a fixed id and family name.
    pub async fn seed_patient(&self, id: &str, family: &str) -> Value {
        self.seed(patient_with_id(id, family)).await
    }
}

/// Wraps an arbitrary router in the production middleware stack.
pub fn server_for(router: Router, config: &ServerConfig) -> TestServer {
    TestServer::new(apply_middleware(router, config)).expect("Failed to create test server")
}

/// A Patient body without an id.
pub fn patient(family: &str) -> Value {
    json!({
        "resourceType": "Patient",
        "name": [{"family": family, "given": ["Test"]}],
        "active": true
    })
}

/// A Patient body with an id.
pub fn patient_with_id(id: &str, family: &str) -> Value {
    json!({
        "resourceType": "Patient",
        "id": id,
        "name": [{"family": family}],
        "active": true
    })
}
