//! Helios lite FHIR server.
//!
//! Serves create, read, update, delete and search for a single FHIR resource
//! type from an in-memory store.

use clap::Parser;
use hfs_lite_persistence::MemoryStore;
use hfs_lite_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %listener.local_addr()?, "Server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        resource_type = %config.resource_type,
        fhir_base = %config.fhir_base(),
        "Starting Helios lite FHIR server"
    );

    let app = create_app_with_config(MemoryStore::new(), config.clone());
    serve(app, &config).await
}
