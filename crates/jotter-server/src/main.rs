//! Main entry point for the Jotter server.
//!
//! This file sets up configuration, logging, the document store, and the
//! HTTP server, then runs until a shutdown signal arrives.

use std::sync::Arc;

use jotter_server::{
    model::{AppState, Configuration},
    startup::{self, GracefulShutdown},
    store,
};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize configuration and logging
    let configuration = Configuration::new();

    let logging_config = configuration.logging_config();
    let _logging_guard = startup::init_logging(&logging_config)?;

    // Connect the document store
    let store = store::create_store(&configuration)?;
    info!(
        mode = %configuration.store_mode(),
        base_url = %configuration.store_base_url(),
        "Document store initialized"
    );

    let address = configuration.server_address();
    let port = configuration.server_port();
    let context_path = configuration.server_context_path();
    let shutdown_timeout = configuration.shutdown_timeout();

    let app_state = Arc::new(AppState::new(configuration, store));

    // Set up graceful shutdown handling
    let shutdown_signal = startup::wait_for_shutdown_signal().await;
    let graceful_shutdown = GracefulShutdown::new(shutdown_signal, shutdown_timeout);

    info!("Starting Jotter server on {}:{}{}", address, port, context_path);
    let server = startup::api_server(app_state, context_path, address, port)?;

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = graceful_shutdown.wait_for_shutdown() => {
            info!("Server shutting down gracefully");
        }
    }

    Ok(())
}
