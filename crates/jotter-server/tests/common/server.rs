//! Test server management for integration tests
//!
//! Starts an in-process Jotter server for testing. The default
//! configuration uses the memory store, so tests need no external document
//! store; `start_with_store_url` starts in remote mode for tests that
//! exercise upstream failure handling.

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use config::Config;
use tokio::time::sleep;

use jotter_server::{
    model::{
        AppState, Configuration,
        config::{SERVER_CONTEXT_PATH, STORE_BASE_URL, STORE_MODE, STORE_MODE_MEMORY, STORE_MODE_REMOTE},
    },
    startup, store,
};

const TEST_CONTEXT_PATH: &str = "/api";

/// A test server instance running the API in-process
///
/// The server task lives on the test runtime, so it ends with the test.
pub struct TestServer {
    handle: ServerHandle,
    base_url: String,
}

impl TestServer {
    /// Start a new test server backed by the memory store
    pub async fn start() -> Result<Self, TestServerError> {
        Self::start_with_overrides(&[(STORE_MODE, STORE_MODE_MEMORY)]).await
    }

    /// Start a new test server in remote mode against the given store URL
    pub async fn start_with_store_url(store_url: &str) -> Result<Self, TestServerError> {
        Self::start_with_overrides(&[(STORE_MODE, STORE_MODE_REMOTE), (STORE_BASE_URL, store_url)])
            .await
    }

    async fn start_with_overrides(overrides: &[(&str, &str)]) -> Result<Self, TestServerError> {
        let port = find_available_port()?;

        let mut builder = Config::builder()
            .set_override(SERVER_CONTEXT_PATH, TEST_CONTEXT_PATH)
            .map_err(|e| TestServerError::StartFailed(e.to_string()))?;
        for (key, value) in overrides {
            builder = builder
                .set_override(*key, *value)
                .map_err(|e| TestServerError::StartFailed(e.to_string()))?;
        }
        let configuration = Configuration {
            config: builder
                .build()
                .map_err(|e| TestServerError::StartFailed(e.to_string()))?,
        };

        let store = store::create_store(&configuration)
            .map_err(|e| TestServerError::StartFailed(e.to_string()))?;
        let app_state = Arc::new(AppState::new(configuration, store));

        let server = startup::api_server(
            app_state,
            TEST_CONTEXT_PATH.to_string(),
            "127.0.0.1".to_string(),
            port,
        )
        .map_err(|e| TestServerError::StartFailed(e.to_string()))?;

        let handle = server.handle();
        tokio::spawn(server);

        let test_server = Self {
            handle,
            base_url: format!("http://127.0.0.1:{}{}", port, TEST_CONTEXT_PATH),
        };
        test_server.wait_for_ready(Duration::from_secs(10)).await?;

        Ok(test_server)
    }

    /// Get the base URL, including the context path
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stop the server
    pub async fn stop(&self) {
        self.handle.stop(false).await;
    }

    /// Poll the liveness endpoint until the server answers
    async fn wait_for_ready(&self, timeout: Duration) -> Result<(), TestServerError> {
        let client = reqwest::Client::new();
        let url = format!("{}/health/liveness", self.base_url);
        let start = std::time::Instant::now();

        while start.elapsed() < timeout {
            if let Ok(response) = client.get(&url).send().await
                && response.status().is_success()
            {
                return Ok(());
            }

            sleep(Duration::from_millis(50)).await;
        }

        Err(TestServerError::Timeout)
    }
}

/// Errors that can occur when managing the test server
#[derive(Debug)]
pub enum TestServerError {
    /// Failed to start the server
    StartFailed(String),
    /// Server startup timeout
    Timeout,
    /// No available port found
    NoAvailablePort,
}

impl std::fmt::Display for TestServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartFailed(e) => write!(f, "Failed to start server: {}", e),
            Self::Timeout => write!(f, "Server startup timeout"),
            Self::NoAvailablePort => write!(f, "No available port found"),
        }
    }
}

impl std::error::Error for TestServerError {}

/// Find an available TCP port
pub fn find_available_port() -> Result<u16, TestServerError> {
    let listener =
        TcpListener::bind("127.0.0.1:0").map_err(|_| TestServerError::NoAvailablePort)?;
    let port = listener
        .local_addr()
        .map_err(|_| TestServerError::NoAvailablePort)?
        .port();
    Ok(port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_available_port() {
        let port = find_available_port().unwrap();
        assert!(port > 0);
    }
}
