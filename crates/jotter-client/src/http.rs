//! HTTP transport for the document store
//!
//! This module provides the low-level client the typed API methods run on.
//! Requests are single-shot: the store is the system of record and the
//! callers decide what a failure means, so nothing here retries.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::error::{Result, StoreError};

/// Configuration for the document store client
#[derive(Clone, Debug)]
pub struct StoreClientConfig {
    /// Base URL of the document store
    pub base_url: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
}

impl Default for StoreClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000".to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
        }
    }
}

impl StoreClientConfig {
    /// Create a new config for the given store URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }
}

/// HTTP client for the document store
///
/// Holds one `reqwest::Client` built with the configured timeouts. Proxy
/// lookup is disabled so localhost stores are reached directly.
pub struct StoreHttpClient {
    client: Client,
    config: StoreClientConfig,
}

impl StoreHttpClient {
    /// Create a new HTTP client
    pub fn new(config: StoreClientConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .no_proxy()
            .build()?;

        Ok(Self { client, config })
    }

    /// Build full URL for a store path
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        self.handle_response(path, response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).query(query).send().await?;
        self.handle_response(path, response).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        self.handle_response(path, response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        debug!("PUT {}", url);

        let response = self.client.put(&url).json(body).send().await?;
        self.handle_response(path, response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        debug!("DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        self.handle_response(path, response).await
    }

    /// Handle response and parse JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        path: &str,
        response: Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let result = response.json::<T>().await?;
            Ok(result)
        } else if status == StatusCode::NOT_FOUND {
            Err(StoreError::NotFound {
                path: path.to_string(),
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("store request failed with status {}: {}", status, body);
            Err(StoreError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
