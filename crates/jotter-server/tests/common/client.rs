//! HTTP test client for API testing
//!
//! Provides a lightweight HTTP client optimized for integration testing.
//! Uses `StoreHttpClient` from `jotter-client` for typed requests (the
//! server speaks the same plain-JSON dialect as the document store), adding
//! raw response access for status-code assertions.

use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

use jotter_client::{StoreClientConfig, StoreError, StoreHttpClient};

/// Test HTTP client backed by `StoreHttpClient` for typed requests.
///
/// Adds raw request helpers (`raw_get`, `raw_post_json`, `raw_put_json`,
/// `raw_delete`) that hand back the full `reqwest::Response` so tests can
/// assert on status codes and error bodies.
pub struct TestClient {
    /// Low-level reqwest client for raw requests
    client: Client,
    /// High-level client for typed requests
    http_client: StoreHttpClient,
    base_url: String,
}

impl TestClient {
    /// Create a new test client
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .no_proxy()
            .build()
            .expect("Failed to create HTTP client");

        let http_client = StoreHttpClient::new(StoreClientConfig::new(base_url))
            .expect("Failed to create typed HTTP client");

        Self {
            client,
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build full URL
    fn build_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        self.http_client.get(path).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, StoreError> {
        self.http_client.get_with_query(path, query).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        self.http_client.post_json(path, body).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        self.http_client.put_json(path, body).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        self.http_client.delete(path).await
    }

    /// Make a raw GET request and return the response without parsing
    pub async fn raw_get(&self, path: &str) -> Response {
        self.client
            .get(self.build_url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// Make a raw POST request with a JSON body
    pub async fn raw_post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Response {
        self.client
            .post(self.build_url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed")
    }

    /// Make a raw PUT request with a JSON body
    pub async fn raw_put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Response {
        self.client
            .put(self.build_url(path))
            .json(body)
            .send()
            .await
            .expect("PUT request failed")
    }

    /// Make a raw DELETE request
    pub async fn raw_delete(&self, path: &str) -> Response {
        self.client
            .delete(self.build_url(path))
            .send()
            .await
            .expect("DELETE request failed")
    }
}
