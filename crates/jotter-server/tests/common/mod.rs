//! Common test utilities for integration testing
//!
//! This module provides shared test infrastructure including:
//! - TestServer: Start and manage an in-process Jotter server for testing
//! - TestClient: HTTP client for API testing

#[allow(dead_code, unused_imports)]
pub mod client;
#[allow(dead_code, unused_imports)]
pub mod server;

pub use client::TestClient;
pub use server::TestServer;

/// Generate a unique test ID to avoid conflicts between tests
pub fn unique_test_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("test_{}", timestamp)
}

/// Generate a unique member ID
pub fn unique_member_id(prefix: &str) -> String {
    format!("{}_{}", prefix, unique_test_id())
}

/// Generate a unique note ID
#[allow(dead_code)]
pub fn unique_note_id(prefix: &str) -> String {
    format!("{}_{}", prefix, unique_test_id())
}
