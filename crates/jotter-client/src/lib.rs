//! Jotter Client - typed HTTP client for the document store
//!
//! This crate provides:
//! - HTTP transport with configured timeouts (single-shot requests, no
//!   retries; failures surface to the caller unmodified)
//! - Typed methods for the member and note collections
//! - Error types distinguishing missing records from transport failures

pub mod api;
pub mod error;
pub mod http;

// Re-exports
pub use api::StoreApiClient;
pub use error::{Result, StoreError};
pub use http::{StoreClientConfig, StoreHttpClient};
