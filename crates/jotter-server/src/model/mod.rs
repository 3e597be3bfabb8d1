//! Data models module
//!
//! This module contains configuration, shared state, and HTTP response types
//! used across the application.

pub mod app_state;
pub mod config;
pub mod response;

// Re-export commonly used types at the module level
pub use app_state::AppState;
pub use config::Configuration;
pub use response::{ApiResult, ErrorResult};
