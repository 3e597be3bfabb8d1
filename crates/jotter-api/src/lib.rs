//! Jotter API - shared model definitions
//!
//! This crate provides:
//! - Member and Note document types shared by the server and the store client
//! - Display-ordering helpers for note lists
//! - Input validation utilities

pub mod model;
pub mod validation;

// Re-export commonly used types
pub use model::*;
pub use validation::*;
