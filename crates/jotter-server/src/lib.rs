// Main library module for Jotter - a note-taking backend over an external JSON document store

// Module declarations
pub mod api; // REST API handlers
pub mod error; // Error handling and types
pub mod model; // Configuration, shared state, response types
pub mod service; // Business services
pub mod startup; // Application startup utilities
pub mod store; // Document store abstraction

// Re-export the types most callers need
pub use error::JotterError;
pub use model::{AppState, Configuration};
pub use store::{DocumentStore, create_store};
