//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::model::config::Configuration;
use crate::store::DocumentStore;

/// State handed to every handler via `web::Data`
pub struct AppState {
    pub configuration: Configuration,
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(configuration: Configuration, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            configuration,
            store,
        }
    }
}
