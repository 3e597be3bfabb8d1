// Error handling for the Jotter application
// Maps service failures onto the HTTP error contract of the REST API

use actix_web::{HttpResponse, http::StatusCode};
use jotter_client::StoreError;

use crate::model::response::ErrorResult;

// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum JotterError {
    #[error("{0}")]
    Validation(String), // Rejected request input
    #[error("{0}")]
    NotFound(String), // Record does not exist in the store
    #[error("{0}")]
    Conflict(String), // Concurrent modification detected
    #[error("document store unavailable: {0}")]
    UpstreamUnavailable(String), // Store unreachable or returned a failure
    #[error(transparent)]
    Internal(#[from] anyhow::Error), // Anything else
}

impl JotterError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            JotterError::Validation(_) => StatusCode::BAD_REQUEST,
            JotterError::NotFound(_) => StatusCode::NOT_FOUND,
            JotterError::Conflict(_) => StatusCode::CONFLICT,
            JotterError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            JotterError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render the error as a JSON response carrying the request path.
    pub fn to_response(&self, path: &str) -> HttpResponse {
        let status = self.status();

        HttpResponse::build(status).json(ErrorResult::new(
            status.as_u16() as i32,
            status.canonical_reason().unwrap_or_default().to_string(),
            self.to_string(),
            path.to_string(),
        ))
    }
}

impl From<validator::ValidationError> for JotterError {
    fn from(value: validator::ValidationError) -> Self {
        JotterError::Validation(value.code.into_owned())
    }
}

impl From<StoreError> for JotterError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound { path } => {
                JotterError::NotFound(format!("record not found: {}", path))
            }
            StoreError::Status { status, body } => {
                JotterError::UpstreamUnavailable(format!("status {}: {}", status, body))
            }
            StoreError::Transport(e) => JotterError::UpstreamUnavailable(e.to_string()),
            StoreError::Other(e) => JotterError::Internal(e),
        }
    }
}
