//! Error types for document store operations

/// Error type for document store requests
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found: {path}")]
    NotFound { path: String },

    #[error("store returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// True when the store answered but the record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
