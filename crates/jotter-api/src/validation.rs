//! Input validation utilities for Jotter API requests
//!
//! Handlers run these checks before any store call is made, so malformed
//! input never reaches the document store.

use validator::ValidationError;

/// Maximum length for id fields
pub const MAX_ID_LENGTH: usize = 128;

/// Maximum length for member name fields
pub const MAX_NAME_LENGTH: usize = 256;

/// Maximum length for note text (64KB)
pub const MAX_TEXT_LENGTH: usize = 64 * 1024;

/// Maximum length for timestamp fields
pub const MAX_TIMESTAMP_LENGTH: usize = 64;

/// Validate an entity id
///
/// Ids are caller-assigned and end up in store URL paths. They must:
/// - Not be empty
/// - Not exceed MAX_ID_LENGTH characters
/// - Contain only alphanumeric characters, dots, hyphens, and underscores
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::new("id_empty"));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(ValidationError::new("id_too_long"));
    }
    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == '_')
    {
        return Err(ValidationError::new("id_invalid_chars"));
    }
    Ok(())
}

/// Validate a member name field
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name_empty"));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::new("name_too_long"));
    }
    Ok(())
}

/// Validate note text
pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::new("text_empty"));
    }
    if text.len() > MAX_TEXT_LENGTH {
        return Err(ValidationError::new("text_too_long"));
    }
    Ok(())
}

/// Validate a caller-supplied timestamp
///
/// Timestamps are stored as opaque strings; only presence and length are
/// checked here, format is not enforced.
pub fn validate_timestamp(timestamp: &str) -> Result<(), ValidationError> {
    if timestamp.trim().is_empty() {
        return Err(ValidationError::new("timestamp_empty"));
    }
    if timestamp.len() > MAX_TIMESTAMP_LENGTH {
        return Err(ValidationError::new("timestamp_too_long"));
    }
    Ok(())
}
