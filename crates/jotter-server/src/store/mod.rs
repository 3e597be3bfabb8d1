// Document store abstraction layer
// Provides a unified interface over member and note records in both remote and memory modes

pub mod memory;
pub mod remote;

use std::sync::Arc;

use async_trait::async_trait;

use jotter_api::{Member, Note};

use crate::{
    error::JotterError,
    model::config::{Configuration, STORE_MODE_MEMORY, STORE_MODE_REMOTE},
};

/// Document store trait - abstracts record access for member and note operations
#[async_trait]
pub trait DocumentStore: Send + Sync {
    // ============== Member Operations ==============

    /// List all members
    async fn list_members(&self) -> Result<Vec<Member>, JotterError>;

    /// Create a member record
    async fn create_member(&self, member: &Member) -> Result<Member, JotterError>;

    /// Replace an existing member record
    async fn update_member(&self, member: &Member) -> Result<Member, JotterError>;

    /// Delete a member record
    async fn delete_member(&self, id: &str) -> Result<(), JotterError>;

    // ============== Note Operations ==============

    /// List all notes
    async fn list_notes(&self) -> Result<Vec<Note>, JotterError>;

    /// List notes belonging to a member
    async fn list_notes_by_member(&self, member_id: &str) -> Result<Vec<Note>, JotterError>;

    /// Get a note by id
    async fn get_note(&self, id: &str) -> Result<Note, JotterError>;

    /// Create a note record
    async fn create_note(&self, note: &Note) -> Result<Note, JotterError>;

    /// Replace an existing note record
    async fn replace_note(&self, note: &Note) -> Result<Note, JotterError>;
}

/// Create a document store based on configuration
pub fn create_store(configuration: &Configuration) -> anyhow::Result<Arc<dyn DocumentStore>> {
    match configuration.store_mode().as_str() {
        STORE_MODE_REMOTE => {
            // Remote mode: forward records to the external JSON document store
            let store = remote::RemoteDocumentStore::new(configuration)?;
            Ok(Arc::new(store))
        }
        STORE_MODE_MEMORY => {
            // Memory mode: self-contained store for development and tests
            Ok(Arc::new(memory::MemoryDocumentStore::new()))
        }
        other => Err(anyhow::anyhow!("unsupported store mode: {}", other)),
    }
}
