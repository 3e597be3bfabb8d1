//! In-memory document store implementation
//!
//! Self-contained store used in development and integration tests. Records
//! live in process memory and keep insertion order, matching the listing
//! behavior of the external JSON document store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::warn;

use jotter_api::{Member, Note};

use super::DocumentStore;
use crate::error::JotterError;

/// Extension trait for RwLock that handles poison recovery gracefully
trait RwLockExt<T> {
    /// Acquire a read lock, recovering from poison if necessary
    fn read_recover(&self, name: &str) -> RwLockReadGuard<'_, T>;
    /// Acquire a write lock, recovering from poison if necessary
    fn write_recover(&self, name: &str) -> RwLockWriteGuard<'_, T>;
}

impl<T> RwLockExt<T> for RwLock<T> {
    fn read_recover(&self, name: &str) -> RwLockReadGuard<'_, T> {
        self.read().unwrap_or_else(|poisoned| {
            warn!(
                lock_name = name,
                "Recovering from poisoned read lock - a thread panicked while holding this lock"
            );
            poisoned.into_inner()
        })
    }

    fn write_recover(&self, name: &str) -> RwLockWriteGuard<'_, T> {
        self.write().unwrap_or_else(|poisoned| {
            warn!(
                lock_name = name,
                "Recovering from poisoned write lock - a thread panicked while holding this lock"
            );
            poisoned.into_inner()
        })
    }
}

/// Document store keeping all records in process memory
#[derive(Default)]
pub struct MemoryDocumentStore {
    members: RwLock<Vec<Member>>,
    notes: RwLock<Vec<Note>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list_members(&self) -> Result<Vec<Member>, JotterError> {
        Ok(self.members.read_recover("members").clone())
    }

    async fn create_member(&self, member: &Member) -> Result<Member, JotterError> {
        let mut members = self.members.write_recover("members");

        if members.iter().any(|m| m.id == member.id) {
            return Err(JotterError::Conflict(format!(
                "member already exists: {}",
                member.id
            )));
        }

        members.push(member.clone());

        Ok(member.clone())
    }

    async fn update_member(&self, member: &Member) -> Result<Member, JotterError> {
        let mut members = self.members.write_recover("members");

        match members.iter_mut().find(|m| m.id == member.id) {
            Some(existing) => {
                *existing = member.clone();
                Ok(member.clone())
            }
            None => Err(JotterError::NotFound(format!(
                "member not found: {}",
                member.id
            ))),
        }
    }

    async fn delete_member(&self, id: &str) -> Result<(), JotterError> {
        let mut members = self.members.write_recover("members");

        match members.iter().position(|m| m.id == id) {
            Some(index) => {
                members.remove(index);
                Ok(())
            }
            None => Err(JotterError::NotFound(format!("member not found: {}", id))),
        }
    }

    async fn list_notes(&self) -> Result<Vec<Note>, JotterError> {
        Ok(self.notes.read_recover("notes").clone())
    }

    async fn list_notes_by_member(&self, member_id: &str) -> Result<Vec<Note>, JotterError> {
        Ok(self
            .notes
            .read_recover("notes")
            .iter()
            .filter(|note| note.member == member_id)
            .cloned()
            .collect())
    }

    async fn get_note(&self, id: &str) -> Result<Note, JotterError> {
        self.notes
            .read_recover("notes")
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or_else(|| JotterError::NotFound(format!("note not found: {}", id)))
    }

    async fn create_note(&self, note: &Note) -> Result<Note, JotterError> {
        let mut notes = self.notes.write_recover("notes");

        if notes.iter().any(|n| n.id == note.id) {
            return Err(JotterError::Conflict(format!(
                "note already exists: {}",
                note.id
            )));
        }

        notes.push(note.clone());

        Ok(note.clone())
    }

    async fn replace_note(&self, note: &Note) -> Result<Note, JotterError> {
        let mut notes = self.notes.write_recover("notes");

        match notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => {
                *existing = note.clone();
                Ok(note.clone())
            }
            None => Err(JotterError::NotFound(format!("note not found: {}", note.id))),
        }
    }
}
