//! Note service layer
//!
//! Carries the note versioning algorithm: every successful text update
//! appends the pre-edit state to the note's version history before the
//! record is replaced in the store.

use chrono::{SecondsFormat, Utc};

use jotter_api::{Note, NoteVersion, validate_id, validate_text, validate_timestamp};

use crate::{error::JotterError, store::DocumentStore};

/// Find all notes across the directory
pub async fn find_all(store: &dyn DocumentStore) -> Result<Vec<Note>, JotterError> {
    store.list_notes().await
}

/// Find the notes belonging to one member
pub async fn find_by_member(
    store: &dyn DocumentStore,
    member_id: &str,
) -> Result<Vec<Note>, JotterError> {
    validate_id(member_id)?;

    store.list_notes_by_member(member_id).await
}

/// Create a note record. New notes never carry version history.
pub async fn create(store: &dyn DocumentStore, note: Note) -> Result<Note, JotterError> {
    validate_id(&note.id)?;
    validate_id(&note.member)?;
    validate_text(&note.text)?;
    validate_timestamp(&note.timestamp)?;

    let record = Note {
        versions: None,
        ..note
    };

    store.create_note(&record).await
}

/// Update a note's text, appending the replaced state to its history.
///
/// `expected_current` is the caller's view of the record and acts purely as
/// an optimistic concurrency check: when it does not match the stored record
/// the update fails with `Conflict` and nothing is written. The history
/// entry is always taken from the freshly fetched record, so a stale or
/// fabricated caller copy never enters `versions`.
pub async fn update(
    store: &dyn DocumentStore,
    id: &str,
    new_text: &str,
    expected_current: &NoteVersion,
) -> Result<Note, JotterError> {
    validate_id(id)?;
    validate_text(new_text)?;

    let existing = store.get_note(id).await?;

    if existing.text != expected_current.text || existing.timestamp != expected_current.timestamp {
        return Err(JotterError::Conflict(format!(
            "note changed since it was read: {}",
            id
        )));
    }

    // Unchanged text is not an edit; leave the record and its history alone
    if existing.text.trim() == new_text.trim() {
        return Ok(existing);
    }

    let mut versions = existing.versions.clone().unwrap_or_default();
    versions.push(NoteVersion {
        text: existing.text.clone(),
        timestamp: existing.timestamp.clone(),
    });

    let updated = Note {
        text: new_text.to_string(),
        timestamp: now_timestamp(),
        versions: Some(versions),
        ..existing
    };

    store.replace_note(&updated).await
}

/// Current time as an ISO-8601 UTC string with millisecond precision
fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
