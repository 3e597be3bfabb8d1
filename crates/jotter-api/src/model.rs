//! Core document models for the member directory and note ledger
//!
//! These structs mirror the JSON documents held by the external store:
//! camelCase field names on the wire, timestamps kept as the ISO-8601
//! strings the store records already contain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person record in the member directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// One superseded state of a note, retained as edit history.
/// Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteVersion {
    pub text: String,
    pub timestamp: String,
}

/// A timestamped text entry owned by one member.
///
/// `versions` holds every prior `{text, timestamp}` pair in the order the
/// edits superseded them, oldest first. The field is absent (not an empty
/// array) until the first edit, matching how the store records look.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub member: String,
    pub text: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<NoteVersion>>,
}

impl Note {
    /// Timestamp of the note's original creation: the first history entry
    /// when edits have happened, otherwise the note's own timestamp.
    pub fn original_timestamp(&self) -> &str {
        match &self.versions {
            Some(versions) if !versions.is_empty() => &versions[0].timestamp,
            _ => &self.timestamp,
        }
    }
}

/// Calendar day (UTC) a note belongs to for display grouping.
/// Unparseable timestamps group under their raw string.
pub fn group_key(note: &Note) -> String {
    match parse_rfc3339(note.original_timestamp()) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => note.original_timestamp().to_string(),
    }
}

/// Sorts notes for display: ascending by original creation time, so an
/// edited note keeps its place within the day it was created. Stable;
/// unparseable timestamps sort first.
pub fn sort_for_display(notes: &mut [Note]) {
    notes.sort_by_key(|note| parse_rfc3339(note.original_timestamp()));
}

fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
