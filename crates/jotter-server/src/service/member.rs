//! Member service layer
//!
//! Validates member input and forwards record operations to the document
//! store. Validation always runs before any store call.

use jotter_api::{Member, validate_id, validate_name};

use crate::{error::JotterError, store::DocumentStore};

/// Find all members
pub async fn find_all(store: &dyn DocumentStore) -> Result<Vec<Member>, JotterError> {
    store.list_members().await
}

/// Create a member record
pub async fn create(store: &dyn DocumentStore, member: Member) -> Result<Member, JotterError> {
    validate_member(&member)?;

    store.create_member(&member).await
}

/// Replace the name fields of an existing member
pub async fn update(store: &dyn DocumentStore, member: Member) -> Result<Member, JotterError> {
    validate_member(&member)?;

    store.update_member(&member).await
}

/// Delete a member record. Notes referencing the member are left in place.
pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<(), JotterError> {
    validate_id(id)?;

    store.delete_member(id).await
}

fn validate_member(member: &Member) -> Result<(), JotterError> {
    validate_id(&member.id)?;
    validate_name(&member.first_name)?;
    validate_name(&member.last_name)?;

    Ok(())
}
