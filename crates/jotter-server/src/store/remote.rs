//! Remote document store implementation
//!
//! Provides HTTP-based access to member and note records in the external
//! JSON document store. Uses jotter-client for HTTP communication.

use async_trait::async_trait;

use jotter_api::{Member, Note};
use jotter_client::StoreApiClient;

use super::DocumentStore;
use crate::{error::JotterError, model::config::Configuration};

/// Document store backed by the external JSON document store REST API
pub struct RemoteDocumentStore {
    client: StoreApiClient,
}

impl RemoteDocumentStore {
    pub fn new(configuration: &Configuration) -> anyhow::Result<Self> {
        let client = StoreApiClient::from_config(configuration.store_client_config())?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentStore for RemoteDocumentStore {
    async fn list_members(&self) -> Result<Vec<Member>, JotterError> {
        Ok(self.client.list_members().await?)
    }

    async fn create_member(&self, member: &Member) -> Result<Member, JotterError> {
        Ok(self.client.create_member(member).await?)
    }

    async fn update_member(&self, member: &Member) -> Result<Member, JotterError> {
        Ok(self.client.update_member(member).await?)
    }

    async fn delete_member(&self, id: &str) -> Result<(), JotterError> {
        Ok(self.client.delete_member(id).await?)
    }

    async fn list_notes(&self) -> Result<Vec<Note>, JotterError> {
        Ok(self.client.list_notes().await?)
    }

    async fn list_notes_by_member(&self, member_id: &str) -> Result<Vec<Note>, JotterError> {
        Ok(self.client.list_notes_by_member(member_id).await?)
    }

    async fn get_note(&self, id: &str) -> Result<Note, JotterError> {
        Ok(self.client.get_note(id).await?)
    }

    async fn create_note(&self, note: &Note) -> Result<Note, JotterError> {
        Ok(self.client.create_note(note).await?)
    }

    async fn replace_note(&self, note: &Note) -> Result<Note, JotterError> {
        Ok(self.client.replace_note(note).await?)
    }
}
