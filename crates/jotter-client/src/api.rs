//! Typed document store operations
//!
//! One method per store endpoint. The store is json-server shaped: plain
//! collections under `/members` and `/notes`, record bodies echoed back on
//! writes.

use serde::Serialize;

use jotter_api::model::{Member, Note};

use crate::error::Result;
use crate::http::{StoreClientConfig, StoreHttpClient};

/// Typed client for the member and note collections
pub struct StoreApiClient {
    http_client: StoreHttpClient,
}

impl StoreApiClient {
    pub fn new(http_client: StoreHttpClient) -> Self {
        Self { http_client }
    }

    /// Build a client straight from config
    pub fn from_config(config: StoreClientConfig) -> anyhow::Result<Self> {
        Ok(Self::new(StoreHttpClient::new(config)?))
    }

    // ============== Member collection ==============

    pub async fn list_members(&self) -> Result<Vec<Member>> {
        self.http_client.get("/members").await
    }

    pub async fn create_member(&self, member: &Member) -> Result<Member> {
        self.http_client.post_json("/members", member).await
    }

    pub async fn update_member(&self, member: &Member) -> Result<Member> {
        self.http_client
            .put_json(&format!("/members/{}", member.id), member)
            .await
    }

    pub async fn delete_member(&self, id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .http_client
            .delete(&format!("/members/{}", id))
            .await?;
        Ok(())
    }

    // ============== Note collection ==============

    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        self.http_client.get("/notes").await
    }

    pub async fn list_notes_by_member(&self, member_id: &str) -> Result<Vec<Note>> {
        #[derive(Serialize)]
        struct Query<'a> {
            member: &'a str,
        }

        self.http_client
            .get_with_query("/notes", &Query { member: member_id })
            .await
    }

    pub async fn get_note(&self, id: &str) -> Result<Note> {
        self.http_client.get(&format!("/notes/{}", id)).await
    }

    pub async fn create_note(&self, note: &Note) -> Result<Note> {
        self.http_client.post_json("/notes", note).await
    }

    pub async fn replace_note(&self, note: &Note) -> Result<Note> {
        self.http_client
            .put_json(&format!("/notes/{}", note.id), note)
            .await
    }
}
