//! Member directory API integration tests
//!
//! Tests for the /members endpoints

use serde_json::{Value, json};

use jotter_api::Member;

use crate::common::{TestClient, TestServer, server::find_available_port, unique_member_id};

/// Test the full create/list/update/delete cycle
#[tokio::test]
async fn test_member_lifecycle() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let client = TestClient::new(server.base_url());
    let member_id = unique_member_id("member");

    // Create
    let created: Member = client
        .post_json(
            "/members",
            &json!({"id": member_id, "firstName": "Ada", "lastName": "Lovelace"}),
        )
        .await
        .expect("Create member failed");
    assert_eq!(created.id, member_id);
    assert_eq!(created.first_name, "Ada");
    assert_eq!(created.last_name, "Lovelace");

    // List
    let members: Vec<Member> = client.get("/members").await.expect("List members failed");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, member_id);

    // Update replaces both name fields
    let updated: Member = client
        .put_json(
            &format!("/members/{}", member_id),
            &json!({"firstName": "Ada", "lastName": "King"}),
        )
        .await
        .expect("Update member failed");
    assert_eq!(updated.last_name, "King");

    // Delete returns an empty JSON object
    let deleted: Value = client
        .delete(&format!("/members/{}", member_id))
        .await
        .expect("Delete member failed");
    assert_eq!(deleted, json!({}));

    let members: Vec<Member> = client.get("/members").await.expect("List members failed");
    assert!(members.is_empty());

    server.stop().await;
}

/// Member records serialize with camelCase field names
#[tokio::test]
async fn test_member_json_shape() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let client = TestClient::new(server.base_url());
    let member_id = unique_member_id("member");

    let created: Value = client
        .post_json(
            "/members",
            &json!({"id": member_id, "firstName": "Grace", "lastName": "Hopper"}),
        )
        .await
        .expect("Create member failed");

    assert_eq!(created["firstName"], "Grace");
    assert_eq!(created["lastName"], "Hopper");
    assert!(created.get("first_name").is_none());

    server.stop().await;
}

/// Blank fields are rejected with a structured 400 before any store write
#[tokio::test]
async fn test_create_member_rejects_blank_fields() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let client = TestClient::new(server.base_url());

    let response = client
        .raw_post_json(
            "/members",
            &json!({"id": unique_member_id("member"), "firstName": "   ", "lastName": "Hopper"}),
        )
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Error body is not JSON");
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["path"], "/api/members");
    assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));

    // Nothing was written
    let members: Vec<Member> = client.get("/members").await.expect("List members failed");
    assert!(members.is_empty());

    server.stop().await;
}

/// Updating an unknown member fails with 404
#[tokio::test]
async fn test_update_missing_member_returns_not_found() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let client = TestClient::new(server.base_url());

    let response = client
        .raw_put_json(
            "/members/ghost",
            &json!({"firstName": "No", "lastName": "Body"}),
        )
        .await;
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Error body is not JSON");
    assert_eq!(body["status"], 404);
    assert_eq!(body["path"], "/api/members/ghost");

    server.stop().await;
}

/// Deleting an unknown member surfaces as NotFound through the typed client
#[tokio::test]
async fn test_delete_missing_member_returns_not_found() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let client = TestClient::new(server.base_url());

    let result: Result<Value, _> = client.delete("/members/ghost").await;

    match result {
        Err(e) => assert!(e.is_not_found(), "expected NotFound, got: {}", e),
        Ok(body) => panic!("expected NotFound, got body: {}", body),
    }

    server.stop().await;
}

/// An unreachable document store maps to 502 Bad Gateway
#[tokio::test]
async fn test_store_outage_returns_bad_gateway() {
    // Nothing listens on this port, so every store call fails at connect
    let dead_port = find_available_port().expect("No port available");
    let server = TestServer::start_with_store_url(&format!("http://127.0.0.1:{}", dead_port))
        .await
        .expect("Failed to start test server");
    let client = TestClient::new(server.base_url());

    let response = client.raw_get("/members").await;
    assert_eq!(response.status(), 502);

    let body: Value = response.json().await.expect("Error body is not JSON");
    assert_eq!(body["status"], 502);
    assert_eq!(body["error"], "Bad Gateway");
    assert_eq!(body["path"], "/api/members");

    server.stop().await;
}
