//! Integration tests for the store API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p shopfront-server)
//!
//! Run with: cargo test -p shopfront-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use shopfront_integration_tests::{TestUser, base_url};

async fn create_store(user: &TestUser, name: &str) -> Value {
    let resp = user
        .post(
            "/stores",
            &json!({
                "name": name,
                "address": "12 Harbor Street",
                "phone": "555-0101"
            }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("store body")
}

// ============================================================================
// CRUD Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_store_create_get_round_trip() {
    let user = TestUser::new();
    let name = format!("Cafe Luna {}", Uuid::new_v4());

    let created = create_store(&user, &name).await;
    assert_eq!(created["name"], json!(name));
    assert_eq!(created["address"], json!("12 Harbor Street"));
    assert_eq!(created["owner"], json!(user.id.as_i32()));

    let resp = user.get(&format!("/stores/{}", created["id"])).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await.expect("store body");
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_store_list_is_owner_scoped() {
    let user = TestUser::new();
    let other = TestUser::new();

    create_store(&user, "Mine A").await;
    create_store(&user, "Mine B").await;
    create_store(&other, "Theirs").await;

    let resp = user.get("/stores").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let stores: Vec<Value> = resp.json().await.expect("store list");

    assert_eq!(stores.len(), 2);
    assert!(
        stores
            .iter()
            .all(|s| s["owner"] == json!(user.id.as_i32()))
    );
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_store_create_requires_name() {
    let user = TestUser::new();

    let resp = user.post("/stores", &json!({ "name": "   " })).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("error body");
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_store_update_empty_string_keeps_old_value() {
    let user = TestUser::new();
    let created = create_store(&user, "Cafe Luna").await;

    // Empty name must not clear the stored name; address changes
    let resp = user
        .put(
            &format!("/stores/{}", created["id"]),
            &json!({ "name": "", "address": "99 New Road" }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.expect("store body");

    assert_eq!(updated["name"], json!("Cafe Luna"));
    assert_eq!(updated["address"], json!("99 New Road"));
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_store_delete_then_gone() {
    let user = TestUser::new();
    let created = create_store(&user, "Short Lived").await;
    let path = format!("/stores/{}", created["id"]);

    let resp = user.delete(&path).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("delete body");
    assert_eq!(body["message"], json!("Store removed"));

    // Second delete and subsequent get both report not found
    let resp = user.delete(&path).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = user.get(&path).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("error body");
    assert_eq!(body["message"], json!("Store not found"));
}

// ============================================================================
// Ownership Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_foreign_store_is_indistinguishable_from_missing() {
    let owner = TestUser::new();
    let intruder = TestUser::new();
    let created = create_store(&owner, "Private").await;
    let path = format!("/stores/{}", created["id"]);

    let resp = intruder.get(&path).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("error body");
    assert_eq!(body["message"], json!("Store not found"));

    let resp = intruder.put(&path, &json!({ "name": "Hijacked" })).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = intruder.delete(&path).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // The owner still sees the untouched store
    let resp = owner.get(&path).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await.expect("store body");
    assert_eq!(fetched["name"], json!("Private"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_missing_identity_is_unauthorized() {
    let resp = reqwest::Client::new()
        .get(format!("{}/stores", base_url()))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("error body");
    assert_eq!(body["message"], json!("Authentication required"));
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_health_needs_no_identity() {
    let resp = reqwest::Client::new()
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}
