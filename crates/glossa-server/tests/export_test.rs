//! Tests del endpoint de export y su cache.

mod helpers;

use axum::http::StatusCode;
use helpers::{TestClient, authed_client, client};
use serde_json::json;

async fn seed_language(client: &TestClient, code: &str, name: &str) -> i64 {
    let response = client
        .post("/api/languages", &json!({"code": code, "name": name}))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"].as_i64().unwrap()
}

fn seed_tag(client: &TestClient, name: &str) -> i64 {
    client.db().create_tag(name).expect("Failed to seed tag").id
}

async fn seed_translation(client: &TestClient, key: &str, value: &str, language_id: i64) -> i64 {
    let response = client
        .post(
            "/api/translations",
            &json!({"key": key, "value": value, "language_id": language_id}),
        )
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"].as_i64().unwrap()
}

#[tokio::test]
async fn export_requires_auth() {
    let response = client().get("/api/translations/export").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn export_groups_by_language_code() {
    let client = authed_client().await;
    let en = seed_language(&client, "en", "English").await;
    let fr = seed_language(&client, "fr", "French").await;
    seed_translation(&client, "hi", "Hello", en).await;
    seed_translation(&client, "hi", "Salut", fr).await;

    let response = client.get("/api/translations/export").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["en"]["hi"], "Hello");
    assert_eq!(body["fr"]["hi"], "Salut");
}

#[tokio::test]
async fn export_filters_by_language_ids() {
    let client = authed_client().await;
    let en = seed_language(&client, "en", "English").await;
    let fr = seed_language(&client, "fr", "French").await;
    seed_translation(&client, "hi", "Hello", en).await;
    seed_translation(&client, "hi", "Salut", fr).await;

    let response = client
        .get(&format!("/api/translations/export?languages%5B%5D={}", en))
        .await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["en"]["hi"], "Hello");
    assert!(body.get("fr").is_none());
}

#[tokio::test]
async fn export_filters_by_tag_ids() {
    let client = authed_client().await;
    let en = seed_language(&client, "en", "English").await;
    let mobile = seed_tag(&client, "mobile");

    client
        .post(
            "/api/translations",
            &json!({"key": "hi", "value": "Hello", "language_id": en, "tags": [mobile]}),
        )
        .await
        .assert_status(StatusCode::CREATED);
    seed_translation(&client, "bye", "Goodbye", en).await;

    let response = client
        .get(&format!("/api/translations/export?tags%5B%5D={}", mobile))
        .await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["en"]["hi"], "Hello");
    assert!(body["en"].get("bye").is_none());
}

#[tokio::test]
async fn export_of_empty_catalog_is_empty_object() {
    let client = authed_client().await;

    let response = client.get("/api/translations/export").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn export_rejects_non_numeric_ids() {
    let client = authed_client().await;

    let response = client.get("/api/translations/export?languages%5B%5D=abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// === Cache invalidation ===

#[tokio::test]
async fn export_reflects_update_immediately() {
    let client = authed_client().await;
    let en = seed_language(&client, "en", "English").await;
    let id = seed_translation(&client, "hi", "Hello", en).await;

    // Prime the cache
    let body: serde_json::Value = client.get("/api/translations/export").await.json();
    assert_eq!(body["en"]["hi"], "Hello");

    client
        .put(
            &format!("/api/translations/{}", id),
            &json!({"key": "hi", "value": "Hi!", "language_id": en}),
        )
        .await
        .assert_status(StatusCode::OK);

    let body: serde_json::Value = client.get("/api/translations/export").await.json();
    assert_eq!(body["en"]["hi"], "Hi!");
}

#[tokio::test]
async fn export_reflects_create_and_delete_immediately() {
    let client = authed_client().await;
    let en = seed_language(&client, "en", "English").await;
    seed_translation(&client, "hi", "Hello", en).await;

    client.get("/api/translations/export").await;

    let id = seed_translation(&client, "bye", "Goodbye", en).await;
    let body: serde_json::Value = client.get("/api/translations/export").await.json();
    assert_eq!(body["en"]["bye"], "Goodbye");

    client
        .delete(&format!("/api/translations/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    let body: serde_json::Value = client.get("/api/translations/export").await.json();
    assert!(body["en"].get("bye").is_none());
}

#[tokio::test]
async fn mutation_invalidates_every_filter_combination() {
    let client = authed_client().await;
    let en = seed_language(&client, "en", "English").await;
    let fr = seed_language(&client, "fr", "French").await;
    let id = seed_translation(&client, "hi", "Hello", en).await;
    seed_translation(&client, "hi", "Salut", fr).await;

    // Prime two distinct cache entries
    client.get("/api/translations/export").await;
    client
        .get(&format!("/api/translations/export?languages%5B%5D={}", en))
        .await;

    client
        .put(
            &format!("/api/translations/{}", id),
            &json!({"key": "hi", "value": "Hi!", "language_id": en}),
        )
        .await
        .assert_status(StatusCode::OK);

    let unfiltered: serde_json::Value = client.get("/api/translations/export").await.json();
    let filtered: serde_json::Value = client
        .get(&format!("/api/translations/export?languages%5B%5D={}", en))
        .await
        .json();

    assert_eq!(unfiltered["en"]["hi"], "Hi!");
    assert_eq!(filtered["en"]["hi"], "Hi!");
}

#[tokio::test]
async fn language_rename_leaves_cached_export_stale() {
    let client = authed_client().await;
    let en = seed_language(&client, "en", "English").await;
    seed_translation(&client, "hi", "Hello", en).await;

    // Prime the cache
    let body: serde_json::Value = client.get("/api/translations/export").await.json();
    assert_eq!(body["en"]["hi"], "Hello");

    // Language mutations do not touch the export cache, so the old
    // code keeps being served until the entry expires
    client
        .put(
            &format!("/api/languages/{}", en),
            &json!({"code": "gb", "name": "British English"}),
        )
        .await
        .assert_status(StatusCode::OK);

    let body: serde_json::Value = client.get("/api/translations/export").await.json();
    assert_eq!(body["en"]["hi"], "Hello");
    assert!(body.get("gb").is_none());
}

#[tokio::test]
async fn filter_order_hits_the_same_cache_entry() {
    let client = authed_client().await;
    let en = seed_language(&client, "en", "English").await;
    let fr = seed_language(&client, "fr", "French").await;
    seed_translation(&client, "hi", "Hello", en).await;
    seed_translation(&client, "hi", "Salut", fr).await;

    let a: serde_json::Value = client
        .get(&format!(
            "/api/translations/export?languages%5B%5D={}&languages%5B%5D={}",
            en, fr
        ))
        .await
        .json();
    let b: serde_json::Value = client
        .get(&format!(
            "/api/translations/export?languages%5B%5D={}&languages%5B%5D={}",
            fr, en
        ))
        .await
        .json();

    assert_eq!(a, b);
}
