//! Tests del CRUD de languages.

mod helpers;

use axum::http::StatusCode;
use helpers::authed_client;
use serde_json::json;

#[tokio::test]
async fn create_language_returns_201_with_resource() {
    let client = authed_client().await;

    let response = client
        .post("/api/languages", &json!({"code": "en", "name": "English"}))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "en");
    assert_eq!(body["name"], "English");
    assert!(body["id"].as_i64().is_some());
}

#[tokio::test]
async fn list_languages_returns_created_rows() {
    let client = authed_client().await;

    client
        .post("/api/languages", &json!({"code": "en", "name": "English"}))
        .await;
    client
        .post("/api/languages", &json!({"code": "fr", "name": "French"}))
        .await;

    let response = client.get("/api/languages").await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["en", "fr"]);
}

#[tokio::test]
async fn get_language_returns_single_row() {
    let client = authed_client().await;

    let created: serde_json::Value = client
        .post("/api/languages", &json!({"code": "es", "name": "Spanish"}))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let response = client.get(&format!("/api/languages/{}", id)).await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "es");
}

#[tokio::test]
async fn get_unknown_language_returns_404() {
    let client = authed_client().await;

    let response = client.get("/api/languages/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_language_with_blank_code_returns_422() {
    let client = authed_client().await;

    let response = client
        .post("/api/languages", &json!({"code": "", "name": "English"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert!(body["errors"]["code"].is_array());
}

#[tokio::test]
async fn create_language_with_duplicate_code_returns_422() {
    let client = authed_client().await;

    client
        .post("/api/languages", &json!({"code": "en", "name": "English"}))
        .await;
    let response = client
        .post("/api/languages", &json!({"code": "en", "name": "Anglais"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_language_changes_fields() {
    let client = authed_client().await;

    let created: serde_json::Value = client
        .post("/api/languages", &json!({"code": "pt", "name": "Portugese"}))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let response = client
        .put(
            &format!("/api/languages/{}", id),
            &json!({"code": "pt", "name": "Portuguese"}),
        )
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Portuguese");
}

#[tokio::test]
async fn update_language_keeps_own_code_without_conflict() {
    let client = authed_client().await;

    let created: serde_json::Value = client
        .post("/api/languages", &json!({"code": "de", "name": "Deutsch"}))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    // Same code, new name; the uniqueness check must skip the row itself
    let response = client
        .put(
            &format!("/api/languages/{}", id),
            &json!({"code": "de", "name": "German"}),
        )
        .await;

    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn update_unknown_language_returns_404() {
    let client = authed_client().await;

    let response = client
        .put("/api/languages/999", &json!({"code": "xx", "name": "X"}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_language_returns_204_and_removes_row() {
    let client = authed_client().await;

    let created: serde_json::Value = client
        .post("/api/languages", &json!({"code": "it", "name": "Italian"}))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let response = client.delete(&format!("/api/languages/{}", id)).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = client.get(&format!("/api/languages/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_language_returns_404() {
    let client = authed_client().await;

    let response = client.delete("/api/languages/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
