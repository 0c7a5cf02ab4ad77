//! Tests de autenticacion.

mod helpers;

use axum::http::StatusCode;
use helpers::{authed_client, client};
use serde_json::json;

// === Login ===

#[tokio::test]
async fn login_with_valid_credentials_returns_token() {
    let response = client()
        .post(
            "/api/login",
            &json!({"email": helpers::client::ADMIN_EMAIL, "password": helpers::client::ADMIN_PASSWORD}),
        )
        .await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn login_with_wrong_password_returns_401() {
    let response = client()
        .post(
            "/api/login",
            &json!({"email": helpers::client::ADMIN_EMAIL, "password": "nope"}),
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_with_unknown_email_returns_401() {
    let response = client()
        .post(
            "/api/login",
            &json!({"email": "ghost@example.com", "password": "whatever"}),
        )
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn repeated_logins_issue_distinct_tokens() {
    let first = client().login().await;
    let second = first.fresh().login().await;

    assert_ne!(first.token(), second.token());
}

// === Protected routes ===

#[tokio::test]
async fn protected_route_without_token_returns_401() {
    let response = client().get("/api/languages").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Unauthenticated");
}

#[tokio::test]
async fn protected_route_with_garbage_token_returns_401() {
    let response = client()
        .with_token("not-a-real-token")
        .get("/api/languages")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_with_valid_token_succeeds() {
    let client = authed_client().await;

    let response = client.get("/api/languages").await;

    response.assert_status(StatusCode::OK);
}

// === Logout ===

#[tokio::test]
async fn logout_revokes_the_token() {
    let client = authed_client().await;

    let response = client.post_empty("/api/logout").await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Logged out");

    // The same token no longer works
    let response = client.get("/api/languages").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_token_returns_401() {
    let response = client().post_empty("/api/logout").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
