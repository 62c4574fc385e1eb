//! Integration tests for the HTTP API.
//!
//! Drives the fully wired router (in-memory repositories, Argon2 hashing,
//! JWT tokens) through `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use supper_club::config::AuthConfig;
use supper_club::startup::build_router;

// =============================================================================
// Test Infrastructure
// =============================================================================

const HOST_ID: &str = "7f1c1c9e-3a57-4f3a-9f7e-2d3c4b5a6e70";

fn app() -> Router {
    let auth = AuthConfig {
        jwt_secret: SecretString::new("integration-test-secret-0123456789".to_string()),
        ..Default::default()
    };
    build_router(&auth)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn registration(email: &str) -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "password": "analytical-engine"
    })
}

fn menu_body() -> Value {
    json!({
        "name": "Autumn Tasting",
        "description": "Five courses of seasonal produce",
        "sections": [
            {
                "name": "Starters",
                "description": "Small plates",
                "items": [
                    { "name": "Soup", "description": "Roast squash" },
                    { "name": "Bread", "description": "Sourdough" }
                ]
            }
        ]
    })
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn register_returns_user_and_token() {
    let app = app();

    let (status, body) = post(&app, "/auth/register", registration("ada@example.com")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Ada");
    assert_eq!(body["last_name"], "Lovelace");
    assert_eq!(body["email"], "ada@example.com");
    assert!(body["id"].as_str().is_some());
    assert_eq!(body["token"].as_str().unwrap().split('.').count(), 3);
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_registration_is_conflict() {
    let app = app();
    post(&app, "/auth/register", registration("ada@example.com")).await;

    let (status, body) = post(&app, "/auth/register", registration("ada@example.com")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["errors"][0]["code"], "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn invalid_registration_lists_every_violation() {
    let app = app();

    let (status, body) = post(
        &app,
        "/auth/register",
        json!({ "first_name": "", "last_name": "", "email": "nope", "password": "" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 4);
    assert_eq!(body["errors"][0]["field"], "email");
}

#[tokio::test]
async fn login_after_register_returns_same_user() {
    let app = app();
    let (_, registered) = post(&app, "/auth/register", registration("ada@example.com")).await;

    let (status, body) = post(
        &app,
        "/auth/login",
        json!({ "email": "ada@example.com", "password": "analytical-engine" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], registered["id"]);
    assert!(body["token"].as_str().is_some());
}

#[tokio::test]
async fn login_failures_are_identical() {
    let app = app();
    post(&app, "/auth/register", registration("ada@example.com")).await;

    let wrong_password = post(
        &app,
        "/auth/login",
        json!({ "email": "ada@example.com", "password": "difference-engine" }),
    )
    .await;
    let unknown_email = post(
        &app,
        "/auth/login",
        json!({ "email": "charles@example.com", "password": "analytical-engine" }),
    )
    .await;

    assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password, unknown_email);
}

// =============================================================================
// Menus
// =============================================================================

#[tokio::test]
async fn create_menu_returns_created_menu() {
    let app = app();

    let (status, body) = post(&app, &format!("/hosts/{}/menus", HOST_ID), menu_body()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["host_id"], HOST_ID);
    assert_eq!(body["name"], "Autumn Tasting");
    assert_eq!(body["sections"][0]["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["average_rating"], json!({ "value": null, "count": 0 }));
    assert_eq!(body["dinner_ids"], json!([]));
    assert_eq!(body["menu_review_ids"], json!([]));
}

#[tokio::test]
async fn create_menu_without_sections_is_bad_request() {
    let app = app();
    let mut body = menu_body();
    body["sections"] = json!([]);

    let (status, body) = post(&app, &format!("/hosts/{}/menus", HOST_ID), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "sections");
}

#[tokio::test]
async fn create_menu_with_empty_section_reports_path() {
    let app = app();
    let mut body = menu_body();
    body["sections"][0]["items"] = json!([]);

    let (status, body) = post(&app, &format!("/hosts/{}/menus", HOST_ID), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "sections[0].items");
}

#[tokio::test]
async fn create_menu_with_malformed_host_is_bad_request() {
    let app = app();

    let (status, body) = post(&app, "/hosts/not-a-uuid/menus", menu_body()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["code"], "INVALID_FORMAT");
    assert_eq!(body["errors"][0]["field"], "host_id");
}
