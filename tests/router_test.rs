//! HTTP boundary tests for the contact endpoint.
//!
//! Drives the axum router with `tower::ServiceExt::oneshot` and checks the
//! wire contract: status codes, JSON bodies, and that sends only happen when
//! they should.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use holler::testing::*;
use holler::{contact_router, ContactService, DeliveryConfig, LocalMailer};

// ============================================================================
// Helper Functions
// ============================================================================

fn complete_config() -> DeliveryConfig {
    DeliveryConfig::new()
        .host("smtp.example.com")
        .credentials("mailer", "hunter2")
        .from_address("noreply@example.com")
        .to_address("owner@example.com")
}

fn app_with(config: DeliveryConfig) -> (Router, Arc<LocalMailer>) {
    let mailer = Arc::new(LocalMailer::new());
    let service = Arc::new(ContactService::with_mailer(config, mailer.clone()));
    (contact_router(service), mailer)
}

fn post_json(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane",
        "email": "jane@x.com",
        "subject": "Hi",
        "message": "Hello"
    })
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn valid_submission_returns_ok_and_sends_both_emails() {
    let (app, mailer) = app_with(complete_config());

    let response = app.oneshot(post_json(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body, serde_json::json!({"ok": true}));

    assert_send_count(&mailer, 2);
    assert_sent_to(&mailer, "owner@example.com");
    assert_sent_to(&mailer, "jane@x.com");
}

#[tokio::test]
async fn empty_message_field_returns_400() {
    let (app, mailer) = app_with(complete_config());

    let mut body = valid_body();
    body["message"] = serde_json::json!("");

    let response = app.oneshot(post_json(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(
        body,
        serde_json::json!({"ok": false, "error": "Missing required fields."})
    );
    assert_no_sends(&mailer);
}

#[tokio::test]
async fn absent_field_is_treated_as_missing() {
    let (app, mailer) = app_with(complete_config());

    // No "message" key at all
    let body = serde_json::json!({
        "name": "Jane",
        "email": "jane@x.com",
        "subject": "Hi"
    });

    let response = app.oneshot(post_json(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_no_sends(&mailer);
}

#[tokio::test]
async fn unset_owner_inbox_returns_500_with_generic_message() {
    let mut config = complete_config();
    config.to_address = None;
    let (app, mailer) = app_with(config);

    let response = app.oneshot(post_json(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert_eq!(
        body,
        serde_json::json!({"ok": false, "error": "Server email configuration is incomplete."})
    );
    // The missing variable's name never appears in the response
    assert!(!body.to_string().contains("CONTACT_TO"));
    assert_no_sends(&mailer);
}

#[tokio::test]
async fn transport_rejection_returns_500_with_generic_message() {
    let (app, mailer) = app_with(complete_config());
    mailer.set_failure("535 5.7.8 bad credentials");

    let response = app.oneshot(post_json(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert_eq!(
        body,
        serde_json::json!({"ok": false, "error": "Failed to send message."})
    );
    // Transport detail stays server-side
    assert!(!body.to_string().contains("535"));
}

#[tokio::test]
async fn requests_are_handled_independently() {
    let (app, mailer) = app_with(complete_config());

    // A rejected submission does not poison the next one
    let mut bad = valid_body();
    bad["email"] = serde_json::json!("");
    let response = app.clone().oneshot(post_json(bad)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(post_json(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_send_count(&mailer, 2);
}

#[tokio::test]
async fn unreadable_body_gets_the_endpoint_json_shape() {
    let (app, mailer) = app_with(complete_config());

    let request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    // A body the parser cannot read still answers in the endpoint's own
    // JSON contract, not the framework's plain-text rejection.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(
        body,
        serde_json::json!({ "ok": false, "error": "Failed to send message." })
    );
    assert_no_sends(&mailer);
}
