//! Integration tests for admin provisioning and manifest endpoints
mod common;

use crate::common::{create_test_app_state, create_test_user, issue_api_key};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wt_server::build_router;

async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = if let Some(body) = body {
        builder = builder.header("Content-Type", "application/json");
        builder.body(Body::from(body)).unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

#[tokio::test]
async fn test_create_user_returns_api_key() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let (status, json) = send(
        app.clone(),
        "POST",
        "/admin/users",
        Some(String::from(r#"{"username": "alice"}"#)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"]["username"], "alice");
    assert!(json["user"].get("password_hash").is_none());

    // The returned key authenticates against the trigger endpoints
    let api_key = json["api_key"].as_str().unwrap();
    let (status, json) = send(
        app,
        "GET",
        &format!("/api/{}/period", api_key),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ongoing"], false);
}

#[tokio::test]
async fn test_create_user_rejects_empty_username() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let (status, json) = send(
        app,
        "POST",
        "/admin/users",
        Some(String::from(r#"{"username": "   "}"#)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_user_rejects_duplicate_username() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, "alice").await;

    let app = build_router(state.clone());
    let (status, json) = send(
        app,
        "POST",
        "/admin/users",
        Some(String::from(r#"{"username": "alice"}"#)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_api_key_endpoint_is_stable() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state.pool, "alice").await;

    let app = build_router(state.clone());
    let uri = format!("/admin/users/{}/api-key", user.id);

    let (status, first) = send(app.clone(), "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, second) = send(app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(first["api_key"], second["api_key"]);
    assert_eq!(
        first["api_key"].as_str().unwrap(),
        issue_api_key(&state, &user)
    );
}

#[tokio::test]
async fn test_api_key_endpoint_unknown_user() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let (status, json) = send(app, "GET", "/admin/users/9999/api-key", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_notify_with_no_subscriptions() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let (status, json) = send(app, "POST", "/admin/notify", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["notified"], 0);
}

#[tokio::test]
async fn test_manifest_serves_gcm_sender_id() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let (status, json) = send(app, "GET", "/manifest", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["shortname"], "Worktrack");
    assert_eq!(json["name"], "Worktrack");
    assert_eq!(json["gcm_sender_id"], "test-project");
}

#[tokio::test]
async fn test_health_endpoint_reports_healthy() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let (status, json) = send(app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["database"], "operational");
}
