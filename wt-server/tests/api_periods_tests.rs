//! Integration tests for the period trigger endpoints
mod common;

use crate::common::{create_test_app_state, create_test_user, issue_api_key};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wt_db::PeriodRepository;
use wt_server::build_router;

async fn get_json(
    app: axum::Router,
    method: &str,
    uri: String,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

#[tokio::test]
async fn test_start_period_creates_period() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state.pool, "alice").await;
    let api_key = issue_api_key(&state, &user);

    let app = build_router(state.clone());
    let (status, json) = get_json(app, "GET", format!("/api/{}/period/start", api_key)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["period"]["id"].is_i64());
    assert_eq!(json["period"]["ended_at"], serde_json::Value::Null);

    let ongoing = PeriodRepository::new(state.pool.clone())
        .find_ongoing(user.id)
        .await
        .unwrap();
    assert_eq!(ongoing.len(), 1);
}

#[tokio::test]
async fn test_start_period_ends_previous_period() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state.pool, "alice").await;
    let api_key = issue_api_key(&state, &user);

    let app = build_router(state.clone());
    let (status, first) = get_json(
        app.clone(),
        "GET",
        format!("/api/{}/period/start", api_key),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, second) = get_json(app, "POST", format!("/api/{}/period/start", api_key)).await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(first["period"]["id"], second["period"]["id"]);

    // Only the new period is still running
    let repository = PeriodRepository::new(state.pool.clone());
    let ongoing = repository.find_ongoing(user.id).await.unwrap();
    assert_eq!(ongoing.len(), 1);
    assert_eq!(
        serde_json::Value::from(ongoing[0].id),
        second["period"]["id"]
    );

    let first_id = first["period"]["id"].as_i64().unwrap();
    let first_period = repository.find_by_id(first_id).await.unwrap().unwrap();
    assert!(first_period.ended_at.is_some());
}

#[tokio::test]
async fn test_end_periods_closes_ongoing() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state.pool, "alice").await;
    let api_key = issue_api_key(&state, &user);

    let app = build_router(state.clone());
    let (status, _) = get_json(
        app.clone(),
        "GET",
        format!("/api/{}/period/start", api_key),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = get_json(app, "GET", format!("/api/{}/period/end", api_key)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ended"], 1);

    let ongoing = PeriodRepository::new(state.pool.clone())
        .find_ongoing(user.id)
        .await
        .unwrap();
    assert!(ongoing.is_empty());
}

#[tokio::test]
async fn test_end_periods_with_nothing_ongoing() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state.pool, "alice").await;
    let api_key = issue_api_key(&state, &user);

    let app = build_router(state.clone());
    let (status, json) = get_json(app, "GET", format!("/api/{}/period/end", api_key)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ended"], 0);
}

#[tokio::test]
async fn test_period_status_reflects_ongoing_period() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state.pool, "alice").await;
    let api_key = issue_api_key(&state, &user);

    let app = build_router(state.clone());

    let (status, json) = get_json(app.clone(), "GET", format!("/api/{}/period", api_key)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ongoing"], false);
    assert!(json.get("period").is_none() || json["period"].is_null());

    let (status, started) = get_json(
        app.clone(),
        "GET",
        format!("/api/{}/period/start", api_key),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = get_json(app, "GET", format!("/api/{}/period", api_key)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ongoing"], true);
    assert_eq!(json["period"]["id"], started["period"]["id"]);
}

#[tokio::test]
async fn test_list_periods_newest_first() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state.pool, "alice").await;
    let api_key = issue_api_key(&state, &user);

    let app = build_router(state.clone());

    let (status, first) = get_json(
        app.clone(),
        "GET",
        format!("/api/{}/period/start", api_key),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, second) = get_json(
        app.clone(),
        "GET",
        format!("/api/{}/period/start", api_key),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = get_json(app, "GET", format!("/api/{}/periods", api_key)).await;
    assert_eq!(status, StatusCode::OK);

    let periods = json["periods"].as_array().unwrap();
    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0]["id"], second["period"]["id"]);
    assert_eq!(periods[1]["id"], first["period"]["id"]);
}

#[tokio::test]
async fn test_periods_are_scoped_per_user() {
    let state = create_test_app_state().await;
    let alice = create_test_user(&state.pool, "alice").await;
    let bob = create_test_user(&state.pool, "bob").await;
    let alice_key = issue_api_key(&state, &alice);
    let bob_key = issue_api_key(&state, &bob);

    let app = build_router(state.clone());

    let (status, _) = get_json(
        app.clone(),
        "GET",
        format!("/api/{}/period/start", alice_key),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = get_json(app, "GET", format!("/api/{}/period", bob_key)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ongoing"], false);
}
