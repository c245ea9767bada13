#![allow(dead_code)]

//! Test infrastructure for scores-server API tests

use scores_config::{HandlerConfig, ValidationConfig};
use scores_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = scores_db::create_memory_pool()
        .await
        .expect("Failed to create test database");

    scores_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState::new(
        create_test_pool().await,
        ValidationConfig::default(),
        HandlerConfig::default(),
    )
}

pub async fn create_test_app() -> Router {
    build_router(create_test_app_state().await)
}

/// Send one request through a clone of the router.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response<Body> {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json.to_owned())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POST /user and return the created record.
pub async fn create_user(app: &Router, name: &str, high_score: u32) -> serde_json::Value {
    let body = serde_json::json!({ "name": name, "high_score": high_score }).to_string();
    let response = send(app, "POST", "/user", Some(&body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
