use crate::{ApiError, handle_middleware_error};

use scores_core::{CoreError, UserFields};
use scores_db::DbError;

use std::panic::Location;

use axum::{BoxError, http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User abc not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User abc not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("name is required", Some("name".into()));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let (status, json) = body_json(ApiError::bad_request("Malformed JSON body")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = body_json(ApiError::internal("Database operation failed")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[test]
fn test_db_not_found_maps_to_not_found() {
    let error = ApiError::from(DbError::not_found("User", "abc"));

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
    assert!(error.to_string().contains("User abc not found"));
}

#[tokio::test]
async fn test_db_failure_maps_to_internal_without_details() {
    let error = ApiError::from(DbError::invalid_data("users.high_score out of range"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[test]
fn test_core_validation_maps_to_validation_with_field() {
    let core_error: CoreError = UserFields::new("  ", 10).validate(100).unwrap_err();

    let error = ApiError::from(core_error);

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    match error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("name")),
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_elapsed_timeout_maps_to_internal() {
    let err: BoxError = Box::new(tower::timeout::error::Elapsed::new());

    let (status, json) = body_json(handle_middleware_error(err).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Request timed out");
}

#[tokio::test]
async fn test_other_middleware_error_maps_to_internal() {
    let err: BoxError = "boom".into();

    let error = handle_middleware_error(err).await;

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error.to_string().contains("boom"));
}
