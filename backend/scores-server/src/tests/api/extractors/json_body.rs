use crate::{ApiError, JsonBody, UserRequest};

use axum::{
    body::Body,
    extract::FromRequest,
    http::{Request, StatusCode},
};

async fn extract(body: &'static str, content_type: Option<&str>) -> Result<UserRequest, ApiError> {
    let mut builder = Request::builder().method("POST").uri("/user");
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body)).unwrap();

    JsonBody::<UserRequest>::from_request(request, &())
        .await
        .map(|JsonBody(req)| req)
}

#[tokio::test]
async fn test_valid_body_is_parsed() {
    let req = extract(r#"{"name":"John","high_score":1337}"#, Some("application/json"))
        .await
        .unwrap();

    assert_eq!(req.name, "John");
    assert_eq!(req.high_score, 1337);
}

#[tokio::test]
async fn test_missing_content_type_is_still_parsed() {
    let req = extract(r#"{"name":"John","high_score":1}"#, None)
        .await
        .unwrap();

    assert_eq!(req.name, "John");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let err = extract(r#"{"name":"John","#, Some("application/json"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::BadRequest { .. }));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_body_is_bad_request() {
    let err = extract("", None).await.unwrap_err();

    assert!(matches!(err, ApiError::BadRequest { .. }));
}

#[tokio::test]
async fn test_missing_field_is_validation_error() {
    let err = extract(r#"{"name":"John"}"#, None).await.unwrap_err();

    assert!(matches!(err, ApiError::Validation { .. }));
    assert!(err.to_string().contains("high_score"));
}

#[tokio::test]
async fn test_negative_score_is_validation_error() {
    let err = extract(r#"{"name":"John","high_score":-5}"#, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation { .. }));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_score_above_u32_is_validation_error() {
    let err = extract(r#"{"name":"John","high_score":4294967296}"#, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation { .. }));
}
