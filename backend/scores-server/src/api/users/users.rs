//! User REST API handlers

use crate::{ApiResult, AppState, JsonBody, UserDto, UserListResponse, UserRequest};

use scores_core::UserFields;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use log::info;

/// GET /users
///
/// All active users, oldest first. No users is an empty list, not an error.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = state.users.find_all().await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// POST /user
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UserRequest>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let fields = validated_fields(&state, req)?;
    let user = state.users.create(&fields).await?;

    info!("Created user {}", user.id);

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    let user = state.users.find_by_id(&id).await?;

    Ok(Json(user.into()))
}

/// PUT /user/{id}
///
/// Replaces name and high score. Deleted or unknown ids are a 404.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UserRequest>,
) -> ApiResult<Json<UserDto>> {
    let fields = validated_fields(&state, req)?;
    let user = state.users.update(&id, &fields).await?;

    info!("Updated user {}", user.id);

    Ok(Json(user.into()))
}

/// DELETE /user/{id}
///
/// 200 with an empty body, whether or not the id matched an active user.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.users.delete(&id).await?;

    info!("Deleted user {}", id);

    Ok(StatusCode::OK)
}

fn validated_fields(state: &AppState, req: UserRequest) -> ApiResult<UserFields> {
    let fields = UserFields::from(req);
    fields.validate(state.validation.max_name_length)?;
    Ok(fields)
}
