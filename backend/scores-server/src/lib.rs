pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    error::handle_middleware_error,
    extractors::json_body::JsonBody,
    users::{
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_request::UserRequest,
        users::{create_user, delete_user, get_user, list_users, update_user},
    },
};
pub use app_state::AppState;

pub use crate::routes::{apply_middleware, build_router};
