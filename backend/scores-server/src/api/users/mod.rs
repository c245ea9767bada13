pub mod user_dto;
pub mod user_list_response;
pub mod user_request;
pub mod users;
