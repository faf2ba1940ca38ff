pub mod delete_response;
pub mod login_request;
pub mod register_request;
pub mod register_response;
pub mod update_user_request;
pub mod update_user_response;
pub mod user_dto;
pub mod user_list_response;
pub mod user_response;
pub mod users;
