pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    users::{
        delete_response::DeleteResponse,
        login_request::LoginRequest,
        register_request::RegisterRequest,
        register_response::RegisterResponse,
        update_user_request::UpdateUserRequest,
        update_user_response::UpdateUserResponse,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{delete_user, get_user, list_users, login, register, update_user},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
