//! User account REST API handlers
//!
//! Each handler validates its input, calls one store operation, and maps
//! the outcome onto the status-code contract.

use crate::{
    ApiError, ApiResult, AppState, DeleteResponse, LoginRequest, RegisterRequest,
    RegisterResponse, UpdateUserRequest, UpdateUserResponse, UserDto, UserListResponse,
    UserResponse,
};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /users
///
/// List all users with a total count
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = state.store.find_all().await?;

    if users.is_empty() {
        return Err(ApiError::NotFound {
            message: "No users at this time".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(UserListResponse {
        total_users: users.len(),
        all_users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /users/{id}
///
/// Get a single user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;

    let user = state
        .store
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// POST /register
///
/// Register a new user. Rejects emails that are already taken.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    // 1. Presence check on all three fields
    let fields = req.into_fields().ok_or_else(|| ApiError::Validation {
        message: "All fields are required".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // 2. Enforce email uniqueness (the store does not re-check)
    if state.store.find_by_email(&fields.email).await?.is_some() {
        return Err(ApiError::Conflict {
            message: "This email has already been registered".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 3. Create the record
    let new_user = state.store.create(fields).await?;

    log::info!("Registered user {}", new_user.id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            new_user: new_user.into(),
        }),
    ))
}

/// POST /login
///
/// Check credentials and return the matching user
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<UserResponse>> {
    let (email, password) = req.into_credentials().ok_or_else(|| ApiError::Validation {
        message: "Please provide all required parameters".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let user = state
        .store
        .compare_password(&email, &password)
        .await?
        .ok_or_else(|| ApiError::Unauthorized {
            message: "Invalid email or password".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /users/{id}
///
/// Replace username, email, and password of an existing user
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UpdateUserResponse>> {
    // 1. Presence check before the id is even parsed; a bad body answers
    //    400 regardless of the path
    let fields = req.into_fields().ok_or_else(|| ApiError::Validation {
        message: "Please provide all required parameters".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // 2. Parse id and replace the record
    let user_id = Uuid::parse_str(&id)?;

    let updated_user =
        state
            .store
            .update(user_id, fields)
            .await?
            .ok_or_else(|| ApiError::NoSuchUser {
                message: format!("No user with id {}", id),
                location: ErrorLocation::from(Location::caller()),
            })?;

    log::info!("Updated user {}", updated_user.id);

    Ok(Json(UpdateUserResponse {
        updated_user: updated_user.into(),
    }))
}

/// DELETE /users/{id}
///
/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let user_id = Uuid::parse_str(&id)?;

    let removed = state.store.remove(user_id).await?;
    if !removed {
        return Err(ApiError::NoSuchUser {
            message: "User does not exist".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted user {}", user_id);

    Ok(Json(DeleteResponse {
        message: "User deleted successfully".to_string(),
    }))
}
