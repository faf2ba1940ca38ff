//! REST API error types
//!
//! Each variant carries the HTTP status code and JSON body shape the
//! endpoints answer with. Read-endpoint misses use a `message` body;
//! everything else uses an `error` body.

use acct_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// `{"error": ...}` body used by validation, conflict, credential,
/// write-miss, and server failures
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"message": ...}` body used by read-endpoint misses
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Read lookup miss (404, `message` body)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Write lookup miss (404, `error` body)
    #[error("No such user: {message} {location}")]
    NoSuchUser {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or malformed input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Email already registered (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Credential mismatch (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        match self {
            ApiError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, Json(MessageBody { message })).into_response()
            }
            ApiError::NoSuchUser { message, .. } => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { error: message })).into_response()
            }
            ApiError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
            }
            ApiError::Conflict { message, .. } => {
                (StatusCode::CONFLICT, Json(ErrorBody { error: message })).into_response()
            }
            ApiError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, Json(ErrorBody { error: message })).into_response()
            }
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: message }),
            )
                .into_response(),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid user id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert store errors to API errors. The message reaches the client
/// verbatim.
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Backend { message, .. } => ApiError::Internal {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
