//! Application error handling
//!
//! Converts internal errors to HTTP responses. Client-caused failures carry
//! their message; store and infrastructure failures are logged and surface
//! as a generic server error without leaking internals.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use marketplace_shared::FieldError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("User already exists")]
    DuplicateUser,

    #[error("You have already registered a business.")]
    AlreadyRegistered,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upload failed")]
    Upload(#[source] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
///
/// Flat `{message}` for single failures, `{errors: [{field, message}]}` for
/// itemized validation failures, matching what API clients expect.
#[derive(Serialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorBody {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            errors: None,
        }
    }

    fn itemized(errors: Vec<FieldError>) -> Self {
        Self {
            message: None,
            errors: Some(errors),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, ErrorBody::itemized(errors)),
            ApiError::DuplicateUser => (
                StatusCode::BAD_REQUEST,
                ErrorBody::message("User already exists"),
            ),
            ApiError::AlreadyRegistered => (
                StatusCode::CONFLICT,
                ErrorBody::message("You have already registered a business."),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                ErrorBody::message("Invalid credentials"),
            ),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorBody::message(msg)),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::message(msg)),
            ApiError::Upload(err) => {
                error!("Upload error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("Upload failed"),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("Server error"),
                )
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("Server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
