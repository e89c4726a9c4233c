use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::MessageResponse;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    Conflict(String),

    InvalidCredentials(String),

    InvalidArgument(String),

    /// Store rejected the operation. The caller gets the generic message;
    /// the detail goes to the log only.
    DatabaseError { message: String, detail: String },

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::InvalidCredentials(msg) => write!(f, "Invalid credentials: {}", msg),
            ApiError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ApiError::DatabaseError { message, detail } => {
                write!(f, "Database error: {} ({})", message, detail)
            }
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            // The interface pins duplicate-key conflicts to 400, as it does
            // credential and identifier problems.
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InvalidCredentials(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::DatabaseError { message, detail } => {
                tracing::error!("{}: {}", message, detail);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = MessageResponse::new(message);
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        ApiError::Conflict(msg.into())
    }

    pub fn invalid_credentials(msg: impl Into<String>) -> Self {
        ApiError::InvalidCredentials(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ApiError::InvalidArgument(msg.into())
    }

    /// Wrap a store failure: `message` is what the caller sees, `err` is
    /// logged server-side.
    pub fn database(message: &str, err: impl fmt::Display) -> Self {
        ApiError::DatabaseError {
            message: message.to_string(),
            detail: err.to_string(),
        }
    }
}
