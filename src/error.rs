//! Error types for the activities service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Rejections raised by the activity registry.
///
/// Display strings are the exact `detail` texts returned to HTTP callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryErrorKind {
    /// Unknown activity name
    NotFound,
    /// Signup or unregister that would not change the roster
    Conflict,
}

impl RegistryError {
    pub fn kind(&self) -> RegistryErrorKind {
        match self {
            RegistryError::ActivityNotFound { .. } => RegistryErrorKind::NotFound,
            RegistryError::AlreadySignedUp { .. } | RegistryError::NotRegistered { .. } => {
                RegistryErrorKind::Conflict
            }
        }
    }
}

/// API-specific errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Request conflicts with the current roster
    #[error("{0}")]
    Conflict(String),

    /// Malformed or missing request parameters
    #[error("{0}")]
    Validation(String),
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err.kind() {
            RegistryErrorKind::NotFound => ApiError::NotFound(err.to_string()),
            RegistryErrorKind::Conflict => ApiError::Conflict(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            // Roster conflicts are client input errors and surface as 400.
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Process-level errors raised while starting the server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for handler operations
pub type ApiResult<T> = Result<T, ApiError>;
