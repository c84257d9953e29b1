//! Error types for the Libris server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Main application error type
///
/// Every variant except `Internal` is an expected, recoverable condition
/// surfaced to the caller as a structured failure response. Checks precede
/// mutation, so a failed operation leaves no partial state behind.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Book {0} not found")]
    BookNotFound(Uuid),

    #[error("No copies available for rent")]
    NoCopiesAvailable,

    #[error("You have already rented this book")]
    AlreadyRented,

    #[error("Rental {0} not found")]
    RentalNotFound(Uuid),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Book has already been returned")]
    AlreadyReturned,

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BookNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::NoCopiesAvailable => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::AlreadyRented => (StatusCode::CONFLICT, self.to_string()),
            AppError::RentalNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::AccessDenied(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::AlreadyReturned => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Authentication(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            message,
        });

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation failed: {}", errors))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
