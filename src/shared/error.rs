//! Error handling module
//!
//! This module provides centralized error handling for the application.

use crate::domain::validation::ValidationErrors;
use serde_json::{json, Value};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid {model}: {errors}")]
    InvalidModel {
        model: &'static str,
        errors: ValidationErrors,
    },

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("Request too large: body exceeds limit of {limit} bytes")]
    RequestTooLarge { limit: usize },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Response body for this error.
    ///
    /// Rejected models report every field error; other failures carry a code and message.
    pub fn to_error_payload(&self) -> Value {
        match self {
            AppError::InvalidModel { errors, .. } => json!({ "errors": errors }),
            AppError::Config(_) | AppError::Internal(_) => json!({
                "error": {
                    "code": self.http_status_code().as_u16(),
                    "message": "Internal error"
                }
            }),
            _ => json!({
                "error": {
                    "code": self.http_status_code().as_u16(),
                    "message": self.to_string()
                }
            }),
        }
    }

    /// Get HTTP status code for this error
    pub fn http_status_code(&self) -> warp::http::StatusCode {
        match self {
            AppError::InvalidModel { .. } => warp::http::StatusCode::BAD_REQUEST,
            AppError::Validation(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::Json(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::RequestTooLarge { .. } => warp::http::StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound(_) => warp::http::StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => warp::http::StatusCode::METHOD_NOT_ALLOWED,
            AppError::Config(_) | AppError::Internal(_) => {
                warp::http::StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

// Implement warp::reject::Reject for AppError
impl warp::reject::Reject for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
