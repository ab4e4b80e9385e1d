//! HTTP responses module
//!
//! This module contains HTTP response formatting and utilities.

use crate::{domain::health::HealthResponse, shared::error::AppError};
use serde::Serialize;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

/// Response formatter for HTTP responses
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Format a successful JSON response
    pub fn success<T: Serialize>(body: &T) -> WithStatus<Json> {
        warp::reply::with_status(warp::reply::json(body), StatusCode::OK)
    }

    /// Format an application error with its status code
    pub fn from_app_error(error: &AppError) -> WithStatus<Json> {
        warp::reply::with_status(
            warp::reply::json(&error.to_error_payload()),
            error.http_status_code(),
        )
    }

    /// Format a health check response
    pub fn health(health: &HealthResponse) -> WithStatus<Json> {
        let status = StatusCode::from_u16(health.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        warp::reply::with_status(warp::reply::json(health), status)
    }
}
