//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use crate::shared::error::AppError;
use tracing::{error, info, warn};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration.
    ///
    /// `RUST_LOG` takes precedence over `level`. `format = "json"` selects the JSON
    /// formatter; `structured` adds source locations and thread details.
    pub fn initialize(level: &str, format: &str, structured: bool) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(structured)
            .with_thread_names(structured)
            .with_file(structured)
            .with_line_number(structured)
            .with_ansi(false);

        let result = if format == "json" {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Log an incoming request
    pub fn log_request(request_id: &str, method: &str, path: &str, client_ip: &str) {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            client_ip = %client_ip,
            "Processing request"
        );
    }

    /// Log a model that passed validation
    pub fn log_success(request_id: &str, model: &str, duration_ms: u64) {
        info!(
            request_id = %request_id,
            model = %model,
            duration_ms = %duration_ms,
            "Model validated"
        );
    }

    /// Log a model rejected by validation
    pub fn log_rejection(request_id: &str, model: &str, error_count: usize, duration_ms: u64) {
        warn!(
            request_id = %request_id,
            model = %model,
            error_count = %error_count,
            duration_ms = %duration_ms,
            "Model rejected"
        );
    }

    /// Log an error response
    pub fn log_error(request_id: &str, error: &AppError) {
        error!(
            request_id = %request_id,
            error = %error,
            status = %error.http_status_code().as_u16(),
            "Request failed"
        );
    }

    /// Generate a unique request ID
    pub fn generate_request_id() -> String {
        let now = chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default();

        format!("req_{:x}", now)
    }
}
