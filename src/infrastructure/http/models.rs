//! HTTP models - Infrastructure concerns
//!
//! This module contains models that are specific to HTTP request handling.

use crate::shared::logging::LoggingUtils;

/// HTTP request context for tracking and logging (infrastructure concern)
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request ID
    pub request_id: String,

    /// Client IP address
    pub client_ip: String,

    /// Request timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,

    /// HTTP method
    pub method: String,

    /// Request path
    pub path: String,
}

impl RequestContext {
    /// Create a context for a new request and log its arrival
    pub fn new(method: &str, path: &str, client_ip: String) -> Self {
        let context = Self {
            request_id: LoggingUtils::generate_request_id(),
            client_ip,
            timestamp: chrono::Utc::now(),
            method: method.to_string(),
            path: path.to_string(),
        };

        LoggingUtils::log_request(
            &context.request_id,
            &context.method,
            &context.path,
            &context.client_ip,
        );
        context
    }
}
