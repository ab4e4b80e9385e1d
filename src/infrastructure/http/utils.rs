//! HTTP utilities - Common helper functions
//!
//! This module contains utility functions used across the HTTP infrastructure
//! for client IP extraction and route injection.

use crate::application::use_cases::{
    GetSharedNetworkUseCase, HealthCheckUseCase, ValidateModelUseCase,
};
use crate::config::AppConfig;
use std::net::IpAddr;
use std::sync::Arc;
use warp::Filter;

/// Client IP from the first `X-Forwarded-For` entry, or `"unknown"`
pub fn extract_client_ip(forwarded_for: Option<&str>) -> String {
    forwarded_for
        .and_then(|header| header.split(',').next())
        .and_then(|ip| ip.trim().parse::<IpAddr>().ok())
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Optional `X-Forwarded-For` header, resolved to a client IP
pub fn with_client_ip() -> impl Filter<Extract = (String,), Error = warp::Rejection> + Clone {
    warp::header::optional::<String>("x-forwarded-for")
        .map(|header: Option<String>| extract_client_ip(header.as_deref()))
}

/// Request body parsed as JSON, bounded by the configured size limit
pub fn json_body(
    config: &AppConfig,
) -> impl Filter<Extract = (serde_json::Value,), Error = warp::Rejection> + Clone {
    warp::body::content_length_limit(config.server.max_request_size as u64)
        .and(warp::body::json())
}

/// Helper function to inject health use case into route
pub fn with_health_use_case(
    health_use_case: Arc<HealthCheckUseCase>,
) -> impl Filter<Extract = (Arc<HealthCheckUseCase>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || health_use_case.clone())
}

/// Helper function to inject shared network use case into route
pub fn with_shared_network_use_case(
    shared_network_use_case: Arc<GetSharedNetworkUseCase>,
) -> impl Filter<Extract = (Arc<GetSharedNetworkUseCase>,), Error = std::convert::Infallible> + Clone
{
    warp::any().map(move || shared_network_use_case.clone())
}

/// Helper function to inject validation use case into route
pub fn with_validate_use_case(
    validate_use_case: Arc<ValidateModelUseCase>,
) -> impl Filter<Extract = (Arc<ValidateModelUseCase>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || validate_use_case.clone())
}
