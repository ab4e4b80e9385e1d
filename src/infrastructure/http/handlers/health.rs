//! Health check handler module
//!
//! This module contains the health check endpoint handler for monitoring system status.

use crate::{
    application::use_cases::HealthCheckUseCase,
    infrastructure::http::{models::RequestContext, responses::ResponseFormatter},
    shared::logging::LoggingUtils,
};
use std::sync::Arc;
use warp::Reply;

/// Handle health check requests
pub async fn handle_health_request(
    client_ip: String,
    health_use_case: Arc<HealthCheckUseCase>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let context = RequestContext::new("GET", "/health", client_ip);

    let response = match health_use_case.execute().await {
        Ok(health_response) => ResponseFormatter::health(&health_response),
        Err(error) => {
            LoggingUtils::log_error(&context.request_id, &error);
            ResponseFormatter::from_app_error(&error)
        }
    };

    Ok(response)
}
