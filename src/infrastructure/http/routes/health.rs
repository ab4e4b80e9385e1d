//! Health routes module
//!
//! This module contains health check route configurations.

use crate::{
    application::use_cases::HealthCheckUseCase,
    infrastructure::http::{
        handlers::handle_health_request,
        utils::{with_client_ip, with_health_use_case},
    },
};
use std::sync::Arc;
use warp::Filter;

/// Health routes configuration
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check endpoint route
    pub fn create_health_route(
        health_use_case: Arc<HealthCheckUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("health")
            .and(warp::path::end())
            .and(warp::get())
            .and(with_client_ip())
            .and(with_health_use_case(health_use_case))
            .and_then(handle_health_request)
    }
}
