//! Route builder module
//!
//! This module contains the main route builder that orchestrates the creation
//! of all application routes.

use crate::{
    application::use_cases::{GetSharedNetworkUseCase, HealthCheckUseCase, ValidateModelUseCase},
    config::AppConfig,
    infrastructure::http::{
        handlers::handle_rejection,
        routes::{AddressPoolRoutes, HealthRoutes, SharedNetworkRoutes},
    },
};
use std::sync::Arc;
use warp::Filter;

/// Route builder that orchestrates the creation of all application routes
pub struct RouteBuilder;

impl RouteBuilder {
    /// Build all application routes
    pub fn build_routes(
        config: AppConfig,
        health_use_case: Arc<HealthCheckUseCase>,
        shared_network_use_case: Arc<GetSharedNetworkUseCase>,
        validate_use_case: Arc<ValidateModelUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
        // Build individual route groups
        let health_route = HealthRoutes::create_health_route(health_use_case);

        let get_shared_network_route =
            SharedNetworkRoutes::create_get_route(shared_network_use_case);

        let save_shared_network_route =
            SharedNetworkRoutes::create_save_route(&config, validate_use_case.clone());

        let bind_route = AddressPoolRoutes::create_bind_route(&config, validate_use_case.clone());

        let iana_route = AddressPoolRoutes::create_iana_route(&config, validate_use_case);

        let limit = config.server.max_request_size;

        // Combine all routes
        health_route
            .or(get_shared_network_route)
            .or(save_shared_network_route)
            .or(bind_route)
            .or(iana_route)
            .recover(move |rejection| handle_rejection(rejection, limit))
    }
}
