//! Shared network routes module

use crate::{
    application::use_cases::{GetSharedNetworkUseCase, ValidateModelUseCase},
    config::AppConfig,
    infrastructure::http::{
        handlers::{handle_get_shared_network, handle_save_shared_network},
        utils::{json_body, with_client_ip, with_shared_network_use_case, with_validate_use_case},
    },
};
use std::sync::Arc;
use warp::Filter;

/// Shared network routes configuration
pub struct SharedNetworkRoutes;

impl SharedNetworkRoutes {
    /// `GET /shared-network`
    pub fn create_get_route(
        shared_network_use_case: Arc<GetSharedNetworkUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("shared-network")
            .and(warp::path::end())
            .and(warp::get())
            .and(with_client_ip())
            .and(with_shared_network_use_case(shared_network_use_case))
            .and_then(handle_get_shared_network)
    }

    /// `POST /shared-network`
    pub fn create_save_route(
        config: &AppConfig,
        validate_use_case: Arc<ValidateModelUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("shared-network")
            .and(warp::path::end())
            .and(warp::post())
            .and(json_body(config))
            .and(with_client_ip())
            .and(with_validate_use_case(validate_use_case))
            .and_then(handle_save_shared_network)
    }
}
