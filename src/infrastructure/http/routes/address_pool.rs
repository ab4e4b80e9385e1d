//! Address pool routes module

use crate::{
    application::use_cases::ValidateModelUseCase,
    config::AppConfig,
    infrastructure::http::{
        handlers::{handle_validate_bind, handle_validate_iana},
        utils::{json_body, with_client_ip, with_validate_use_case},
    },
};
use std::sync::Arc;
use warp::Filter;

/// Address pool routes configuration
pub struct AddressPoolRoutes;

impl AddressPoolRoutes {
    /// `POST /bind`
    pub fn create_bind_route(
        config: &AppConfig,
        validate_use_case: Arc<ValidateModelUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("bind")
            .and(warp::path::end())
            .and(warp::post())
            .and(json_body(config))
            .and(with_client_ip())
            .and(with_validate_use_case(validate_use_case))
            .and_then(handle_validate_bind)
    }

    /// `POST /iana`
    pub fn create_iana_route(
        config: &AppConfig,
        validate_use_case: Arc<ValidateModelUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("iana")
            .and(warp::path::end())
            .and(warp::post())
            .and(json_body(config))
            .and(with_client_ip())
            .and(with_validate_use_case(validate_use_case))
            .and_then(handle_validate_iana)
    }
}
