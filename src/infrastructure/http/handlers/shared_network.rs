//! Shared network handler module
//!
//! Read endpoint for the reference shared network and the save endpoint, which
//! validates a submitted network and echoes it back in canonical form.

use crate::{
    application::use_cases::{GetSharedNetworkUseCase, ValidateModelUseCase},
    domain::network::SharedNetwork,
    infrastructure::http::{models::RequestContext, responses::ResponseFormatter},
    shared::logging::LoggingUtils,
};
use serde_json::Value;
use std::sync::Arc;
use warp::Reply;

/// Handle reads of the reference shared network
pub async fn handle_get_shared_network(
    client_ip: String,
    shared_network_use_case: Arc<GetSharedNetworkUseCase>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let context = RequestContext::new("GET", "/shared-network", client_ip);

    let response = match shared_network_use_case.execute() {
        Ok(network) => ResponseFormatter::success(&network),
        Err(error) => {
            LoggingUtils::log_error(&context.request_id, &error);
            ResponseFormatter::from_app_error(&error)
        }
    };

    Ok(response)
}

/// Handle saving a shared network
pub async fn handle_save_shared_network(
    body: Value,
    client_ip: String,
    validate_use_case: Arc<ValidateModelUseCase>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let context = RequestContext::new("POST", "/shared-network", client_ip);

    let response = match validate_use_case.execute::<SharedNetwork>(&context.request_id, &body) {
        Ok(network) => ResponseFormatter::success(&network),
        Err(error) => ResponseFormatter::from_app_error(&error),
    };

    Ok(response)
}
