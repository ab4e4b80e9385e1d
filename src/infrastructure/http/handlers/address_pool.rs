//! Address pool handler module
//!
//! Validation endpoints for static bindings and IANA address pools.

use crate::{
    application::use_cases::ValidateModelUseCase,
    domain::{
        network::{Bind, Iana},
        validation::ValidatedModel,
    },
    infrastructure::http::{models::RequestContext, responses::ResponseFormatter},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use warp::Reply;

async fn handle_validate<M: ValidatedModel + Serialize>(
    path: &str,
    body: Value,
    client_ip: String,
    validate_use_case: Arc<ValidateModelUseCase>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let context = RequestContext::new("POST", path, client_ip);

    let response = match validate_use_case.execute::<M>(&context.request_id, &body) {
        Ok(model) => ResponseFormatter::success(&model),
        Err(error) => ResponseFormatter::from_app_error(&error),
    };

    Ok(response)
}

/// Handle validation of a static binding
pub async fn handle_validate_bind(
    body: Value,
    client_ip: String,
    validate_use_case: Arc<ValidateModelUseCase>,
) -> Result<impl Reply, warp::reject::Rejection> {
    handle_validate::<Bind>("/bind", body, client_ip, validate_use_case).await
}

/// Handle validation of an IANA address pool
pub async fn handle_validate_iana(
    body: Value,
    client_ip: String,
    validate_use_case: Arc<ValidateModelUseCase>,
) -> Result<impl Reply, warp::reject::Rejection> {
    handle_validate::<Iana>("/iana", body, client_ip, validate_use_case).await
}
