//! Rejection handler module
//!
//! Turns warp rejections into the same JSON error bodies the handlers produce.

use crate::{infrastructure::http::responses::ResponseFormatter, shared::error::AppError};
use std::convert::Infallible;
use warp::Reply;

/// Recover from a rejection; `limit` is the configured body size limit
pub async fn handle_rejection(
    rejection: warp::Rejection,
    limit: usize,
) -> Result<impl Reply, Infallible> {
    let error = if rejection.is_not_found() {
        AppError::NotFound("no route matches the request".to_string())
    } else if let Some(e) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        AppError::Json(e.to_string())
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        AppError::RequestTooLarge { limit }
    } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        AppError::Json("request body must be application/json".to_string())
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        AppError::Json("request body length is required".to_string())
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        AppError::MethodNotAllowed
    } else if let Some(e) = rejection.find::<AppError>() {
        e.clone()
    } else {
        tracing::error!(rejection = ?rejection, "Unhandled rejection");
        AppError::Internal("unhandled rejection".to_string())
    };

    Ok(ResponseFormatter::from_app_error(&error))
}
