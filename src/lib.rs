//! Shared Network Server - validation service for DHCPv6 shared-network configuration
//!
//! This library validates untyped shared-network, address pool and binding
//! configuration into typed models, reporting every rejected field with its full
//! dotted path, and exposes the validation over a small JSON HTTP API.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod tests;

pub use crate::config::AppConfig;
pub use crate::infrastructure::http::HttpServer;
pub use crate::shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
