//! HTTP route handlers module
//!
//! This module contains separate route handlers for different endpoint types,
//! organized by functionality to improve maintainability and testability.

pub mod address_pool;
pub mod health;
pub mod rejection;
pub mod shared_network;

pub use address_pool::{handle_validate_bind, handle_validate_iana};
pub use health::handle_health_request;
pub use rejection::handle_rejection;
pub use shared_network::{handle_get_shared_network, handle_save_shared_network};
