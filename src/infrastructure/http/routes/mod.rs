//! HTTP routes module
//!
//! This module contains all HTTP route configurations.

pub mod address_pool;
pub mod builder;
pub mod health;
pub mod shared_network;

// Re-export commonly used types
pub use address_pool::AddressPoolRoutes;
pub use builder::RouteBuilder;
pub use health::HealthRoutes;
pub use shared_network::SharedNetworkRoutes;
