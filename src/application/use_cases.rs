//! Use cases - Application business operations

pub mod health_check;
pub mod shared_network;
pub mod validate_model;

pub use health_check::HealthCheckUseCase;
pub use shared_network::GetSharedNetworkUseCase;
pub use validate_model::ValidateModelUseCase;
