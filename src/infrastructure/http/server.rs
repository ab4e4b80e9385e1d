//! HTTP server implementation
//!
//! This module wires the use cases into the warp routes and serves them.

use crate::{
    application::use_cases::{GetSharedNetworkUseCase, HealthCheckUseCase, ValidateModelUseCase},
    config::AppConfig,
    infrastructure::http::routes::RouteBuilder,
    shared::error::AppResult,
};
use std::sync::Arc;
use tracing::{info, instrument};
use warp::{Filter, Reply};

/// HTTP server exposing the validation API
pub struct HttpServer {
    config: AppConfig,
    health_use_case: Arc<HealthCheckUseCase>,
    shared_network_use_case: Arc<GetSharedNetworkUseCase>,
    validate_use_case: Arc<ValidateModelUseCase>,
}

impl HttpServer {
    /// Create a new HTTP server instance
    pub fn new(config: AppConfig) -> AppResult<Self> {
        // Initialize the message catalog with configured overrides
        let catalog = Arc::new(config.message_catalog()?);

        // Initialize use cases
        let health_use_case = Arc::new(HealthCheckUseCase::new());
        let shared_network_use_case = Arc::new(GetSharedNetworkUseCase::new());
        let validate_use_case = Arc::new(ValidateModelUseCase::new(catalog));

        Ok(Self {
            config,
            health_use_case,
            shared_network_use_case,
            validate_use_case,
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the HTTP server
    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr = self.config.server_address();
        info!("Starting HTTP server on {}", addr);

        let routes = self.create_routes();

        warp::serve(routes).run(addr).await;

        Ok(())
    }

    /// Create the application routes
    pub fn create_routes(
        self,
    ) -> impl Filter<Extract = impl Reply, Error = std::convert::Infallible> + Clone {
        RouteBuilder::build_routes(
            self.config,
            self.health_use_case,
            self.shared_network_use_case,
            self.validate_use_case,
        )
    }
}
