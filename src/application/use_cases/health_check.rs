use crate::{
    application::use_cases::GetSharedNetworkUseCase,
    domain::{
        health::*,
        network::SharedNetwork,
        validation::ValidatedModel,
    },
    shared::error::AppResult,
};
use chrono::{DateTime, Utc};
use serde_json::json;

/// Health check use case
pub struct HealthCheckUseCase {
    started_at: DateTime<Utc>,
}

impl HealthCheckUseCase {
    /// Create a new health check use case
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }

    /// Execute health check.
    ///
    /// The reference shared network is serialized and validated again; the service is
    /// unhealthy when that round trip is rejected or changes the network.
    pub async fn execute(&self) -> AppResult<HealthResponse> {
        let reference = GetSharedNetworkUseCase::new().execute()?;
        let serialized = serde_json::to_value(&reference)?;

        let (status, self_test) = match SharedNetwork::validate(&serialized) {
            Ok(network) if network == reference => (HealthStatus::Healthy, json!("passed")),
            Ok(_) => (HealthStatus::Unhealthy, json!("round trip changed the network")),
            Err(errors) => (HealthStatus::Unhealthy, json!(errors.to_string())),
        };

        let details = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "version": env!("CARGO_PKG_VERSION"),
            "uptime": self.get_uptime(),
            "validation": self_test,
        });

        Ok(HealthResponse::new(status, details))
    }

    fn get_uptime(&self) -> String {
        let uptime = Utc::now().signed_duration_since(self.started_at);
        format!(
            "{}d {}h {}m",
            uptime.num_days(),
            uptime.num_hours() % 24,
            uptime.num_minutes() % 60
        )
    }
}

impl Default for HealthCheckUseCase {
    fn default() -> Self {
        Self::new()
    }
}
