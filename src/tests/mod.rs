//! Test suite for the shared network server
//!
//! - Fixtures for raw configuration documents
//! - Unit and property tests for the validation models
//! - Integration tests for the HTTP endpoints

pub mod fixtures;
pub mod integration;
pub mod unit;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            // A subscriber may already be installed by another test module
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Create test configuration
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();

        config.server.bind_address = "127.0.0.1".parse().unwrap();
        config.server.max_request_size = 1024;

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_config_initialization() {
        config::init();
        let test_config = config::test_config();
        assert_eq!(test_config.server.max_request_size, 1024);
        assert!(test_config.messages.overrides.is_empty());
        assert!(test_config.server.validate().is_ok());
    }
}
