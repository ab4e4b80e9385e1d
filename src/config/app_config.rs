//! Application configuration structures
//!
//! This module contains the main configuration structures for the application.

use crate::config::ConfigValidator;
use crate::domain::validation::MessageCatalog;
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use validator::Validate;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Server address to bind to
    pub bind_address: IpAddr,

    /// Server port
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,

    /// Maximum request size in bytes
    #[validate(range(min = 1024, max = 10485760))] // 1KB to 10MB
    pub max_request_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            max_request_size: 64 * 1024,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format: "text" or "json"
    #[validate(length(min = 1))]
    pub format: String,

    /// Include source locations and thread details
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            structured: false,
        }
    }
}

/// Validation message configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MessagesConfig {
    /// Error kind tag to message template, replacing the built-in template.
    /// Templates reference context values as `{name}`.
    pub overrides: HashMap<String, String>,
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Validation message configuration
    pub messages: MessagesConfig,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("Conf").required(false))
            .add_source(config::Environment::with_prefix("SHARED_NET").separator("__"))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        // Validate configuration
        config
            .validate_config()
            .map_err(|e| AppError::Validation(format!("Configuration validation failed: {}", e)))?;
        ConfigValidator::validate_config(&config)?;

        Ok(config)
    }

    /// Validate every section with its declared rules
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.server.validate()?;
        self.logging.validate()?;
        self.messages.validate()?;

        Ok(())
    }

    /// Socket address the server binds to
    pub fn server_address(&self) -> SocketAddr {
        SocketAddr::new(self.server.bind_address, self.server.port)
    }

    /// Message catalog with the configured overrides applied
    pub fn message_catalog(&self) -> crate::Result<MessageCatalog> {
        MessageCatalog::with_overrides(&self.messages.overrides).map_err(AppError::Validation)
    }
}
