//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::app_config::{LoggingConfig, MessagesConfig, ServerConfig};
use crate::config::AppConfig;
use crate::shared::error::AppError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_server_config(&config.server);
        Self::validate_logging_config(&config.logging)?;
        Self::validate_messages_config(&config.messages)?;

        Ok(())
    }

    fn validate_server_config(server: &ServerConfig) {
        if server.bind_address.is_unspecified() {
            tracing::warn!(
                "Server binds to {} - the validation API will be reachable from any interface",
                server.bind_address
            );
        }
    }

    fn validate_logging_config(logging: &LoggingConfig) -> crate::Result<()> {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            return Err(AppError::Validation(format!(
                "Invalid log level: {}",
                logging.level
            )));
        }

        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            return Err(AppError::Validation(format!(
                "Invalid log format: {} (expected text or json)",
                logging.format
            )));
        }

        Ok(())
    }

    /// Override templates must not be blank; tags are resolved by `MessageCatalog::with_overrides`
    fn validate_messages_config(messages: &MessagesConfig) -> crate::Result<()> {
        for (tag, template) in &messages.overrides {
            if template.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "Empty message template for error kind: {}",
                    tag
                )));
            }
        }

        Ok(())
    }
}
