//! Configuration management module
//!
//! Loading from the `Conf` file and `SHARED_NET` environment variables, plus the
//! checks that run before the server starts.

pub mod app_config;
pub mod validation;

pub use app_config::AppConfig;
pub use validation::ConfigValidator;
