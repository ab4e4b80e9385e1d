//! Domain validation module
//!
//! Error reporting, message formatting and raw value coercion shared by the
//! shared-network configuration models.

pub mod coercion;
pub mod messages;
pub mod types;

pub use messages::{render_template, MessageCatalog};
pub use types::{ErrorCategory, ErrorKind, FieldError, FieldPath, PathSegment, ValidationErrors};

use serde_json::Value;

/// A configuration model built only through validation of raw input
pub trait ValidatedModel: Sized {
    /// Name used in logs and error payloads
    const MODEL_NAME: &'static str;

    /// Coerce and validate an untyped JSON mapping
    fn validate(raw: &Value) -> Result<Self, ValidationErrors>;
}
