//! Domain layer - Configuration models and validation rules
//!
//! This module contains the shared-network models, their scalar types and the
//! validation machinery, independent of HTTP or configuration concerns.

pub mod health;
pub mod network;
pub mod scalars;
pub mod validation;

pub use health::{HealthResponse, HealthStatus};
pub use network::{Bind, DhcpOption, Iana, Parameter, SharedNetwork, Subnet6};
pub use scalars::{Duid, Iaid};
pub use validation::{
    ErrorCategory, ErrorKind, FieldError, FieldPath, MessageCatalog, PathSegment,
    ValidatedModel, ValidationErrors,
};
