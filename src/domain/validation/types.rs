//! Field-level validation errors and the aggregate report
//!
//! Every model validator produces `FieldError`s with a path relative to the model
//! being validated. Parents prefix the path with the field name (or list index) that
//! holds the child, so the final report carries full dotted paths from the root.

use super::messages::MessageCatalog;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// One step of a field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Location of a field inside the validated object graph.
///
/// The empty path designates the model itself; model-level invariants are reported
/// there and end up at the parent field once prefixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// Path of the model being validated
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Prefix the path with the segment that holds it in the parent
    pub fn prepend(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dotted: Vec<String> = self.0.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", dotted.join("."))
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Broad class of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Required field absent
    Missing,
    /// Raw value could not be parsed into the target type
    TypeCoercion,
    /// Numeric, length or pattern constraint violated
    BoundConstraint,
    /// Rule spanning several fields violated
    CrossFieldInvariant,
}

/// Error kind tag, serialized as the wire `type` of a field error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Missing,
    TypeMismatch,
    TooShort,
    TooLong,
    PatternMismatch,
    GreaterThan,
    InvalidAddressFormat,
    InvalidNetworkFormat,
    PreferredLifetimeRequiresValidLifetime,
    PreferredExceedsValidLifetime,
    AddressRangeInverted,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 11] = [
        ErrorKind::Missing,
        ErrorKind::TypeMismatch,
        ErrorKind::TooShort,
        ErrorKind::TooLong,
        ErrorKind::PatternMismatch,
        ErrorKind::GreaterThan,
        ErrorKind::InvalidAddressFormat,
        ErrorKind::InvalidNetworkFormat,
        ErrorKind::PreferredLifetimeRequiresValidLifetime,
        ErrorKind::PreferredExceedsValidLifetime,
        ErrorKind::AddressRangeInverted,
    ];

    /// Wire tag of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Missing => "missing",
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::TooShort => "too_short",
            ErrorKind::TooLong => "too_long",
            ErrorKind::PatternMismatch => "pattern_mismatch",
            ErrorKind::GreaterThan => "greater_than",
            ErrorKind::InvalidAddressFormat => "invalid_address_format",
            ErrorKind::InvalidNetworkFormat => "invalid_network_format",
            ErrorKind::PreferredLifetimeRequiresValidLifetime => {
                "preferred_lifetime__lte__valid_lifetime__is_none"
            }
            ErrorKind::PreferredExceedsValidLifetime => {
                "preferred_lifetime__lte__valid_lifetime__greater"
            }
            ErrorKind::AddressRangeInverted => "low_address__lte__high_address__greater",
        }
    }

    /// Look a kind up by its wire tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == tag)
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::Missing => ErrorCategory::Missing,
            ErrorKind::TypeMismatch
            | ErrorKind::InvalidAddressFormat
            | ErrorKind::InvalidNetworkFormat => ErrorCategory::TypeCoercion,
            ErrorKind::TooShort
            | ErrorKind::TooLong
            | ErrorKind::PatternMismatch
            | ErrorKind::GreaterThan => ErrorCategory::BoundConstraint,
            ErrorKind::PreferredLifetimeRequiresValidLifetime
            | ErrorKind::PreferredExceedsValidLifetime
            | ErrorKind::AddressRangeInverted => ErrorCategory::CrossFieldInvariant,
        }
    }

    /// Generic message used when no template applies
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorKind::Missing => "Field required",
            ErrorKind::TypeMismatch => "Input has an unexpected type",
            ErrorKind::TooShort => "Input is too short",
            ErrorKind::TooLong => "Input is too long",
            ErrorKind::PatternMismatch => "Input does not match the required pattern",
            ErrorKind::GreaterThan => "Input is not greater than the lower bound",
            ErrorKind::InvalidAddressFormat => "Input is not a valid IP address",
            ErrorKind::InvalidNetworkFormat => "Input is not a valid IP network",
            ErrorKind::PreferredLifetimeRequiresValidLifetime => {
                "Valid lifetime must be set when preferred lifetime is set"
            }
            ErrorKind::PreferredExceedsValidLifetime => {
                "Preferred lifetime is greater than valid lifetime"
            }
            ErrorKind::AddressRangeInverted => "Low address is greater than high address",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    loc: FieldPath,
    kind: ErrorKind,
    input: Value,
    ctx: Map<String, Value>,
    msg: Option<String>,
}

impl FieldError {
    /// Create an error at the root of the model currently being validated
    pub fn new(kind: ErrorKind, input: Value) -> Self {
        Self {
            loc: FieldPath::root(),
            kind,
            input,
            ctx: Map::new(),
            msg: None,
        }
    }

    /// Attach a context value used for message formatting
    pub fn with_ctx(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.ctx.insert(key.to_string(), value.into());
        self
    }

    pub fn at(mut self, segment: impl Into<PathSegment>) -> Self {
        self.loc.prepend(segment.into());
        self
    }

    pub fn loc(&self) -> &FieldPath {
        &self.loc
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn input(&self) -> &Value {
        &self.input
    }

    pub fn ctx(&self) -> &Map<String, Value> {
        &self.ctx
    }

    /// Human-readable message, rendered from the built-in catalog unless overridden
    pub fn message(&self) -> String {
        match &self.msg {
            Some(msg) => msg.clone(),
            None => MessageCatalog::builtin().render(self.kind, &self.ctx),
        }
    }

    pub(crate) fn set_message(&mut self, msg: String) {
        self.msg = Some(msg);
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loc.is_root() {
            write!(f, "{} [type={}]", self.message(), self.kind)
        } else {
            write!(f, "{}: {} [type={}]", self.loc, self.message(), self.kind)
        }
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldError", 5)?;
        state.serialize_field("type", &self.kind)?;
        state.serialize_field("loc", &self.loc)?;
        state.serialize_field("msg", &self.message())?;
        state.serialize_field("input", &self.input)?;
        if !self.ctx.is_empty() {
            state.serialize_field("ctx", &self.ctx)?;
        } else {
            state.skip_field("ctx")?;
        }
        state.end()
    }
}

/// Every field error collected during one validation call, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("{} validation error(s): {}", .errors.len(), summarize(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub(crate) fn errors_mut(&mut self) -> &mut [FieldError] {
        &mut self.errors
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }

    /// Prefix every error with the segment that holds the child in its parent
    pub fn at(mut self, segment: impl Into<PathSegment>) -> Self {
        let segment = segment.into();
        for error in &mut self.errors {
            error.loc.prepend(segment.clone());
        }
        self
    }

    /// Record the outcome of a scalar field, keeping the value on success
    pub fn collect<T>(&mut self, field: &str, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.errors.push(error.at(field));
                None
            }
        }
    }

    /// Record the outcome of a nested model or list field
    pub fn collect_nested<T>(
        &mut self,
        field: &str,
        result: Result<T, ValidationErrors>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(errors) => {
                self.errors.extend(errors.at(field).errors);
                None
            }
        }
    }

    /// Finish a validation call: the value when nothing was collected, the report otherwise
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(self),
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.errors.serialize(serializer)
    }
}
