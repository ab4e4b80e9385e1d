//! Canonical human-readable messages for validation errors
//!
//! A template is substituted from the error context (`{gt}`, `{preferred_lifetime}`, ...).
//! Kinds without a template, or errors whose context lacks a placeholder, keep the
//! generic message of their kind.

use super::types::{ErrorKind, ValidationErrors};
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::collections::HashMap;

static BUILTIN: Lazy<MessageCatalog> = Lazy::new(MessageCatalog::new);

/// Message templates keyed by error kind
#[derive(Debug, Clone, PartialEq)]
pub struct MessageCatalog {
    templates: HashMap<ErrorKind, String>,
}

impl MessageCatalog {
    /// Catalog with the built-in templates
    pub fn new() -> Self {
        let templates = [
            (ErrorKind::GreaterThan, "Input should be greater than {gt}"),
            (ErrorKind::TooShort, "Input should have at least {min_length} characters"),
            (ErrorKind::TooLong, "Input should have at most {max_length} characters"),
            (ErrorKind::PatternMismatch, "Input should match pattern '{pattern}'"),
            (
                ErrorKind::PreferredExceedsValidLifetime,
                "Preferred lifetime is greater than valid lifetime: {preferred_lifetime} <= {valid_lifetime} does not hold",
            ),
            (
                ErrorKind::PreferredLifetimeRequiresValidLifetime,
                "Valid lifetime must be set when preferred lifetime is set",
            ),
            (
                ErrorKind::AddressRangeInverted,
                "Low address is greater than high address: {low_address} <= {high_address} does not hold",
            ),
        ]
        .into_iter()
        .map(|(kind, template)| (kind, template.to_string()))
        .collect();

        Self { templates }
    }

    /// Shared instance of the built-in catalog
    pub fn builtin() -> &'static MessageCatalog {
        &BUILTIN
    }

    /// Built-in catalog with templates replaced by tag.
    ///
    /// Unknown tags are rejected so a typo in configuration does not silently fall back
    /// to the default message.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Result<Self, String> {
        let mut catalog = Self::new();
        for (tag, template) in overrides {
            let kind = ErrorKind::from_tag(tag)
                .ok_or_else(|| format!("Unknown error kind in message overrides: {}", tag))?;
            catalog.templates.insert(kind, template.clone());
        }
        Ok(catalog)
    }

    pub fn template(&self, kind: ErrorKind) -> Option<&str> {
        self.templates.get(&kind).map(String::as_str)
    }

    /// Message for an error of `kind` with context `ctx`
    pub fn render(&self, kind: ErrorKind, ctx: &Map<String, Value>) -> String {
        self.template(kind)
            .and_then(|template| render_template(template, ctx))
            .unwrap_or_else(|| kind.default_message().to_string())
    }

    /// Rewrite the messages of every collected error with this catalog
    pub fn apply(&self, errors: &mut ValidationErrors) {
        for error in errors.errors_mut() {
            let msg = self.render(error.kind(), error.ctx());
            error.set_message(msg);
        }
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Substitute `{key}` placeholders from `ctx`; `None` when a placeholder is unbound
pub fn render_template(template: &str, ctx: &Map<String, Value>) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}')?;
        let key = &after[..end];
        match ctx.get(key)? {
            Value::String(s) => out.push_str(s),
            other => out.push_str(&other.to_string()),
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    Some(out)
}
