//! DHCP options attached to a shared network or address pool

use crate::domain::scalars;
use crate::domain::validation::coercion;
use crate::domain::validation::{ErrorKind, FieldError, ValidatedModel, ValidationErrors};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::net::IpAddr;

/// Separator used when a domain list is written as a single string
pub const DOMAIN_LIST_SEPARATOR: char = ',';
/// Separator used when a domain list is serialized
pub const DOMAIN_LIST_JOIN: &str = ", ";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DhcpOption {
    dns_servers: Option<Vec<IpAddr>>,
    #[serde(serialize_with = "serialize_domain_list")]
    domain_list: Option<Vec<String>>,
}

impl DhcpOption {
    pub fn new(dns_servers: Option<Vec<IpAddr>>, domain_list: Option<Vec<String>>) -> Self {
        Self {
            dns_servers,
            domain_list,
        }
    }

    pub fn dns_servers(&self) -> Option<&[IpAddr]> {
        self.dns_servers.as_deref()
    }

    pub fn domain_list(&self) -> Option<&[String]> {
        self.domain_list.as_deref()
    }

    /// Replace the DNS servers from raw input; the option is unchanged on failure
    pub fn set_dns_servers(&mut self, raw: &Value) -> Result<(), ValidationErrors> {
        self.dns_servers = optional(raw, parse_dns_servers).map_err(|e| e.at("dns_servers"))?;
        Ok(())
    }

    /// Replace the domain list from raw input; the option is unchanged on failure
    pub fn set_domain_list(&mut self, raw: &Value) -> Result<(), ValidationErrors> {
        self.domain_list = optional(raw, parse_domain_list).map_err(|e| e.at("domain_list"))?;
        Ok(())
    }
}

impl ValidatedModel for DhcpOption {
    const MODEL_NAME: &'static str = "Option";

    fn validate(raw: &Value) -> Result<Self, ValidationErrors> {
        let obj = coercion::object(raw)?;
        let mut errors = ValidationErrors::new();

        let dns_servers = errors.collect_nested(
            "dns_servers",
            coercion::optional(obj, "dns_servers")
                .map(parse_dns_servers)
                .transpose(),
        );
        let domain_list = errors.collect_nested(
            "domain_list",
            coercion::optional(obj, "domain_list")
                .map(parse_domain_list)
                .transpose(),
        );

        let option = dns_servers
            .zip(domain_list)
            .map(|(dns_servers, domain_list)| Self::new(dns_servers, domain_list));
        errors.finish(option)
    }
}

fn optional<T>(
    raw: &Value,
    parse: impl FnOnce(&Value) -> Result<T, ValidationErrors>,
) -> Result<Option<T>, ValidationErrors> {
    if raw.is_null() {
        Ok(None)
    } else {
        parse(raw).map(Some)
    }
}

fn parse_dns_servers(raw: &Value) -> Result<Vec<IpAddr>, ValidationErrors> {
    let items = coercion::list(raw)?;
    coercion::each(items, |item| scalars::ip_address(item).map_err(Into::into))
}

/// A comma-separated string or a list of strings
fn parse_domain_list(raw: &Value) -> Result<Vec<String>, ValidationErrors> {
    match raw {
        Value::String(s) => Ok(split_domain_list(s)),
        Value::Array(items) => coercion::each(items, |item| {
            coercion::string(item)
                .map(str::to_string)
                .map_err(Into::into)
        }),
        other => Err(FieldError::new(ErrorKind::TypeMismatch, other.clone())
            .with_ctx("expected", "string or list")
            .into()),
    }
}

/// Split on commas and trim each piece; empty pieces are kept
pub fn split_domain_list(value: &str) -> Vec<String> {
    value
        .split(DOMAIN_LIST_SEPARATOR)
        .map(|piece| piece.trim().to_string())
        .collect()
}

pub fn join_domain_list(domains: &[String]) -> String {
    domains.join(DOMAIN_LIST_JOIN)
}

fn serialize_domain_list<S: Serializer>(
    domains: &Option<Vec<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match domains {
        Some(domains) => serializer.serialize_str(&join_domain_list(domains)),
        None => serializer.serialize_none(),
    }
}
