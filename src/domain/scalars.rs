//! Network address and DHCPv6 identifier scalars
//!
//! Addresses and networks are parsed from their textual form, or from a non-negative
//! JSON integer (IPv4 below 2^32, IPv6 above). They always serialize in canonical form.
//! DUID and IAID are kept exactly as given once they match their pattern.

use crate::domain::validation::coercion;
use crate::domain::validation::{ErrorKind, FieldError};
use ipnet::{IpNet, Ipv6Net};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Up to 128 hex byte pairs, each optionally followed by `:` or `-`
pub const DUID_PATTERN: &str = r"^(?:[0-9A-Fa-f]{2}[:-]?){1,128}$";
pub const DUID_MIN_LENGTH: usize = 1;
pub const DUID_MAX_LENGTH: usize = 128;

/// Four colon-separated hex byte pairs, or a decimal integer without leading zeros
pub const IAID_PATTERN: &str = r"^(?:(?:[0-9A-Fa-f]{2}:){3}[0-9A-Fa-f]{2}|[1-9][0-9]{0,9}|0)$";

static DUID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DUID_PATTERN).expect("DUID pattern is valid"));
static IAID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(IAID_PATTERN).expect("IAID pattern is valid"));

fn address_error(raw: &Value) -> FieldError {
    FieldError::new(ErrorKind::InvalidAddressFormat, raw.clone())
}

fn network_error(raw: &Value, reason: impl Into<Value>) -> FieldError {
    FieldError::new(ErrorKind::InvalidNetworkFormat, raw.clone()).with_ctx("reason", reason)
}

fn address_from_integer(raw: &Value) -> Option<IpAddr> {
    let n = raw.as_u64()?;
    Some(match u32::try_from(n) {
        Ok(v4) => IpAddr::V4(Ipv4Addr::from(v4)),
        Err(_) => IpAddr::V6(Ipv6Addr::from(u128::from(n))),
    })
}

/// IPv4 or IPv6 address
pub fn ip_address(raw: &Value) -> Result<IpAddr, FieldError> {
    match raw {
        Value::String(s) => s.parse::<IpAddr>().map_err(|_| address_error(raw)),
        Value::Number(_) => address_from_integer(raw).ok_or_else(|| address_error(raw)),
        _ => Err(address_error(raw)),
    }
}

pub fn ipv6_address(raw: &Value) -> Result<Ipv6Addr, FieldError> {
    match ip_address(raw)? {
        IpAddr::V6(addr) => Ok(addr),
        IpAddr::V4(_) => Err(address_error(raw).with_ctx("expected", "ipv6")),
    }
}

/// IPv4 or IPv6 network; host bits must be zero and a bare address is a full-length network
pub fn ip_network(raw: &Value) -> Result<IpNet, FieldError> {
    let net = match raw {
        Value::String(s) if s.contains('/') => s
            .parse::<IpNet>()
            .map_err(|_| network_error(raw, "malformed network"))?,
        Value::String(s) => s
            .parse::<IpAddr>()
            .map(IpNet::from)
            .map_err(|_| network_error(raw, "malformed network"))?,
        Value::Number(_) => address_from_integer(raw)
            .map(IpNet::from)
            .ok_or_else(|| network_error(raw, "integer out of range"))?,
        _ => return Err(network_error(raw, "expected a network string")),
    };

    if net.trunc() != net {
        return Err(network_error(raw, "host bits set"));
    }
    Ok(net)
}

pub fn ipv6_network(raw: &Value) -> Result<Ipv6Net, FieldError> {
    match ip_network(raw)? {
        IpNet::V6(net) => Ok(net),
        IpNet::V4(_) => Err(network_error(raw, "expected an IPv6 network").with_ctx("expected", "ipv6")),
    }
}

/// DHCP unique identifier, as written by the client
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Duid(String);

impl Duid {
    pub fn parse(raw: &Value) -> Result<Self, FieldError> {
        Self::new(coercion::string(raw)?)
    }

    pub fn new(value: &str) -> Result<Self, FieldError> {
        coercion::check_min_length(value, DUID_MIN_LENGTH)?;
        coercion::check_max_length(value, DUID_MAX_LENGTH)?;
        coercion::check_pattern(value, &DUID_REGEX)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identity association identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iaid(String);

impl Iaid {
    pub fn parse(raw: &Value) -> Result<Self, FieldError> {
        Self::new(coercion::string(raw)?)
    }

    pub fn new(value: &str) -> Result<Self, FieldError> {
        coercion::check_pattern(value, &IAID_REGEX)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_scalar_impls {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }
    )*};
}

string_scalar_impls!(Duid, Iaid);
