//! Static DHCPv6 address binding

use crate::domain::scalars::{self, Duid, Iaid};
use crate::domain::validation::coercion;
use crate::domain::validation::{ValidatedModel, ValidationErrors};
use serde::Serialize;
use serde_json::Value;
use std::net::Ipv6Addr;

/// Client identity (DUID + IAID) pinned to one IPv6 address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bind {
    duid: Duid,
    iaid: Iaid,
    ip6_address: Ipv6Addr,
}

impl Bind {
    pub fn new(duid: Duid, iaid: Iaid, ip6_address: Ipv6Addr) -> Self {
        Self {
            duid,
            iaid,
            ip6_address,
        }
    }

    pub fn duid(&self) -> &Duid {
        &self.duid
    }

    pub fn iaid(&self) -> &Iaid {
        &self.iaid
    }

    pub fn ip6_address(&self) -> Ipv6Addr {
        self.ip6_address
    }
}

impl ValidatedModel for Bind {
    const MODEL_NAME: &'static str = "Bind";

    fn validate(raw: &Value) -> Result<Self, ValidationErrors> {
        let obj = coercion::object(raw)?;
        let mut errors = ValidationErrors::new();

        let duid = errors.collect("duid", coercion::required(obj, "duid").and_then(Duid::parse));
        let iaid = errors.collect("iaid", coercion::required(obj, "iaid").and_then(Iaid::parse));
        let ip6_address = errors.collect(
            "ip6_address",
            coercion::required(obj, "ip6_address").and_then(scalars::ipv6_address),
        );

        let bind = match (duid, iaid, ip6_address) {
            (Some(duid), Some(iaid), Some(ip6_address)) => Some(Self::new(duid, iaid, ip6_address)),
            _ => None,
        };
        errors.finish(bind)
    }
}
