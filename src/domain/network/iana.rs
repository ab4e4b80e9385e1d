//! IANA address pool: a range of IPv6 addresses handed out to one client class

use super::{identifier, nested, optional_model_list, Bind, DhcpOption, Parameter};
use crate::domain::scalars;
use crate::domain::validation::coercion;
use crate::domain::validation::{ErrorKind, FieldError, ValidatedModel, ValidationErrors};
use serde::Serialize;
use serde_json::Value;
use std::net::Ipv6Addr;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Iana {
    low_address: Ipv6Addr,
    high_address: Ipv6Addr,
    klass: String,
    option: DhcpOption,
    parameter: Parameter,
    binds: Option<Vec<Bind>>,
}

impl Iana {
    pub fn low_address(&self) -> Ipv6Addr {
        self.low_address
    }

    pub fn high_address(&self) -> Ipv6Addr {
        self.high_address
    }

    pub fn klass(&self) -> &str {
        &self.klass
    }

    pub fn option(&self) -> &DhcpOption {
        &self.option
    }

    pub fn parameter(&self) -> &Parameter {
        &self.parameter
    }

    pub fn binds(&self) -> Option<&[Bind]> {
        self.binds.as_deref()
    }
}

impl ValidatedModel for Iana {
    const MODEL_NAME: &'static str = "Iana";

    fn validate(raw: &Value) -> Result<Self, ValidationErrors> {
        let obj = coercion::object(raw)?;
        let mut errors = ValidationErrors::new();

        let low_address = errors.collect(
            "low_address",
            coercion::required(obj, "low_address").and_then(scalars::ipv6_address),
        );
        let high_address = errors.collect(
            "high_address",
            coercion::required(obj, "high_address").and_then(scalars::ipv6_address),
        );
        let klass = errors.collect("klass", coercion::required(obj, "klass").and_then(identifier));
        let option = errors.collect_nested("option", nested::<DhcpOption>(obj, "option"));
        let parameter = errors.collect_nested("parameter", nested::<Parameter>(obj, "parameter"));
        let binds = errors.collect_nested("binds", optional_model_list::<Bind>(obj, "binds"));

        if let (Some(low), Some(high)) = (low_address, high_address) {
            if low > high {
                errors.push(
                    FieldError::new(ErrorKind::AddressRangeInverted, raw.clone())
                        .with_ctx("low_address", low.to_string())
                        .with_ctx("high_address", high.to_string()),
                );
            }
        }

        let pool = match (low_address, high_address, klass, option, parameter, binds) {
            (Some(low_address), Some(high_address), Some(klass), Some(option), Some(parameter), Some(binds)) => {
                Some(Self {
                    low_address,
                    high_address,
                    klass,
                    option,
                    parameter,
                    binds,
                })
            }
            _ => None,
        };
        errors.finish(pool)
    }
}
