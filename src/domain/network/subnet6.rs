use crate::domain::scalars;
use crate::domain::validation::coercion;
use crate::domain::validation::{ValidatedModel, ValidationErrors};
use ipnet::Ipv6Net;
use serde::Serialize;
use serde_json::Value;

/// IPv6 subnet served by a shared network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subnet6 {
    subnet6_number: Ipv6Net,
}

impl Subnet6 {
    pub fn new(subnet6_number: Ipv6Net) -> Self {
        Self { subnet6_number }
    }

    pub fn subnet6_number(&self) -> Ipv6Net {
        self.subnet6_number
    }
}

impl ValidatedModel for Subnet6 {
    const MODEL_NAME: &'static str = "Subnet6";

    fn validate(raw: &Value) -> Result<Self, ValidationErrors> {
        let obj = coercion::object(raw)?;
        let mut errors = ValidationErrors::new();

        let subnet6_number = errors.collect(
            "subnet6_number",
            coercion::required(obj, "subnet6_number").and_then(scalars::ipv6_network),
        );

        errors.finish(subnet6_number.map(Self::new))
    }
}
