use crate::{
    domain::network::{DhcpOption, Parameter, SharedNetwork, Subnet6},
    shared::error::{AppError, AppResult},
};
use ipnet::Ipv6Net;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tracing::debug;

const SAMPLE_NAME: &str = "MySharedNetwork";
const SAMPLE_DESCRIPTION: &str = "This is my shared network.";
const SAMPLE_DOMAIN: &str = "google.com";
const SAMPLE_SUBNET_PREFIX: u8 = 64;

/// Returns the reference shared network served by the read endpoint
pub struct GetSharedNetworkUseCase;

impl GetSharedNetworkUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Build the reference shared network
    pub fn execute(&self) -> AppResult<SharedNetwork> {
        let google_dns_v6 = Ipv6Addr::new(0x2001, 0x4860, 0x4860, 0, 0, 0, 0, 0x8888);

        let option = DhcpOption::new(
            Some(vec![
                IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)),
                IpAddr::V6(google_dns_v6),
            ]),
            Some(vec![SAMPLE_DOMAIN.to_string()]),
        );

        let parameter = Parameter::new(1, 1).map_err(|e| AppError::Internal(e.to_string()))?;

        let subnet = Ipv6Net::new(
            Ipv6Addr::new(0x2001, 0x4860, 0x4860, 0, 0, 0, 0, 0),
            SAMPLE_SUBNET_PREFIX,
        )
        .map_err(|e| AppError::Internal(e.to_string()))?;

        let network = SharedNetwork::new(
            SAMPLE_NAME,
            Some(SAMPLE_DESCRIPTION),
            option,
            parameter,
            Some(vec![Subnet6::new(subnet)]),
        )
        .map_err(|e| AppError::Internal(e.to_string()))?;

        debug!(name = %network.name(), "Built reference shared network");
        Ok(network)
    }
}

impl Default for GetSharedNetworkUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_network_shape() {
        let network = GetSharedNetworkUseCase::new().execute().unwrap();
        assert_eq!(network.name(), "MySharedNetwork");
        assert_eq!(network.description(), Some("This is my shared network."));
        assert_eq!(network.option().dns_servers().unwrap().len(), 2);
        assert_eq!(network.parameter().valid_lifetime(), 1);
    }

    #[test]
    fn test_reference_network_serialization() {
        let network = GetSharedNetworkUseCase::new().execute().unwrap();
        assert_eq!(
            serde_json::to_value(&network).unwrap(),
            json!({
                "name": "MySharedNetwork",
                "description": "This is my shared network.",
                "option": {
                    "dns_servers": ["8.8.8.8", "2001:4860:4860::8888"],
                    "domain_list": "google.com"
                },
                "parameter": {"preferred_lifetime": 1, "valid_lifetime": 1},
                "subnets": [{"subnet6_number": "2001:4860:4860::/64"}]
            })
        );
    }
}
