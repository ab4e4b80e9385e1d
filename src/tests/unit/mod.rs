//! Unit and property tests for the configuration models

use crate::{
    domain::{
        network::{
            option::{join_domain_list, split_domain_list},
            Parameter, SharedNetwork,
        },
        validation::{ErrorKind, ValidatedModel, ValidationErrors},
    },
    tests::fixtures,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn summary(errors: &ValidationErrors) -> Vec<(String, ErrorKind)> {
    errors
        .iter()
        .map(|e| (e.loc().to_string(), e.kind()))
        .collect()
}

/// Model scenario tests
pub mod scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_net1_shape() {
        let network = SharedNetwork::validate(&fixtures::net1()).unwrap();

        assert_eq!(
            serde_json::to_value(&network).unwrap(),
            json!({
                "name": "Net1",
                "description": "",
                "option": {
                    "dns_servers": ["8.8.8.8", "2001:4860:4860::8888"],
                    "domain_list": "a.com, b.com"
                },
                "parameter": {"preferred_lifetime": 1, "valid_lifetime": 2},
                "subnets": [{"subnet6_number": "2001:4860:4860::/64"}]
            })
        );
    }

    #[test]
    fn test_name_with_space_is_rejected() {
        let errors =
            SharedNetwork::validate(&fixtures::shared_network("My Network", 1, 1)).unwrap_err();
        assert_eq!(
            summary(&errors),
            vec![("name".to_string(), ErrorKind::PatternMismatch)]
        );

        assert!(SharedNetwork::validate(&fixtures::shared_network("My_Network_01", 1, 1)).is_ok());
    }

    #[test]
    fn test_description_limit() {
        let mut raw = fixtures::net1();
        raw["description"] = json!("d".repeat(79));
        assert!(SharedNetwork::validate(&raw).is_ok());

        raw["description"] = json!("d".repeat(80));
        let errors = SharedNetwork::validate(&raw).unwrap_err();
        assert_eq!(
            summary(&errors),
            vec![("description".to_string(), ErrorKind::TooLong)]
        );
    }

    #[test]
    fn test_errors_reported_in_field_order() {
        let errors = SharedNetwork::validate(&fixtures::shared_network("", 10, 5)).unwrap_err();
        assert_eq!(
            summary(&errors),
            vec![
                ("name".to_string(), ErrorKind::TooShort),
                ("parameter".to_string(), ErrorKind::PreferredExceedsValidLifetime),
            ]
        );
    }

    #[test]
    fn test_payload_lists_every_error() {
        let mut raw = fixtures::net1();
        raw["option"]["dns_servers"] = json!(["8.8.8.8", "not-an-ip"]);
        raw["subnets"] = json!([{"subnet6_number": "2001:db8::1/64"}]);

        let errors = SharedNetwork::validate(&raw).unwrap_err();
        let payload = serde_json::to_value(&errors).unwrap();
        let locs: Vec<&str> = payload
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["loc"].as_str().unwrap())
            .collect();
        assert_eq!(locs, vec!["option.dns_servers.1", "subnets.0.subnet6_number"]);
    }
}

fn domain_name() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9.-]{0,20}"
}

fn network_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{1,24}"
}

proptest! {
    #[test]
    fn prop_domain_list_join_split(domains in prop::collection::vec(domain_name(), 1..6)) {
        prop_assert_eq!(split_domain_list(&join_domain_list(&domains)), domains);
    }

    #[test]
    fn prop_lifetime_ordering(preferred in 1i64..100_000, valid in 1i64..100_000) {
        match Parameter::new(preferred, valid) {
            Ok(parameter) => {
                prop_assert!(preferred <= valid);
                prop_assert_eq!(parameter.preferred_lifetime(), preferred);
                prop_assert_eq!(parameter.valid_lifetime(), valid);
            }
            Err(errors) => {
                prop_assert!(preferred > valid);
                prop_assert_eq!(errors.len(), 1);
                let error = &errors.errors()[0];
                prop_assert!(error.loc().is_root());
                prop_assert_eq!(error.kind(), ErrorKind::PreferredExceedsValidLifetime);
                prop_assert_eq!(&error.ctx()["preferred_lifetime"], &json!(preferred));
                prop_assert_eq!(&error.ctx()["valid_lifetime"], &json!(valid));
            }
        }
    }

    #[test]
    fn prop_serialized_network_validates_to_same_value(
        name in network_name(),
        description in prop::option::of("[ -~]{0,79}"),
        domains in prop::collection::vec(domain_name(), 1..4),
        preferred in 1i64..1_000,
        extra in 0i64..1_000,
        with_subnets in any::<bool>(),
    ) {
        let mut raw = fixtures::shared_network(&name, preferred, preferred + extra);
        raw["description"] = description.map_or(Value::Null, Value::String);
        raw["option"]["domain_list"] = json!(domains);
        raw["subnets"] = if with_subnets {
            json!([{"subnet6_number": "2001:db8::/48"}])
        } else {
            Value::Null
        };

        let network = SharedNetwork::validate(&raw).unwrap();
        let reparsed = SharedNetwork::validate(&serde_json::to_value(&network).unwrap()).unwrap();
        prop_assert_eq!(reparsed, network);
    }
}
