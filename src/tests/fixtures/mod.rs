//! Raw configuration documents used across the test suite

use serde_json::{json, Value};

/// The "Net1" shared network: every field set, one subnet
pub fn net1() -> Value {
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
}

/// Shared network with the given name and lifetimes, everything else minimal
pub fn shared_network(name: &str, preferred_lifetime: i64, valid_lifetime: i64) -> Value {
    json!({
        "name": name,
        "option": {},
        "parameter": {
            "preferred_lifetime": preferred_lifetime,
            "valid_lifetime": valid_lifetime
        }
    })
}

pub fn bind() -> Value {
    json!({
        "duid": "00:03:00:01:1A:2B:3C:4D:5E:6F:7A:8B",
        "iaid": "1A:2B:3C:4D",
        "ip6_address": "2001:4860:4860::8888"
    })
}

pub fn iana() -> Value {
    json!({
        "low_address": "2001:4860:4860::1",
        "high_address": "2001:4860:4860::ff",
        "klass": "default",
        "option": {"domain_list": ["google.com"]},
        "parameter": {"preferred_lifetime": 300, "valid_lifetime": 600},
        "binds": [bind()]
    })
}
