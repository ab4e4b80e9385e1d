//! Integration tests for the HTTP endpoints
//!
//! Requests go through the full route tree built by `HttpServer`, including rejection
//! recovery, without binding a socket.

use crate::{
    config::AppConfig,
    infrastructure::http::server::HttpServer,
    tests::{config, fixtures},
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::test::request;

fn routes_with(
    config: AppConfig,
) -> impl warp::Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
    HttpServer::new(config).unwrap().create_routes()
}

fn body_of(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    config::init();
    let routes = routes_with(config::test_config());

    let res = request().method("GET").path("/health").reply(&routes).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_of(res.body());
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["details"]["validation"], "passed");
}

#[tokio::test]
async fn test_get_shared_network() {
    config::init();
    let routes = routes_with(config::test_config());

    let res = request()
        .method("GET")
        .path("/shared-network")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_of(res.body());
    assert_eq!(body["name"], "MySharedNetwork");
    assert_eq!(body["option"]["domain_list"], "google.com");
    assert_eq!(body["subnets"][0]["subnet6_number"], "2001:4860:4860::/64");
}

#[tokio::test]
async fn test_save_shared_network_returns_canonical_form() {
    config::init();
    let routes = routes_with(config::test_config());

    let mut raw = fixtures::net1();
    raw["option"]["domain_list"] = json!(["a.com", " b.com "]);
    raw["parameter"]["valid_lifetime"] = json!("2");

    let res = request()
        .method("POST")
        .path("/shared-network")
        .json(&raw)
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_of(res.body());
    assert_eq!(body["option"]["domain_list"], "a.com,  b.com ");
    assert_eq!(
        body["parameter"],
        json!({"preferred_lifetime": 1, "valid_lifetime": 2})
    );
}

#[tokio::test]
async fn test_save_shared_network_reports_all_errors() {
    config::init();
    let routes = routes_with(config::test_config());

    let res = request()
        .method("POST")
        .path("/shared-network")
        .json(&fixtures::shared_network("My Network", 10, 5))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_of(res.body());
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["loc"], "name");
    assert_eq!(errors[0]["type"], "pattern_mismatch");
    assert_eq!(errors[1]["loc"], "parameter");
    assert_eq!(
        errors[1]["type"],
        "preferred_lifetime__lte__valid_lifetime__greater"
    );
    assert_eq!(errors[1]["ctx"]["preferred_lifetime"], 10);
}

#[tokio::test]
async fn test_message_overrides_are_applied() {
    config::init();
    let mut config = config::test_config();
    config.messages.overrides.insert(
        "too_short".to_string(),
        "Name needs {min_length} character".to_string(),
    );
    let routes = routes_with(config);

    let res = request()
        .method("POST")
        .path("/shared-network")
        .json(&fixtures::shared_network("", 1, 1))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_of(res.body());
    assert_eq!(body["errors"][0]["msg"], "Name needs 1 character");
}

#[tokio::test]
async fn test_bind_and_iana_endpoints() {
    config::init();
    let routes = routes_with(config::test_config());

    let res = request()
        .method("POST")
        .path("/bind")
        .json(&fixtures::bind())
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_of(res.body()), fixtures::bind());

    let res = request()
        .method("POST")
        .path("/iana")
        .json(&fixtures::iana())
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_of(res.body())["binds"][0]["iaid"], "1A:2B:3C:4D");

    let mut inverted = fixtures::iana();
    inverted["low_address"] = json!("2001:4860:4860::fff");
    let res = request()
        .method("POST")
        .path("/iana")
        .json(&inverted)
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_of(res.body())["errors"][0]["type"],
        "low_address__lte__high_address__greater"
    );
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    config::init();
    let routes = routes_with(config::test_config());

    let res = request()
        .method("POST")
        .path("/bind")
        .header("content-type", "application/json")
        .body("{\"duid\": ")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_of(res.body())["error"]["code"], 400);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    config::init();
    let routes = routes_with(config::test_config());

    let mut raw = fixtures::net1();
    raw["description"] = json!("d".repeat(2048));

    let res = request()
        .method("POST")
        .path("/shared-network")
        .json(&raw)
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body_of(res.body())["error"]["code"], 413);
}

#[tokio::test]
async fn test_unknown_route_and_wrong_method() {
    config::init();
    let routes = routes_with(config::test_config());

    let res = request().method("GET").path("/subnets").reply(&routes).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = request()
        .method("DELETE")
        .path("/shared-network")
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}
