//! Tests for the HTTP module

use super::*;
use crate::config::SdkConfig;
use crate::error::Error;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde_json::{json, Value};
use test_case::test_case;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sdk_for(server: &MockServer) -> Sdk {
    let config = SdkConfig::builder().base_url(server.uri()).build();
    Sdk::new(config).unwrap()
}

#[test]
fn test_raw_response() {
    let ok = RawResponse::new(200, "hello");
    assert!(ok.is_success());
    assert_eq!(ok.text(), "hello");

    assert!(RawResponse::new(299, "").is_success());
    assert!(!RawResponse::new(300, "").is_success());
    assert!(!RawResponse::new(404, "").is_success());
}

#[test]
fn test_sdk_rejects_invalid_base_url() {
    let config = SdkConfig::builder().base_url("::nope::").build();
    let err = Sdk::new(config).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_endpoint() {
    let config = SdkConfig::builder().base_url("http://localhost:8000/proxy/").build();
    let sdk = Sdk::new(config).unwrap();

    assert_eq!(
        sdk.endpoint(&["api", "v2", "pokemon"]),
        "http://localhost:8000/proxy/api/v2/pokemon"
    );
    assert_eq!(
        sdk.endpoint(&["api", "v2", "pokemon", "type: null"]),
        "http://localhost:8000/proxy/api/v2/pokemon/type:%20null"
    );
}

#[tokio::test]
async fn test_follow_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/ditto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 132,
            "name": "ditto"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sdk = sdk_for(&mock_server);
    let url = sdk.endpoint(&["api", "v2", "pokemon", "ditto"]);
    let value: Value = sdk.follow(&url).await.unwrap();

    assert_eq!(value["name"], "ditto");
    assert_eq!(value["id"], 132);
}

#[tokio::test]
async fn test_follow_relative_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/ability/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "limber"})))
        .mount(&mock_server)
        .await;

    let sdk = sdk_for(&mock_server);
    let value: Value = sdk.follow("/api/v2/ability/7").await.unwrap();

    assert_eq!(value["name"], "limber");
}

#[test_case(300 ; "multiple choices")]
#[test_case(400 ; "bad request")]
#[test_case(404 ; "not found")]
#[test_case(500 ; "internal server error")]
#[test_case(503 ; "service unavailable")]
#[tokio::test]
async fn test_follow_maps_status_to_api_error(status: u16) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
        .mount(&mock_server)
        .await;

    let sdk = sdk_for(&mock_server);
    let err = sdk
        .follow::<Value>("/api/v2/pokemon/missingno")
        .await
        .unwrap_err();

    assert!(err.is_api());
    assert_eq!(err.status(), Some(status));
}

#[tokio::test]
async fn test_follow_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"name\": "))
        .mount(&mock_server)
        .await;

    let sdk = sdk_for(&mock_server);
    let err = sdk.follow::<Value>("/broken").await.unwrap_err();

    assert!(err.is_decode());
    assert!(err.to_string().starts_with("Failed to decode response"));
}

#[tokio::test]
async fn test_follow_transport_error() {
    // Nothing listens on port 1
    let config = SdkConfig::builder().base_url("http://127.0.0.1:1").build();
    let sdk = Sdk::new(config).unwrap();

    let err = sdk.follow::<Value>("/api/v2/pokemon").await.unwrap_err();

    assert!(err.is_transport());
    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_request_returns_raw_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/echo"))
        .and(body_json(json!({"name": "eevee"})))
        .respond_with(ResponseTemplate::new(418).set_body_string("teapot"))
        .mount(&mock_server)
        .await;

    let sdk = sdk_for(&mock_server);
    let response = sdk
        .request(Method::POST, "/api/v2/echo", Some(json!({"name": "eevee"})))
        .await
        .unwrap();

    // request() leaves status handling to the caller
    assert_eq!(response.status, 418);
    assert_eq!(response.text(), "teapot");
}

#[tokio::test]
async fn test_user_agent_from_config() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header("user-agent", "pokedex/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = SdkConfig::builder()
        .base_url(mock_server.uri())
        .user_agent("pokedex/2.0")
        .build();
    let sdk = Sdk::new(config).unwrap();

    let _: Value = sdk.follow("/ua").await.unwrap();
}

#[tokio::test]
async fn test_with_custom_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/custom"))
        .and(header("X-Trainer", "ash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut headers = HeaderMap::new();
    headers.insert("X-Trainer", HeaderValue::from_static("ash"));
    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap();

    let config = SdkConfig::builder().base_url(mock_server.uri()).build();
    let sdk = Sdk::with_client(config, client).unwrap();

    let value: Value = sdk.follow("/custom").await.unwrap();
    assert_eq!(value["ok"], true);
}
