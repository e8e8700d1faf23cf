//! Integration tests for the REST API client functionality.
//!
//! These tests verify the REST client construction, path normalization,
//! version overrides, per-request options, and error handling.

use serde_json::json;
use stripe_api::clients::rest::{RequestOptions, RestClient, RestError};
use stripe_api::clients::FormValues;
use stripe_api::{ApiBase, ApiKey, ApiVersion, StripeConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a configuration pointing at the mock server.
fn config_for(server: &MockServer) -> StripeConfig {
    StripeConfig::builder()
        .api_key(ApiKey::new("sk_test_123").unwrap())
        .api_base(ApiBase::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

// ============================================================================
// RestClient Construction Tests
// ============================================================================

#[test]
fn test_rest_client_creates_without_override() {
    let config = StripeConfig::builder()
        .api_key(ApiKey::new("sk_test_123").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();

    assert!(client.api_version_override().is_none());
    assert_eq!(client.api_key().as_ref(), "sk_test_123");
    assert_eq!(client.backend().base_uri(), ApiBase::DEFAULT);
}

#[test]
fn test_rest_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
}

#[tokio::test]
async fn test_version_override_replaces_configured_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/exchange_rates"))
        .and(header("stripe-version", "2018-11-08"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::with_version(&config_for(&server), ApiVersion::V2018_11_08).unwrap();
    assert_eq!(client.api_version_override(), Some(&ApiVersion::V2018_11_08));

    client.get("exchange_rates", None, None).await.unwrap();
}

// ============================================================================
// Path Normalization Tests
// ============================================================================

#[tokio::test]
async fn test_paths_are_normalized_under_v1() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/exchange_rates/usd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "usd"})))
        .expect(3)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server)).unwrap();

    for p in ["exchange_rates/usd", "/exchange_rates/usd", "/v1/exchange_rates/usd"] {
        let response = client.get(p, None, None).await.unwrap();
        assert_eq!(response.body["id"], "usd");
    }
}

#[tokio::test]
async fn test_empty_path_is_rejected() {
    let server = MockServer::start().await;
    let client = RestClient::new(&config_for(&server)).unwrap();

    let result = client.get("/v1/", None, None).await;

    assert!(matches!(result, Err(RestError::InvalidPath { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Request Option Tests
// ============================================================================

#[tokio::test]
async fn test_per_request_connected_account() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/terminal/connection_tokens"))
        .and(header("stripe-account", "acct_456"))
        .and(header("idempotency-key", "token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"secret": "pst"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server)).unwrap();
    let options = RequestOptions::new()
        .stripe_account("acct_456")
        .idempotency_key("token-1");

    client
        .post("terminal/connection_tokens", None, Some(&options))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_sends_form_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/customers/cus_123/discount"))
        .and(query_param("expand[0]", "coupon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server)).unwrap();
    let mut form = FormValues::new();
    form.add("expand[0]", "coupon");

    client
        .delete("customers/cus_123/discount", Some(form), None)
        .await
        .unwrap();
}

// ============================================================================
// Error Type Tests
// ============================================================================

#[test]
fn test_rest_error_invalid_path_message() {
    let error = RestError::InvalidPath {
        path: String::new(),
    };

    assert!(error.to_string().contains("Invalid REST API path"));
}

#[tokio::test]
async fn test_http_errors_are_wrapped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/order_returns/orret_1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": {
            "type": "invalid_request_error",
            "message": "No such order return"
        }})))
        .mount(&server)
        .await;

    let client = RestClient::new(&config_for(&server)).unwrap();
    let err = client
        .get("order_returns/orret_1", None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, RestError::Http(_)));
    assert!(err.to_string().contains("No such order return"));
}
