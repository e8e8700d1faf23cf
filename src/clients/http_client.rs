//! HTTP client for Stripe API communication.
//!
//! This module provides the [`HttpClient`] type, the default [`Backend`]
//! implementation, for making authenticated requests with automatic retry
//! handling.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::backend::Backend;
use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest, FORM_CONTENT_TYPE};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiKey, StripeConfig};

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Longest `Retry-After` wait honored, in seconds.
pub const MAX_RETRY_AFTER: u64 = 60;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Stripe API.
///
/// The client handles:
/// - URL construction from the configured API base
/// - Default headers (`User-Agent`, `Stripe-Version`, `Stripe-Account`)
/// - Bearer authentication with the key passed to each call
/// - Automatic retry logic for 429 and 500 responses
/// - Generated idempotency keys for retried POSTs
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_api::{ApiKey, StripeConfig};
/// use stripe_api::clients::{Backend, HttpClient, HttpMethod, HttpRequest};
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/v1/exchange_rates/usd").build()?;
/// let response = client.call(config.api_key(), request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.stripe.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Retries applied to every request on 429 and 500.
    max_network_retries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (for example when TLS initialization fails).
    pub fn new(config: &StripeConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Stripe/v1 RustBindings/{SDK_VERSION}");

        let client_user_agent = serde_json::json!({
            "bindings_version": SDK_VERSION,
            "lang": "rust",
            "publisher": "stripe-api-rust",
        });

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "X-Stripe-Client-User-Agent".to_string(),
            client_user_agent.to_string(),
        );
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Stripe-Version".to_string(),
            config.api_version().to_string(),
        );
        if let Some(account) = config.stripe_account() {
            default_headers.insert("Stripe-Account".to_string(), account.to_string());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_uri: config.api_base().as_ref().to_string(),
            default_headers,
            max_network_retries: config.max_network_retries(),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the configured number of network retries.
    #[must_use]
    pub const fn max_network_retries(&self) -> u32 {
        self.max_network_retries
    }

    /// Sends an HTTP request to the Stripe API.
    ///
    /// The request is attempted `max(request.tries, max_network_retries + 1)`
    /// times while the server answers 429 or 500.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    pub async fn request(
        &self,
        key: &ApiKey,
        request: HttpRequest,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);
        let max_tries = request.tries.max(self.max_network_retries.saturating_add(1));

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }
        if request.http_method == HttpMethod::Post
            && max_tries > 1
            && request.header("Idempotency-Key").is_none()
        {
            headers.insert("Idempotency-Key".to_string(), generate_idempotency_key());
        }

        let body = request.body.as_ref().map(crate::clients::FormValues::encode);
        let query: Vec<(&str, &str)> = request
            .query
            .as_ref()
            .map(|q| q.iter().collect())
            .unwrap_or_default();

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            req_builder = req_builder.bearer_auth(key.as_ref());
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }
            if !query.is_empty() {
                req_builder = req_builder.query(&query);
            }
            if request.http_method == HttpMethod::Post {
                req_builder = req_builder
                    .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                    .body(body.clone().unwrap_or_default());
            }

            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                attempt = tries,
                "Sending Stripe API request"
            );

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;

            // Bodies that are not JSON are kept as a string so decoding fails loudly.
            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text)
                    .unwrap_or(serde_json::Value::String(body_text))
            };

            let response = HttpResponse::new(code, res_headers, body);

            tracing::debug!(
                status = code,
                request_id = response.request_id().unwrap_or_default(),
                "Received Stripe API response"
            );

            if response.is_ok() {
                return Ok(response);
            }

            let error_message = Self::error_message(&response);
            let error_reference = response.request_id().map(String::from);

            let should_retry = code == 429 || code == 500;
            if !should_retry {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    error_reference,
                    body: response.body,
                }));
            }

            if tries >= max_tries {
                if max_tries == 1 {
                    return Err(HttpError::Response(HttpResponseError {
                        code,
                        message: error_message,
                        error_reference,
                        body: response.body,
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: max_tries,
                    message: error_message,
                    error_reference,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                status = code,
                attempt = tries,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Retrying Stripe API request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        if status == 429 {
            // Values a `Duration` cannot hold, or above the cap, use the fixed wait.
            // Infinite, negative or oversized values fall back to the fixed wait.
            if let Some(delay) = response
                .retry_request_after
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .filter(|delay| *delay <= Duration::from_secs(MAX_RETRY_AFTER))
            {
                return delay;
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Picks a readable message out of an error response.
    fn error_message(response: &HttpResponse) -> String {
        if let Some(message) = response
            .body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(serde_json::Value::as_str)
        {
            return message.to_string();
        }
        if let Some(raw) = response.body.as_str() {
            return raw.to_string();
        }
        format!("Request failed with status {}", response.code)
    }
}

impl Backend for HttpClient {
    async fn call(&self, key: &ApiKey, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.request(key, request).await
    }
}

/// Generates a random idempotency key.
fn generate_idempotency_key() -> String {
    let bits: u128 = rand::random();
    let hex = format!("{bits:032x}");
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiBase, ApiVersion};
    use serde_json::json;

    fn config() -> StripeConfig {
        StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_uses_configured_api_base() {
        let client = HttpClient::new(&config()).unwrap();
        assert_eq!(client.base_uri(), "https://api.stripe.com");

        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .api_base(ApiBase::new("http://localhost:12111/").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.base_uri(), "http://localhost:12111");
    }

    #[test]
    fn test_default_headers() {
        let client = HttpClient::new(&config()).unwrap();
        let headers = client.default_headers();

        let user_agent = headers.get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Stripe/v1 RustBindings/"));
        assert_eq!(
            headers.get("Stripe-Version"),
            Some(&ApiVersion::latest().to_string())
        );
        assert_eq!(
            headers.get("Accept"),
            Some(&"application/json".to_string())
        );
        assert!(headers.get("Stripe-Account").is_none());
        assert!(!headers.contains_key("Authorization"));
    }

    #[test]
    fn test_client_user_agent_is_json() {
        let client = HttpClient::new(&config()).unwrap();
        let raw = client
            .default_headers()
            .get("X-Stripe-Client-User-Agent")
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed["lang"], "rust");
        assert_eq!(parsed["bindings_version"], SDK_VERSION);
    }

    #[test]
    fn test_user_agent_prefix_and_connected_account() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .stripe_account("acct_123")
            .max_network_retries(2)
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | Stripe/v1"));
        assert_eq!(
            client.default_headers().get("Stripe-Account"),
            Some(&"acct_123".to_string())
        );
        assert_eq!(client.max_network_retries(), 2);
    }

    #[test]
    fn test_error_message_prefers_stripe_error_message() {
        let response = HttpResponse::new(
            400,
            HashMap::new(),
            json!({"error": {"message": "Invalid currency: xyz", "type": "invalid_request_error"}}),
        );
        assert_eq!(HttpClient::error_message(&response), "Invalid currency: xyz");

        let response = HttpResponse::new(502, HashMap::new(), json!("Bad Gateway"));
        assert_eq!(HttpClient::error_message(&response), "Bad Gateway");

        let response = HttpResponse::new(503, HashMap::new(), json!({}));
        assert_eq!(
            HttpClient::error_message(&response),
            "Request failed with status 503"
        );
    }

    #[test]
    fn test_retry_delay_uses_retry_after_only_for_429() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["0.25".to_string()]);
        let response = HttpResponse::new(429, headers.clone(), json!({}));
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 429),
            Duration::from_millis(250)
        );

        let response = HttpResponse::new(500, headers, json!({}));
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 500),
            Duration::from_secs(RETRY_WAIT_TIME)
        );
    }

    #[test]
    fn test_retry_delay_ignores_unusable_retry_after() {
        for value in ["inf", "NaN", "1e30", "-5", "3600"] {
            let mut headers = HashMap::new();
            headers.insert("retry-after".to_string(), vec![value.to_string()]);
            let response = HttpResponse::new(429, headers, json!({}));
            assert_eq!(
                HttpClient::calculate_retry_delay(&response, 429),
                Duration::from_secs(RETRY_WAIT_TIME),
                "retry-after: {value}"
            );
        }
    }

    #[test]
    fn test_generated_idempotency_keys_are_unique_and_uuid_shaped() {
        let a = generate_idempotency_key();
        let b = generate_idempotency_key();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        assert_eq!(a.matches('-').count(), 4);
    }
}
