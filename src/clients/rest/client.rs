//! REST client implementation for the Stripe API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with automatic path normalization.

use crate::clients::rest::RestError;
use crate::clients::{Backend, FormValues, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiKey, ApiVersion, StripeConfig};

/// Options that apply to a single request.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::RequestOptions;
///
/// let options = RequestOptions::new()
///     .idempotency_key("order-42-return")
///     .stripe_account("acct_123");
///
/// assert_eq!(options.idempotency_key.as_deref(), Some("order-42-return"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Sent as `Idempotency-Key`; makes a POST safe to repeat.
    pub idempotency_key: Option<String>,
    /// Sent as `Stripe-Account`; overrides the configured connected account.
    pub stripe_account: Option<String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the idempotency key.
    #[must_use]
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Sets the connected account.
    #[must_use]
    pub fn stripe_account(mut self, account: impl Into<String>) -> Self {
        self.stripe_account = Some(account.into());
        self
    }
}

/// REST API client for the Stripe API.
///
/// Binds a [`Backend`] to an API key. Every resource operation in
/// [`crate::rest`] goes through one of these.
///
/// # Thread Safety
///
/// `RestClient<HttpClient>` is `Send + Sync`, making it safe to share across
/// async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_api::{ApiKey, RestClient, StripeConfig};
/// use stripe_api::clients::FormValues;
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123")?)
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// // GET request
/// let response = client.get("order_returns/orret_123", None, None).await?;
///
/// // POST request with a form body
/// let mut form = FormValues::new();
/// form.add("report_type", "activity.summary.1");
/// let response = client.post("reporting/report_runs", Some(form), None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient<B = HttpClient> {
    backend: B,
    api_key: ApiKey,
    api_version: Option<ApiVersion>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient<HttpClient> {
    /// Creates a new REST client backed by an [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &StripeConfig) -> Result<Self, RestError> {
        let backend = HttpClient::new(config)?;
        Ok(Self::with_backend(backend, config.api_key().clone()))
    }

    /// Creates a new REST client that sends a different API version than
    /// the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn with_version(config: &StripeConfig, version: ApiVersion) -> Result<Self, RestError> {
        let config_version = config.api_version();
        if &version == config_version {
            tracing::debug!(
                "Rest client has a redundant API version override to the default {}",
                config_version
            );
        } else {
            tracing::debug!(
                "Rest client overriding default API version {} with {}",
                config_version,
                version
            );
        }

        let mut client = Self::new(config)?;
        client.api_version = Some(version);
        Ok(client)
    }
}

impl<B: Backend> RestClient<B> {
    /// Creates a REST client on top of any backend.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let client = RestClient::with_backend(MockBackend::default(), ApiKey::new("sk_test_123")?);
    /// ```
    #[must_use]
    pub const fn with_backend(backend: B, api_key: ApiKey) -> Self {
        Self {
            backend,
            api_key,
            api_version: None,
        }
    }

    /// Returns the backend requests are sent through.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the API key requests are authenticated with.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API version this client sends instead of the configured one.
    #[must_use]
    pub const fn api_version_override(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = FormValues::new();
    /// query.add("limit", "3");
    /// let response = client.get("balance_transactions", Some(query), None).await?;
    /// ```
    pub async fn get(
        &self,
        path: &str,
        query: Option<FormValues>,
        options: Option<&RequestOptions>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Get, path, query, options).await
    }

    /// Sends a POST request with a form body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: Option<FormValues>,
        options: Option<&RequestOptions>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Post, path, body, options).await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<FormValues>,
        options: Option<&RequestOptions>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Delete, path, query, options).await
    }

    /// Builds and sends a request.
    ///
    /// `form` goes in the body for POST and in the query string otherwise.
    /// Empty forms are not sent.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        form: Option<FormValues>,
        options: Option<&RequestOptions>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(form) = form.filter(|f| !f.is_empty()) {
            builder = match method {
                HttpMethod::Post => builder.body(form),
                HttpMethod::Get | HttpMethod::Delete => builder.query(form),
            };
        }

        if let Some(version) = &self.api_version {
            builder = builder.header("Stripe-Version", version.to_string());
        }

        if let Some(options) = options {
            if let Some(key) = &options.idempotency_key {
                builder = builder.idempotency_key(key.clone());
            }
            if let Some(account) = &options.stripe_account {
                builder = builder.stripe_account(account.clone());
            }
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.backend
            .call(&self.api_key, request)
            .await
            .map_err(Into::into)
    }
}

/// Normalizes a REST API path to an absolute `/v1/` path.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(normalize_path("charges")?, "/v1/charges");
/// assert_eq!(normalize_path("/charges")?, "/v1/charges");
/// assert_eq!(normalize_path("/v1/charges")?, "/v1/charges");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_prefix("v1/").unwrap_or(trimmed);
    let trimmed = trimmed.trim_start_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("/v1/{trimmed}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpError;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingBackend {
        requests: Mutex<Vec<(String, HttpRequest)>>,
    }

    impl Backend for RecordingBackend {
        async fn call(
            &self,
            key: &ApiKey,
            request: HttpRequest,
        ) -> Result<HttpResponse, HttpError> {
            self.requests
                .lock()
                .unwrap()
                .push((key.as_ref().to_string(), request));
            Ok(HttpResponse::new(200, HashMap::new(), json!({"ok": true})))
        }
    }

    fn client() -> RestClient<RecordingBackend> {
        RestClient::with_backend(
            RecordingBackend::default(),
            ApiKey::new("sk_test_123").unwrap(),
        )
    }

    fn form(pairs: &[(&str, &str)]) -> FormValues {
        pairs.iter().copied().collect()
    }

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_adds_version_prefix() {
        assert_eq!(normalize_path("charges").unwrap(), "/v1/charges");
        assert_eq!(normalize_path("/charges").unwrap(), "/v1/charges");
        assert_eq!(normalize_path("//charges").unwrap(), "/v1/charges");
    }

    #[test]
    fn test_normalize_path_keeps_existing_prefix() {
        assert_eq!(normalize_path("/v1/charges").unwrap(), "/v1/charges");
        assert_eq!(normalize_path("v1/checkout/sessions").unwrap(), "/v1/checkout/sessions");
    }

    #[test]
    fn test_normalize_path_rejects_empty_paths() {
        for path in ["", "/", "/v1/", "v1/"] {
            assert!(
                matches!(normalize_path(path), Err(RestError::InvalidPath { .. })),
                "{path:?} should be rejected"
            );
        }
    }

    // === Request Building Tests ===

    #[tokio::test]
    async fn test_get_sends_form_as_query() {
        let client = client();
        client
            .get("balance_transactions", Some(form(&[("limit", "3")])), None)
            .await
            .unwrap();

        let requests = client.backend().requests.lock().unwrap();
        let (key, request) = &requests[0];
        assert_eq!(key, "sk_test_123");
        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/v1/balance_transactions");
        assert_eq!(request.query.as_ref().unwrap().get("limit"), Some("3"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_post_sends_form_as_body_with_options() {
        let client = client();
        let options = RequestOptions::new()
            .idempotency_key("idem-1")
            .stripe_account("acct_123");
        client
            .post(
                "/v1/reporting/report_runs",
                Some(form(&[("report_type", "activity.summary.1")])),
                Some(&options),
            )
            .await
            .unwrap();

        let requests = client.backend().requests.lock().unwrap();
        let (_, request) = &requests[0];
        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(
            request.body.as_ref().unwrap().get("report_type"),
            Some("activity.summary.1")
        );
        assert!(request.query.is_none());
        assert_eq!(request.header("Idempotency-Key"), Some("idem-1"));
        assert_eq!(request.header("Stripe-Account"), Some("acct_123"));
    }

    #[tokio::test]
    async fn test_empty_form_is_not_sent() {
        let client = client();
        client
            .delete("customers/cus_123/discount", Some(FormValues::new()), None)
            .await
            .unwrap();

        let requests = client.backend().requests.lock().unwrap();
        assert!(requests[0].1.query.is_none());
        assert!(requests[0].1.extra_headers.is_none());
    }

    #[tokio::test]
    async fn test_invalid_path_never_reaches_backend() {
        let client = client();
        let result = client.get("/", None, None).await;

        assert!(matches!(result, Err(RestError::InvalidPath { .. })));
        assert!(client.backend().requests.lock().unwrap().is_empty());
    }

    // === RestClient Construction Tests ===

    #[test]
    fn test_rest_client_new_has_no_version_override() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .build()
            .unwrap();
        let client = RestClient::new(&config).unwrap();

        assert!(client.api_version_override().is_none());
        assert_eq!(client.api_key().as_ref(), "sk_test_123");
    }

    #[tokio::test]
    async fn test_with_version_sends_version_header() {
        let config = StripeConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .build()
            .unwrap();
        let http = RestClient::with_version(&config, ApiVersion::V2019_02_19).unwrap();
        assert_eq!(http.api_version_override(), Some(&ApiVersion::V2019_02_19));

        let recording = RestClient {
            api_version: Some(ApiVersion::V2019_02_19),
            ..client()
        };
        recording.get("order_returns", None, None).await.unwrap();
        let requests = recording.backend().requests.lock().unwrap();
        assert_eq!(requests[0].1.header("Stripe-Version"), Some("2019-02-19"));
    }
}
