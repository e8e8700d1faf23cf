//! HTTP request types for the Stripe API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Stripe API.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::form::FormValues;

/// HTTP methods used by the Stripe API.
///
/// Updates are POSTs, so there is no PUT.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// The content type of request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// An HTTP request to be sent to the Stripe API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::{FormValues, HttpRequest, HttpMethod};
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "/v1/order_returns/orret_123")
///     .build()
///     .unwrap();
///
/// let mut form = FormValues::new();
/// form.add("report_type", "activity.summary.1");
/// let post_request = HttpRequest::builder(HttpMethod::Post, "/v1/reporting/report_runs")
///     .body(form)
///     .idempotency_key("a-unique-key")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute path (for example `/v1/checkout/sessions`).
    pub path: String,
    /// Form-encoded body, POST only.
    pub body: Option<FormValues>,
    /// Query string parameters.
    pub query: Option<FormValues>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Number of times to attempt the request (default: 1).
    pub tries: u32,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` does not start with `/`
    /// - `body` is `Some` on a GET or DELETE request
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !self.path.starts_with('/') {
            return Err(InvalidHttpRequestError::InvalidPath {
                path: self.path.clone(),
            });
        }

        if self.body.is_some() && self.http_method != HttpMethod::Post {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the extra header with this name, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.extra_headers.as_ref().and_then(|headers| {
            headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        })
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<FormValues>,
    query: Option<FormValues>,
    extra_headers: Option<HashMap<String, String>>,
    tries: u32,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
            extra_headers: None,
            tries: 1,
        }
    }

    /// Sets the form body. Only valid for POST.
    #[must_use]
    pub fn body(mut self, body: FormValues) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: FormValues) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(FormValues::new)
            .add(key, value);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the `Idempotency-Key` header.
    #[must_use]
    pub fn idempotency_key(self, key: impl Into<String>) -> Self {
        self.header("Idempotency-Key", key)
    }

    /// Sets the `Stripe-Account` header for this request only.
    #[must_use]
    pub fn stripe_account(self, account: impl Into<String>) -> Self {
        self.header("Stripe-Account", account)
    }

    /// Sets the number of times to attempt the request.
    ///
    /// Default is 1 (no retries).
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            tries: self.tries,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/v1/exchange_rates/usd")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/v1/exchange_rates/usd");
        assert!(request.body.is_none());
        assert!(request.query.is_none());
        assert_eq!(request.tries, 1);
    }

    #[test]
    fn test_builder_creates_post_with_body() {
        let mut form = FormValues::new();
        form.add("success_url", "https://example.com/success");

        let request = HttpRequest::builder(HttpMethod::Post, "/v1/checkout/sessions")
            .body(form)
            .build()
            .unwrap();

        assert_eq!(
            request.body.unwrap().get("success_url"),
            Some("https://example.com/success")
        );
    }

    #[test]
    fn test_post_without_body_is_allowed() {
        let request = HttpRequest::builder(HttpMethod::Post, "/v1/terminal/connection_tokens")
            .build()
            .unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_verify_rejects_body_on_get_and_delete() {
        let result = HttpRequest::builder(HttpMethod::Get, "/v1/order_returns")
            .body(FormValues::new())
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::BodyNotAllowed { method }) if method == "get"
        ));

        let result = HttpRequest::builder(HttpMethod::Delete, "/v1/customers/cus_123/discount")
            .body(FormValues::new())
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::BodyNotAllowed { method }) if method == "delete"
        ));
    }

    #[test]
    fn test_verify_rejects_relative_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "v1/order_returns").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidPath { path }) if path == "v1/order_returns"
        ));
    }

    #[test]
    fn test_builder_with_query_params() {
        let request = HttpRequest::builder(HttpMethod::Get, "/v1/balance_transactions")
            .query_param("limit", "3")
            .query_param("starting_after", "txn_123")
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("limit"), Some("3"));
        assert_eq!(query.get("starting_after"), Some("txn_123"));
    }

    #[test]
    fn test_builder_with_request_headers() {
        let request = HttpRequest::builder(HttpMethod::Post, "/v1/reporting/report_runs")
            .idempotency_key("key-1")
            .stripe_account("acct_123")
            .build()
            .unwrap();

        assert_eq!(request.header("idempotency-key"), Some("key-1"));
        assert_eq!(request.header("Stripe-Account"), Some("acct_123"));
        assert_eq!(request.header("X-Missing"), None);
    }
}
