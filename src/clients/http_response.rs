//! HTTP response types for the Stripe API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing API response
//! data and the Stripe-specific headers that come with it.

use std::collections::HashMap;

/// An HTTP response from the Stripe API.
///
/// Header names are stored lowercased; a header may have multiple values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Retry-After` header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Request-Id` header value, if present.
    ///
    /// Include this id when contacting support about a failed request.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("request-id")
    }

    /// Returns the `Idempotency-Key` echoed by the server, if present.
    #[must_use]
    pub fn idempotency_key(&self) -> Option<&str> {
        self.header("idempotency-key")
    }

    /// Returns the server's `Stripe-Should-Retry` hint, if present.
    #[must_use]
    pub fn should_retry(&self) -> Option<bool> {
        match self.header("stripe-should-retry") {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }
}
