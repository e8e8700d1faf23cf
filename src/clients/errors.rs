//! HTTP-specific error types for the Stripe API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors, retry exhaustion, and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`MaxHttpRetriesExceededError`]: When retry attempts are exhausted
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::clients::{Backend, HttpError};
//!
//! match client.call(&key, request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::MaxRetries(e)) => {
//!         println!("Retries exhausted after {} tries", e.tries);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// `message` is the `error.message` field of a Stripe error body when there is
/// one, otherwise the raw body text. The full decoded body is kept in `body`
/// so higher layers can extract the structured error.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "No such order return: 'orret_123'".to_string(),
///     error_reference: Some("req_123".to_string()),
///     body: json!({"error": {"type": "invalid_request_error"}}),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable error message.
    pub message: String,
    /// Request id for error reporting (from the `Request-Id` header).
    pub error_reference: Option<String>,
    /// The decoded response body.
    pub body: serde_json::Value,
}

/// Error returned when maximum retry attempts have been exhausted.
///
/// This error is raised when a request continues to fail with 429 or 500
/// responses after all configured retry attempts have been made.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::MaxHttpRetriesExceededError;
///
/// let error = MaxHttpRetriesExceededError {
///     code: 429,
///     tries: 3,
///     message: "Too many requests".to_string(),
///     error_reference: None,
/// };
///
/// assert!(error.to_string().starts_with("Exceeded maximum retry count of 3"));
/// ```
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Error message from the last response.
    pub message: String,
    /// Request id of the last response.
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A body was attached to a method that sends parameters in the query string.
    #[error("Cannot send a request body with {method}. Use query parameters instead.")]
    BodyNotAllowed {
        /// The HTTP method the body was attached to.
        method: String,
    },

    /// The request path is not absolute.
    #[error("Invalid request path '{path}'. Paths must start with '/'.")]
    InvalidPath {
        /// The rejected path.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use stripe_api::HttpError;
///
/// match result {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* handle API error */ }
///     Err(HttpError::MaxRetries(e)) => { /* handle retry exhaustion */ }
///     Err(HttpError::InvalidRequest(e)) => { /* handle validation error */ }
///     Err(HttpError::Network(e)) => { /* handle network error */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}
