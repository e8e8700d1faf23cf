//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for REST resource operations, extending
//! the base [`RestError`](crate::clients::RestError) with resource semantics
//! and the structured error body the API returns.
//!
//! # Error Handling
//!
//! The SDK maps responses to semantic error variants:
//!
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **401**: [`ResourceError::Unauthorized`] - Missing or invalid API key
//! - **Other 4xx/5xx with an error body**: [`ResourceError::Api`]
//! - **Malformed response JSON**: [`ResourceError::Decode`]
//! - **Everything else**: [`ResourceError::Http`] / [`ResourceError::Rest`]
//!
//! [`ResourceError::kind`] folds these into the three [`ErrorKind`]s.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::{RestResource, ResourceError};
//!
//! match OrderReturn::get(&client, "orret_123", &()).await {
//!     Ok(order_return) => println!("Amount: {}", order_return.amount),
//!     Err(ResourceError::NotFound { resource, id, .. }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(ResourceError::Api(err)) => {
//!         println!("{}: {} (param {:?})", err.error_type, err.message, err.param);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::clients::{FormError, HttpError, HttpResponseError, RestError};

/// The `type` field of an API error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    /// Problem on the API's side.
    ApiError,
    /// The API could not be reached.
    ApiConnectionError,
    /// The API key was rejected.
    AuthenticationError,
    /// The card could not be charged.
    CardError,
    /// An idempotency key was reused with different parameters.
    IdempotencyError,
    /// The request had invalid parameters.
    InvalidRequestError,
    /// The key lacks permission for this request.
    PermissionError,
    /// Too many requests hit the API too quickly.
    RateLimitError,
    /// A type this version of the SDK does not know.
    #[serde(other)]
    Other,
}

impl ApiErrorType {
    /// Returns the wire name of this error type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApiError => "api_error",
            Self::ApiConnectionError => "api_connection_error",
            Self::AuthenticationError => "authentication_error",
            Self::CardError => "card_error",
            Self::IdempotencyError => "idempotency_error",
            Self::InvalidRequestError => "invalid_request_error",
            Self::PermissionError => "permission_error",
            Self::RateLimitError => "rate_limit_error",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured error returned by the API.
///
/// Parsed from bodies of the form
/// `{"error": {"type": ..., "message": ..., "code": ..., "param": ...}}`.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::{ApiError, ApiErrorType};
/// use serde_json::json;
///
/// let body = json!({"error": {
///     "type": "invalid_request_error",
///     "message": "Missing required param: success_url.",
///     "param": "success_url"
/// }});
///
/// let error = ApiError::from_response(400, &body, Some("req_123")).unwrap();
/// assert_eq!(error.error_type, ApiErrorType::InvalidRequestError);
/// assert_eq!(error.param.as_deref(), Some("success_url"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error_type} ({status}): {message}")]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Category of the error.
    pub error_type: ApiErrorType,
    /// Short machine-readable code, e.g. `resource_missing`.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// The parameter the error relates to.
    pub param: Option<String>,
    /// Issuer decline reason for card errors.
    pub decline_code: Option<String>,
    /// Link to documentation about this error code.
    pub doc_url: Option<String>,
    /// Charge id for card errors.
    pub charge: Option<String>,
    /// Request id for support.
    pub request_id: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "type")]
    error_type: ApiErrorType,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    param: Option<String>,
    #[serde(default)]
    decline_code: Option<String>,
    #[serde(default)]
    doc_url: Option<String>,
    #[serde(default)]
    charge: Option<String>,
}

impl ApiError {
    /// Parses an error body, returning `None` if it has no `error.type`.
    #[must_use]
    pub fn from_response(
        status: u16,
        body: &serde_json::Value,
        request_id: Option<&str>,
    ) -> Option<Self> {
        let envelope = ApiErrorEnvelope::deserialize(body).ok()?;
        let error = envelope.error;
        Some(Self {
            status,
            error_type: error.error_type,
            code: error.code,
            message: error.message.unwrap_or_default(),
            param: error.param,
            decline_code: error.decline_code,
            doc_url: error.doc_url,
            charge: error.charge,
            request_id: request_id.map(ToString::to_string),
        })
    }
}

/// Coarse classification of a [`ResourceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request was not built, not delivered, or not authenticated.
    Transport,
    /// The API answered with an error (including not found).
    Api,
    /// The API answered but the body did not decode.
    Decode,
}

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::{ErrorKind, ResourceError};
///
/// let error = ResourceError::NotFound {
///     resource: "OrderReturn",
///     id: "orret_123".to_string(),
///     request_id: None,
/// };
/// assert!(error.to_string().contains("orret_123"));
/// assert_eq!(error.kind(), ErrorKind::Api);
/// assert!(error.is_not_found());
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "OrderReturn").
        resource: &'static str,
        /// The id that was requested.
        id: String,
        /// Request id for support.
        request_id: Option<String>,
    },

    /// The API key was missing or rejected (HTTP 401).
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Message returned by the API.
        message: String,
        /// Request id for support.
        request_id: Option<String>,
    },

    /// The API returned a structured error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No valid path matches the provided ids and operation.
    ///
    /// Returned when a resource does not support the operation, or when the
    /// required parent ids are missing.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "get", "list", "delete").
        operation: &'static str,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode {resource} response: {message}")]
    Decode {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying serde message.
        message: String,
    },

    /// The request parameters could not be form-encoded.
    #[error(transparent)]
    Form(#[from] FormError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Maps an HTTP error to a resource error.
    ///
    /// - 404 -> `NotFound`
    /// - 401 -> `Unauthorized`
    /// - other responses with an error body -> `Api`
    /// - anything else -> `Http`
    ///
    /// # Example
    ///
    /// ```rust
    /// use stripe_api::clients::{HttpError, HttpResponseError};
    /// use stripe_api::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http_error(
    ///     HttpError::Response(HttpResponseError {
    ///         code: 404,
    ///         message: "No such checkout session".to_string(),
    ///         error_reference: Some("req_1".to_string()),
    ///         body: json!({"error": {"type": "invalid_request_error"}}),
    ///     }),
    ///     "CheckoutSession",
    ///     Some("cs_123"),
    /// );
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_http_error(error: HttpError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            HttpError::Response(response) => Self::from_response_error(response, resource, id),
            other => Self::Http(other),
        }
    }

    /// Maps a REST client error to a resource error.
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(http) => Self::from_http_error(http, resource, id),
            other => Self::Rest(other),
        }
    }

    fn from_response_error(
        response: HttpResponseError,
        resource: &'static str,
        id: Option<&str>,
    ) -> Self {
        match response.code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
                request_id: response.error_reference,
            },
            401 => Self::Unauthorized {
                message: response.message,
                request_id: response.error_reference,
            },
            code => ApiError::from_response(
                code,
                &response.body,
                response.error_reference.as_deref(),
            )
            .map_or(Self::Http(HttpError::Response(response)), Self::Api),
        }
    }

    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } | Self::Api(_) => ErrorKind::Api,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Http(HttpError::Response(_) | HttpError::MaxRetries(_)) => ErrorKind::Api,
            Self::Unauthorized { .. }
            | Self::PathResolutionFailed { .. }
            | Self::Form(_)
            | Self::Http(_)
            | Self::Rest(_) => ErrorKind::Transport,
        }
    }

    /// Returns `true` for [`ResourceError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the request id if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { request_id, .. } | Self::Unauthorized { request_id, .. } => {
                request_id.as_deref()
            }
            Self::Api(e) => e.request_id.as_deref(),
            Self::Http(HttpError::Response(e))
            | Self::Rest(RestError::Http(HttpError::Response(e))) => e.error_reference.as_deref(),
            Self::Http(HttpError::MaxRetries(e))
            | Self::Rest(RestError::Http(HttpError::MaxRetries(e))) => {
                e.error_reference.as_deref()
            }
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
