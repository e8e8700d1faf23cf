//! The transport contract used by the REST layer.
//!
//! Everything above this module talks to the API through [`Backend`]. The
//! default implementation is [`HttpClient`](crate::clients::HttpClient);
//! tests substitute an in-memory implementation.

use std::future::Future;
use std::sync::Arc;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::ApiKey;

/// Performs authenticated HTTP requests.
///
/// An implementation sends `request` authenticated with `key` and resolves
/// to the decoded response. Non-2xx responses must resolve to
/// [`HttpError::Response`] carrying the status code and decoded body, so the
/// resource layer can map them to typed errors.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use serde_json::json;
/// use stripe_api::clients::{Backend, HttpError, HttpRequest, HttpResponse};
/// use stripe_api::ApiKey;
///
/// struct Canned;
///
/// impl Backend for Canned {
///     async fn call(&self, _key: &ApiKey, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(200, HashMap::new(), json!({"id": "txn_123"})))
///     }
/// }
/// ```
pub trait Backend: Send + Sync {
    /// Sends one request and returns its response.
    fn call(
        &self,
        key: &ApiKey,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}

impl<B: Backend> Backend for Arc<B> {
    fn call(
        &self,
        key: &ApiKey,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
        (**self).call(key, request)
    }
}

impl<B: Backend> Backend for &B {
    fn call(
        &self,
        key: &ApiKey,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
        (**self).call(key, request)
    }
}
