//! Response wrapper for REST resource operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines
//! resource data with response metadata. The wrapper implements `Deref` for
//! ergonomic access to the inner data.
//!
//! # Deref Pattern
//!
//! ```rust,ignore
//! let session = CheckoutSession::get(&client, "cs_123", &()).await?;
//!
//! // Fields of CheckoutSession through Deref
//! println!("{:?}", session.success_url);
//!
//! // Metadata of the response
//! println!("request {:?}", session.request_id());
//!
//! // Take ownership of inner data
//! let session: CheckoutSession = session.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::HttpResponse;
use crate::rest::ResourceError;

/// A response from a REST resource operation.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(vec!["txn_1", "txn_2"], Some("req_123".to_string()));
///
/// assert_eq!(response.len(), 2);
/// assert_eq!(response.request_id(), Some("req_123"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and request id.
    #[must_use]
    pub const fn new(data: T, request_id: Option<String>) -> Self {
        Self { data, request_id }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the `Request-Id` of the response.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes the body of an HTTP response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body does not match `T`.
    pub fn from_http_response(
        response: HttpResponse,
        resource: &'static str,
    ) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);

        let data: T =
            serde_json::from_value(response.body).map_err(|e| ResourceError::Decode {
                resource,
                message: e.to_string(),
            })?;

        Ok(Self { data, request_id })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
