//! HTTP client types for Stripe API communication.
//!
//! This module provides the foundational HTTP layer for making authenticated
//! requests to the Stripe API. It handles request/response processing, form
//! encoding, retry logic, and Stripe-specific headers.
//!
//! # Overview
//!
//! - [`Backend`]: The transport contract used by the resource layer
//! - [`HttpClient`]: The async HTTP client, the default [`Backend`]
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`FormValues`] and [`to_form_values`]: bracket-path form encoding
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Retry Behavior
//!
//! The client retries transient failures when
//! [`StripeConfig::max_network_retries`](crate::StripeConfig::max_network_retries)
//! is greater than zero:
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! Retried POSTs carry an `Idempotency-Key`, generated when the caller did not
//! supply one.

mod backend;
mod errors;
mod form;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use backend::Backend;
pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use form::{to_form_values, FormError, FormValues};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, FORM_CONTENT_TYPE};
pub use http_response::HttpResponse;

pub use rest::{RequestOptions, RestClient, RestError};
