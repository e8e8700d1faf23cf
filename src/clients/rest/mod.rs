//! REST API client for the Stripe API.
//!
//! This module provides a higher-level client built on top of a
//! [`Backend`](crate::clients::Backend) that offers convenient methods for
//! the `/v1` REST API.
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `delete()` methods
//! - [`RequestOptions`]: Per-request idempotency key and connected account
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::{ApiKey, RestClient, StripeConfig};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123")?)
//!     .build()?;
//!
//! let client = RestClient::new(&config)?;
//! let response = client.get("exchange_rates/usd", None, None).await?;
//! println!("Rates: {}", response.body["rates"]);
//! ```
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/charges` -> `charges`
//! - Every path is placed under `/v1/`: `charges` -> `/v1/charges`
//! - Paths that already carry the prefix are left alone: `/v1/charges` -> `/v1/charges`
//!
//! # Retry Behavior
//!
//! Retries are configured once through
//! [`StripeConfigBuilder::max_network_retries`](crate::config::StripeConfigBuilder::max_network_retries)
//! and applied by the transport on 429 and 500 responses.

mod client;
mod errors;

pub use client::{RequestOptions, RestClient};
pub use errors::RestError;
