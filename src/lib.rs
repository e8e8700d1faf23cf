//! # Stripe API Rust SDK
//!
//! A Rust SDK for the Stripe REST API, providing type-safe configuration,
//! an async HTTP client with retry handling, and typed resources with
//! automatic pagination.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StripeConfig`] and [`StripeConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - A pluggable transport via the [`Backend`] trait, with [`HttpClient`] as
//!   the default
//! - Form encoding of nested parameters (`shipping[address][city]=...`)
//! - Typed resources in [`rest::resources`] with get, list, create and delete
//! - Cursor pagination via [`rest::ListIter`]
//! - Typed API errors via [`rest::ResourceError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use stripe_api::{ApiKey, ApiVersion, StripeConfig};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .max_network_retries(2)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.api_key().is_test_mode());
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use stripe_api::{ApiKey, RestClient, StripeConfig};
//! use stripe_api::rest::{ListParams, RestResource};
//! use stripe_api::rest::resources::{
//!     BalanceTransaction, BalanceTransactionListParams, CheckoutSession, CheckoutSessionParams,
//! };
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123")?)
//!     .build()?;
//! let client = RestClient::new(&config)?;
//!
//! // Create
//! let params = CheckoutSessionParams {
//!     success_url: Some("https://example.com/success".to_string()),
//!     cancel_url: Some("https://example.com/cancel".to_string()),
//!     ..Default::default()
//! };
//! let session = CheckoutSession::create(&client, &params).await?;
//!
//! // List every balance transaction, ten per request
//! let params = BalanceTransactionListParams {
//!     list: ListParams::new().limit(10),
//!     ..Default::default()
//! };
//! let mut iter = BalanceTransaction::list(&client, &params);
//! while iter.next().await {
//!     let txn = iter.current().unwrap();
//!     println!("{} {}", txn.id, txn.amount);
//! }
//! if let Some(err) = iter.err() {
//!     eprintln!("listing failed: {err}");
//! }
//! ```
//!
//! ## Custom Transports
//!
//! Anything implementing [`Backend`] can carry requests, which is how tests
//! run without a network:
//!
//! ```rust,ignore
//! use stripe_api::{ApiKey, RestClient};
//!
//! let client = RestClient::with_backend(MyBackend::default(), ApiKey::new("sk_test_123")?);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiBase, ApiKey, ApiVersion, StripeConfig, StripeConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Backend, FormError, FormValues, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError,
    MaxHttpRetriesExceededError, RequestOptions, RestClient, RestError,
};

// Re-export the resource layer's core types
pub use rest::{ListIter, ListParams, ResourceError, ResourceResponse, RestResource};
