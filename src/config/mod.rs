//! Configuration types for the Stripe API SDK.
//!
//! This module provides the configuration passed to a client at construction.
//! There is no process-wide state: every client owns the configuration it was
//! built from.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StripeConfig`]: The main configuration struct holding all SDK settings
//! - [`StripeConfigBuilder`]: A builder for constructing [`StripeConfig`] instances
//! - [`ApiKey`]: A validated API key with masked debug output
//! - [`ApiBase`]: A validated API base URL
//! - [`ApiVersion`]: The Stripe API version to send
//!
//! # Example
//!
//! ```rust
//! use stripe_api::{StripeConfig, ApiKey, ApiVersion};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiBase, ApiKey};
pub use version::ApiVersion;

use crate::error::ConfigError;
use std::time::Duration;

/// Default request timeout applied by the HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(80);

/// Configuration for the Stripe API SDK.
///
/// # Thread Safety
///
/// `StripeConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Connected accounts
///
/// Setting `stripe_account` sends a `Stripe-Account` header on every request,
/// so all calls act on behalf of that connected account. A single request can
/// override it through [`RequestOptions`](crate::clients::RequestOptions).
///
/// # Example
///
/// ```rust
/// use stripe_api::{StripeConfig, ApiKey};
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .max_network_retries(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_network_retries(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct StripeConfig {
    api_key: ApiKey,
    api_base: ApiBase,
    api_version: ApiVersion,
    max_network_retries: u32,
    timeout: Duration,
    user_agent_prefix: Option<String>,
    stripe_account: Option<String>,
}

impl StripeConfig {
    /// Creates a new builder for constructing a `StripeConfig`.
    #[must_use]
    pub fn builder() -> StripeConfigBuilder {
        StripeConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns how many times a failed request is retried.
    #[must_use]
    pub const fn max_network_retries(&self) -> u32 {
        self.max_network_retries
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the connected account id, if configured.
    #[must_use]
    pub fn stripe_account(&self) -> Option<&str> {
        self.stripe_account.as_deref()
    }
}

// Verify StripeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeConfig>();
};

/// Builder for constructing [`StripeConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `api_base`: `https://api.stripe.com`
/// - `api_version`: [`ApiVersion::latest()`]
/// - `max_network_retries`: `0`
/// - `timeout`: 80 seconds
/// - `user_agent_prefix`: `None`
/// - `stripe_account`: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use stripe_api::{StripeConfig, ApiKey, ApiBase, ApiVersion};
///
/// let config = StripeConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .api_base(ApiBase::new("http://localhost:12111").unwrap())
///     .api_version(ApiVersion::V2019_03_14)
///     .timeout(Duration::from_secs(10))
///     .user_agent_prefix("MyApp/1.0")
///     .stripe_account("acct_123")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StripeConfigBuilder {
    api_key: Option<ApiKey>,
    api_base: Option<ApiBase>,
    api_version: Option<ApiVersion>,
    max_network_retries: Option<u32>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    stripe_account: Option<String>,
}

impl StripeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn api_base(mut self, base: ApiBase) -> Self {
        self.api_base = Some(base);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets how many times requests failing with 429 or 500 are retried.
    #[must_use]
    pub const fn max_network_retries(mut self, retries: u32) -> Self {
        self.max_network_retries = Some(retries);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the connected account every request acts on behalf of.
    #[must_use]
    pub fn stripe_account(mut self, account: impl Into<String>) -> Self {
        self.stripe_account = Some(account.into());
        self
    }

    /// Builds the [`StripeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<StripeConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(StripeConfig {
            api_key,
            api_base: self.api_base.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            max_network_retries: self.max_network_retries.unwrap_or(0),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
            stripe_account: self.stripe_account,
        })
    }
}
