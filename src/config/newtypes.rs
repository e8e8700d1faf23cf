//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Stripe API key.
///
/// The key is sent as a bearer token on every request. It must be non-empty
/// and free of whitespace. The `Debug` implementation only reveals the key
/// prefix (`sk_test`, `rk_live`, ...) so keys do not leak into logs.
///
/// # Example
///
/// ```rust
/// use stripe_api::ApiKey;
///
/// let key = ApiKey::new("sk_test_123").unwrap();
/// assert_eq!(key.as_ref(), "sk_test_123");
/// assert!(key.is_test_mode());
/// assert_eq!(format!("{:?}", key), "ApiKey(sk_test_*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty, or
    /// [`ConfigError::InvalidApiKey`] if it contains whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if key.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidApiKey);
        }
        Ok(Self(key))
    }

    /// Returns `true` for test-mode keys (`sk_test_`, `rk_test_`, `pk_test_`).
    #[must_use]
    pub fn is_test_mode(&self) -> bool {
        ["sk_test_", "rk_test_", "pk_test_"]
            .iter()
            .any(|prefix| self.0.starts_with(prefix))
    }

    /// The key prefix up to and including the mode segment, if it has one.
    fn prefix(&self) -> Option<&str> {
        let mut parts = self.0.splitn(3, '_');
        let kind = parts.next()?;
        let mode = parts.next()?;
        parts.next()?;
        Some(&self.0[..kind.len() + 1 + mode.len()])
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix() {
            Some(prefix) => write!(f, "ApiKey({prefix}_*****)"),
            None => f.write_str("ApiKey(*****)"),
        }
    }
}

/// A validated API base URL.
///
/// Defaults to `https://api.stripe.com`. Overriding it points every request
/// at another host, which is how tests target a mock server.
///
/// # Example
///
/// ```rust
/// use stripe_api::ApiBase;
///
/// let base = ApiBase::new("http://localhost:12111/").unwrap();
/// assert_eq!(base.as_ref(), "http://localhost:12111");
/// assert_eq!(base.scheme(), "http");
/// assert_eq!(base.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiBase {
    /// The production API host.
    pub const DEFAULT: &'static str = "https://api.stripe.com";

    /// Creates a new validated API base URL.
    ///
    /// Trailing slashes are removed so paths can be appended directly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiBase`] if the URL has no `http` or
    /// `https` scheme, or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiBase { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidApiBase { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidApiBase { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        let host_start = "https://".len();
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: "https".len(),
            host_start,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for ApiBase {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
