//! Error types for the Stripe API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Stripe secret or restricted key.")]
    EmptyApiKey,

    /// API key contains characters that cannot appear in a header.
    #[error("API key contains whitespace. Please check the key for stray characters.")]
    InvalidApiKey,

    /// API base URL is invalid.
    #[error("Invalid API base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.stripe.com').")]
    InvalidApiBase {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM-DD' (e.g., '2019-05-16').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
