//! Path building infrastructure for REST resources.
//!
//! Resources declare their endpoints as a table of [`ResourcePath`]s. An
//! operation resolves to the path that matches the ids the caller has, with
//! the most specific path winning.
//!
//! # Path Resolution
//!
//! A discount, for example, is deleted through either parent:
//! - `customers/{customer}/discount`
//! - `subscriptions/{subscription}/discount`
//!
//! The caller supplies one parent id and the matching template is selected.
//!
//! # Example
//!
//! ```rust
//! use stripe_api::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use stripe_api::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["customer"], "customers/{customer}/discount"),
//!     ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["subscription"], "subscriptions/{subscription}/discount"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Delete, &["subscription"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("subscription", "sub_123");
//! assert_eq!(build_path(path.template, &ids), "subscriptions/sub_123/discount");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Retrieve a single resource by id (GET /resources/{id}).
    Get,
    /// List resources page by page (GET /resources).
    List,
    /// Create a new resource (POST /resources).
    Create,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Get | Self::List => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::List => "list",
            Self::Create => "create",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates are relative to `/v1/` and use `{name}` placeholders:
/// - `order_returns/{id}` - Single id
/// - `customers/{customer}/discount` - Parent id
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::{ResourcePath, ResourceOperation};
/// use stripe_api::HttpMethod;
///
/// const ORDER_RETURN_GET: ResourcePath = ResourcePath::new(
///     HttpMethod::Get,
///     ResourceOperation::Get,
///     &["id"],
///     "order_returns/{id}",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required id parameters in order (e.g., `["customer"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required ids for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required ids are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Among the paths for `operation` whose ids are all available, the one
/// with the most ids wins.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::{ResourcePath, ResourceOperation, get_path};
/// use stripe_api::HttpMethod;
///
/// const PATHS: &[ResourcePath] = &[
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::Get, &["id"], "order_returns/{id}"),
///     ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "order_returns"),
/// ];
///
/// let path = get_path(PATHS, ResourceOperation::Get, &["id"]);
/// assert_eq!(path.unwrap().template, "order_returns/{id}");
///
/// assert!(get_path(PATHS, ResourceOperation::Delete, &["id"]).is_none());
/// ```
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL path from a template by interpolating ids.
///
/// Values are percent-encoded, so an id can never introduce extra path
/// segments or a query string.
///
/// # Example
///
/// ```rust
/// use stripe_api::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("id", "usd");
/// assert_eq!(build_path("exchange_rates/{id}", &ids), "exchange_rates/usd");
///
/// ids.insert("id", "a/b?c");
/// assert_eq!(build_path("exchange_rates/{id}", &ids), "exchange_rates/a%2Fb%3Fc");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &encoded);
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
