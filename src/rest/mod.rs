//! REST Resource infrastructure for the Stripe API.
//!
//! This module provides the foundational infrastructure for REST resources with:
//!
//! - **[`RestResource`] trait**: get, create, delete and list operations
//! - **[`ReadOnlyResource`] marker trait**: Resources that only support reads
//! - **[`ResourceResponse<T>`]**: A Deref-based wrapper carrying the request id
//! - **[`Expandable<T>`]**: Fields sent either as an id or as the full object
//! - **[`ListIter<T>`]**: A cursor that walks every page of a list endpoint
//! - **Path building**: Multiple path support for nested resources
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! # Overview
//!
//! Individual resources (CheckoutSession, BalanceTransaction, etc.) are
//! implemented in the [`resources`] submodule.
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use stripe_api::{ApiKey, RestClient, StripeConfig};
//! use stripe_api::rest::{ListParams, RestResource};
//! use stripe_api::rest::resources::{OrderReturn, OrderReturnListParams};
//!
//! let config = StripeConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123")?)
//!     .build()?;
//! let client = RestClient::new(&config)?;
//!
//! // Retrieve a single order return
//! let order_return = OrderReturn::get(&client, "orret_123", &()).await?;
//! println!("Amount: {}", order_return.amount);  // Deref to OrderReturn
//!
//! // Walk every order return, three per page
//! let params = OrderReturnListParams {
//!     list: ListParams::new().limit(3),
//!     ..Default::default()
//! };
//! let mut iter = OrderReturn::list(&client, &params);
//! while iter.next().await {
//!     println!("- {}", iter.current().unwrap().id);
//! }
//! if let Some(err) = iter.err() {
//!     eprintln!("listing failed: {err}");
//! }
//! ```
//!
//! # Key Types
//!
//! - [`ResourceError`] and [`ErrorKind`]: Error types for resource operations
//! - [`ApiError`]: The structured error body the API returns
//! - [`ResourcePath`] and [`ResourceOperation`]: Path building infrastructure
//! - [`List`], [`ListParams`], [`ListIter`]: Pagination
//! - [`Expandable`] and [`Identifiable`]: References to other objects
//! - [`resources`]: The resource types

mod errors;
mod expandable;
mod list;
mod path;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use errors::{ApiError, ApiErrorType, ErrorKind, ResourceError};
pub use expandable::{Expandable, Identifiable};
pub use list::{
    Deleted, IterState, List, ListFilters, ListIter, ListMeta, ListParams, PageFetcher,
    PageFuture, RangeBounds, RangeQuery,
};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::{ReadOnlyResource, RestResource};
pub use response::ResourceResponse;
