//! Discount resource implementation.
//!
//! A [`Discount`] is a coupon applied to a customer or a subscription. It is
//! not addressed by an id of its own: it is removed through its parent.
//!
//! # Operations
//!
//! - Delete from customer: `DELETE /v1/customers/{customer}/discount`
//! - Delete from subscription: `DELETE /v1/subscriptions/{subscription}/discount`
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::resources::Discount;
//!
//! let deleted = Discount::delete_from_customer(&client, "cus_123").await?;
//! assert!(deleted.deleted);
//!
//! let deleted = Discount::delete_from_subscription(&client, "sub_123").await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Backend, HttpMethod, RestClient};
use crate::rest::resources::common::{Coupon, Customer};
use crate::rest::{
    Deleted, Expandable, ListParams, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse, RestResource,
};

/// A coupon applied to a customer or subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Discount {
    /// Always `"discount"`.
    pub object: String,

    /// The applied coupon.
    pub coupon: Coupon,

    /// The customer the discount applies to.
    pub customer: Option<Expandable<Customer>>,

    /// Set on the result of a delete.
    pub deleted: bool,

    /// When a repeating discount ends.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub end: Option<DateTime<Utc>>,

    /// When the discount was applied.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub start: Option<DateTime<Utc>>,

    /// The subscription the discount applies to.
    pub subscription: Option<String>,
}

impl Discount {
    /// Removes the discount of a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the customer doesn't exist or
    /// has no discount.
    pub async fn delete_from_customer<B: Backend>(
        client: &RestClient<B>,
        customer_id: &str,
    ) -> Result<ResourceResponse<Deleted>, ResourceError> {
        Self::delete_nested(client, "customer", customer_id).await
    }

    /// Removes the discount of a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the subscription doesn't exist
    /// or has no discount.
    pub async fn delete_from_subscription<B: Backend>(
        client: &RestClient<B>,
        subscription_id: &str,
    ) -> Result<ResourceResponse<Deleted>, ResourceError> {
        Self::delete_nested(client, "subscription", subscription_id).await
    }
}

impl RestResource for Discount {
    type GetParams = ();
    type ListParams = ListParams;
    type CreateParams = ();

    const NAME: &'static str = "Discount";
    const OBJECT: &'static str = "discount";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["customer"],
            "customers/{customer}/discount",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["subscription"],
            "subscriptions/{subscription}/discount",
        ),
    ];
}
