//! Order Return resource implementation.
//!
//! An [`OrderReturn`] records items returned from an order and the refund
//! issued for them.
//!
//! # Read-Only Resource
//!
//! Order returns are created by returning an order; this resource only
//! reads them.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::{ListParams, RestResource};
//! use stripe_api::rest::resources::{OrderReturn, OrderReturnListParams};
//!
//! let order_return = OrderReturn::get(&client, "orret_123", &Default::default()).await?;
//!
//! let params = OrderReturnListParams {
//!     order: Some("or_123".to_string()),
//!     ..Default::default()
//! };
//! let mut iter = OrderReturn::list(&client, &params);
//! while iter.next().await {
//!     let order_return = iter.current().unwrap();
//!     println!("{} returned {}", order_return.id, order_return.amount);
//! }
//! if let Some(err) = iter.err() {
//!     eprintln!("{err}");
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::resources::common::{Order, Refund};
use crate::rest::{
    Expandable, Identifiable, ListFilters, ListIter, ListParams, RangeQuery, ReadOnlyResource,
    ResourceOperation, ResourcePath, RestResource,
};

/// A return of items from an order.
///
/// # Expandable Fields
///
/// `order` and `refund` hold an id, or the full object when expanded.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OrderReturn {
    /// Unique identifier, e.g. `orret_123`.
    pub id: String,

    /// Always `"order_return"`.
    pub object: String,

    /// Total amount returned, in the smallest currency unit.
    pub amount: i64,

    /// When the return was created.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,

    /// Three-letter ISO currency code.
    pub currency: String,

    /// The returned items.
    pub items: Vec<OrderReturnItem>,

    /// Whether the object exists in live mode.
    pub livemode: bool,

    /// The order the items were returned from.
    pub order: Option<Expandable<Order>>,

    /// The refund issued for the return.
    pub refund: Option<Expandable<Refund>>,
}

/// One returned item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OrderReturnItem {
    /// Always `"order_item"`.
    pub object: String,

    /// Amount for this item, in the smallest currency unit.
    pub amount: i64,

    /// Three-letter ISO currency code.
    pub currency: String,

    /// Description shown to the customer.
    pub description: Option<String>,

    /// The SKU, coupon or shipping method the item stands for.
    pub parent: Option<String>,

    /// Number of units, for SKU items.
    pub quantity: Option<i64>,

    /// `sku`, `tax`, `shipping` or `discount`.
    #[serde(rename = "type")]
    pub item_type: String,
}

impl Identifiable for OrderReturn {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RestResource for OrderReturn {
    type GetParams = OrderReturnGetParams;
    type ListParams = OrderReturnListParams;
    type CreateParams = ();

    const NAME: &'static str = "OrderReturn";
    const OBJECT: &'static str = "order_return";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["id"],
            "order_returns/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "order_returns"),
    ];
}

impl ReadOnlyResource for OrderReturn {}

/// Iterator over order returns.
pub type OrderReturnIter<'a> = ListIter<'a, OrderReturn>;

/// Parameters for retrieving an order return.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct OrderReturnGetParams {
    /// Fields to expand, e.g. `order` or `refund`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

/// Parameters for listing order returns.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct OrderReturnListParams {
    /// Paging and expansion.
    #[serde(flatten)]
    pub list: ListParams,

    /// Filter on creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<RangeQuery>,

    /// Only returns of this order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl ListFilters for OrderReturnListParams {
    fn list_params(&self) -> &ListParams {
        &self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::to_form_values;
    use crate::rest::get_path;
    use serde_json::json;

    #[test]
    fn test_order_return_deserialization() {
        let json = r#"{
            "id": "orret_123",
            "object": "order_return",
            "amount": 1500,
            "created": 1559751590,
            "currency": "usd",
            "items": [
                {"object": "order_item", "amount": 1500, "currency": "usd", "description": "Mug", "parent": "sku_123", "quantity": 1, "type": "sku"}
            ],
            "livemode": false,
            "order": "or_123",
            "refund": {"id": "re_123", "object": "refund", "amount": 1500, "currency": "usd", "status": "succeeded"}
        }"#;

        let order_return: OrderReturn = serde_json::from_str(json).unwrap();

        assert_eq!(order_return.id, "orret_123");
        assert_eq!(order_return.items.len(), 1);
        assert_eq!(order_return.items[0].item_type, "sku");
        assert_eq!(order_return.items[0].parent.as_deref(), Some("sku_123"));

        let order = order_return.order.as_ref().unwrap();
        assert!(!order.is_expanded());
        assert_eq!(order.id(), "or_123");

        let refund = order_return.refund.as_ref().unwrap();
        assert!(refund.is_expanded());
        assert_eq!(refund.as_object().unwrap().status.as_deref(), Some("succeeded"));
    }

    #[test]
    fn test_bare_reference_leaves_other_fields_default() {
        let order_return: OrderReturn =
            serde_json::from_value(json!({"id": "orret_123", "order": "or_123"})).unwrap();

        assert_eq!(order_return.order, Some(Expandable::Id("or_123".to_string())));
        assert!(order_return.refund.is_none());
        assert_eq!(order_return.amount, 0);
        assert!(order_return.items.is_empty());
    }

    #[test]
    fn test_order_return_list_params() {
        let params = OrderReturnListParams {
            list: ListParams::new().limit(3),
            order: Some("or_123".to_string()),
            created: Some(RangeQuery::range().gt(1_559_000_000)),
        };

        let form = to_form_values(&params).unwrap();
        assert_eq!(form.get("limit"), Some("3"));
        assert_eq!(form.get("order"), Some("or_123"));
        assert_eq!(form.get("created[gt]"), Some("1559000000"));
    }

    #[test]
    fn test_order_return_paths() {
        let get = get_path(OrderReturn::PATHS, ResourceOperation::Get, &["id"]);
        assert_eq!(get.unwrap().template, "order_returns/{id}");

        let list = get_path(OrderReturn::PATHS, ResourceOperation::List, &[]);
        assert_eq!(list.unwrap().template, "order_returns");

        assert!(get_path(OrderReturn::PATHS, ResourceOperation::Create, &[]).is_none());
    }
}
