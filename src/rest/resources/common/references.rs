//! Objects that resources refer to.
//!
//! These are the shapes an [`Expandable`] field decodes into when the
//! request expanded it. They carry the commonly used fields of each object;
//! unknown fields are ignored and missing ones decode to their defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{Expandable, Identifiable};

/// A customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Customer {
    /// Unique identifier, e.g. `cus_123`.
    pub id: String,
    /// Always `"customer"`.
    pub object: String,
    /// When the customer was created.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Default currency for recurring charges.
    pub currency: Option<String>,
    /// Set when the customer has been deleted.
    pub deleted: bool,
    /// Free-form description.
    pub description: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Full name.
    pub name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

/// A payment intent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PaymentIntent {
    /// Unique identifier, e.g. `pi_123`.
    pub id: String,
    /// Always `"payment_intent"`.
    pub object: String,
    /// Amount intended to be collected, in the smallest currency unit.
    pub amount: i64,
    /// Amount that was collected.
    pub amount_received: i64,
    /// When the object was created.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Three-letter ISO currency code.
    pub currency: String,
    /// The customer this payment belongs to.
    pub customer: Option<Expandable<Customer>>,
    /// Description shown to users.
    pub description: Option<String>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Email the receipt is sent to.
    pub receipt_email: Option<String>,
    /// Shipping information.
    pub shipping: Option<super::Shipping>,
    /// Lifecycle status, e.g. `requires_payment_method` or `succeeded`.
    pub status: String,
}

/// A setup intent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SetupIntent {
    /// Unique identifier, e.g. `seti_123`.
    pub id: String,
    /// Always `"setup_intent"`.
    pub object: String,
    /// When the object was created.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// The customer the payment method is saved to.
    pub customer: Option<Expandable<Customer>>,
    /// Description shown to users.
    pub description: Option<String>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// The connected account the setup is for.
    pub on_behalf_of: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// `on_session` or `off_session`.
    pub usage: String,
}

/// A subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Subscription {
    /// Unique identifier, e.g. `sub_123`.
    pub id: String,
    /// Always `"subscription"`.
    pub object: String,
    /// Whether the subscription ends at the end of the current period.
    pub cancel_at_period_end: bool,
    /// When the subscription was created.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// End of the current billing period.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub current_period_end: Option<DateTime<Utc>>,
    /// Start of the current billing period.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub current_period_start: Option<DateTime<Utc>>,
    /// The subscribed customer.
    pub customer: Option<Expandable<Customer>>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// The plan of a single-plan subscription.
    pub plan: Option<Plan>,
    /// Lifecycle status, e.g. `active` or `trialing`.
    pub status: String,
    /// End of the trial, if any.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub trial_end: Option<DateTime<Utc>>,
}

/// A pricing plan.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Plan {
    /// Unique identifier.
    pub id: String,
    /// Always `"plan"`.
    pub object: String,
    /// Whether the plan can be used for new purchases.
    pub active: bool,
    /// Price per interval, in the smallest currency unit.
    pub amount: Option<i64>,
    /// Three-letter ISO currency code.
    pub currency: String,
    /// `day`, `week`, `month` or `year`.
    pub interval: String,
    /// Number of intervals between billings.
    pub interval_count: u32,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Short description.
    pub nickname: Option<String>,
    /// The product the plan prices.
    pub product: Option<String>,
    /// Default trial length in days.
    pub trial_period_days: Option<u32>,
}

/// A stock keeping unit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Sku {
    /// Unique identifier, e.g. `sku_123`.
    pub id: String,
    /// Always `"sku"`.
    pub object: String,
    /// Whether the SKU is available for purchase.
    pub active: bool,
    /// Three-letter ISO currency code.
    pub currency: String,
    /// Image URL.
    pub image: Option<String>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Price in the smallest currency unit.
    pub price: i64,
    /// The product this SKU belongs to.
    pub product: Option<String>,
}

/// An order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Order {
    /// Unique identifier, e.g. `or_123`.
    pub id: String,
    /// Always `"order"`.
    pub object: String,
    /// Total amount in the smallest currency unit.
    pub amount: i64,
    /// Amount returned so far.
    pub amount_returned: Option<i64>,
    /// The charge that paid for the order.
    pub charge: Option<String>,
    /// When the order was created.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Three-letter ISO currency code.
    pub currency: String,
    /// The customer who placed the order.
    pub customer: Option<Expandable<Customer>>,
    /// Email of the customer.
    pub email: Option<String>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Shipping details.
    pub shipping: Option<super::Shipping>,
    /// `created`, `paid`, `canceled`, `fulfilled` or `returned`.
    pub status: String,
}

/// A refund.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Refund {
    /// Unique identifier, e.g. `re_123`.
    pub id: String,
    /// Always `"refund"`.
    pub object: String,
    /// Amount refunded, in the smallest currency unit.
    pub amount: i64,
    /// The balance transaction that describes the refund's impact.
    pub balance_transaction: Option<String>,
    /// The refunded charge.
    pub charge: Option<String>,
    /// When the refund was created.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Three-letter ISO currency code.
    pub currency: String,
    /// `duplicate`, `fraudulent` or `requested_by_customer`.
    pub reason: Option<String>,
    /// `pending`, `succeeded`, `failed` or `canceled`.
    pub status: Option<String>,
}

/// A coupon.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Coupon {
    /// Unique identifier.
    pub id: String,
    /// Always `"coupon"`.
    pub object: String,
    /// Fixed amount taken off, in the smallest currency unit.
    pub amount_off: Option<i64>,
    /// Currency of `amount_off`.
    pub currency: Option<String>,
    /// `forever`, `once` or `repeating`.
    pub duration: String,
    /// Months a repeating coupon applies for.
    pub duration_in_months: Option<u32>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Display name.
    pub name: Option<String>,
    /// Percentage taken off.
    pub percent_off: Option<f64>,
    /// Whether the coupon can still be applied.
    pub valid: bool,
}

/// An uploaded or generated file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct File {
    /// Unique identifier, e.g. `file_123`.
    pub id: String,
    /// Always `"file"`.
    pub object: String,
    /// When the file was created.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Suggested name of the file.
    pub filename: Option<String>,
    /// What the file is for, e.g. `finance_report_run`.
    pub purpose: String,
    /// Size in bytes.
    pub size: u64,
    /// File type, e.g. `csv`.
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    /// Where the contents can be downloaded.
    pub url: Option<String>,
}

/// The object a balance transaction records.
///
/// The source can be a charge, refund, transfer, payout and more; the
/// fields here are the ones all of them share. `object` names the type.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BalanceTransactionSource {
    /// Unique identifier.
    pub id: String,
    /// The type of the source, e.g. `charge` or `refund`.
    pub object: String,
    /// Amount in the smallest currency unit.
    pub amount: Option<i64>,
    /// Three-letter ISO currency code.
    pub currency: Option<String>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
}

impl Identifiable for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for PaymentIntent {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for SetupIntent {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Subscription {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Plan {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Sku {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Refund {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Coupon {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for File {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for BalanceTransactionSource {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subscription_customer_in_both_shapes() {
        let bare: Subscription =
            serde_json::from_value(json!({"id": "sub_123", "customer": "cus_123"})).unwrap();
        let customer = bare.customer.unwrap();
        assert_eq!(customer.id(), "cus_123");
        assert!(!customer.is_expanded());

        let expanded: Subscription = serde_json::from_value(json!({
            "id": "sub_123",
            "customer": {"id": "cus_123", "object": "customer", "email": "jenny@example.com"}
        }))
        .unwrap();
        let customer = expanded.customer.unwrap().into_object().unwrap();
        assert_eq!(customer.email.as_deref(), Some("jenny@example.com"));
    }

    #[test]
    fn test_timestamps_decode_from_unix_seconds() {
        let subscription: Subscription = serde_json::from_value(json!({
            "id": "sub_123",
            "current_period_end": 1_560_000_000,
            "trial_end": null
        }))
        .unwrap();

        assert_eq!(
            subscription.current_period_end.unwrap().timestamp(),
            1_560_000_000
        );
        assert!(subscription.trial_end.is_none());
        assert!(subscription.created.is_none());
    }

    #[test]
    fn test_file_type_field_is_renamed() {
        let file: File = serde_json::from_value(json!({
            "id": "file_123",
            "purpose": "finance_report_run",
            "type": "csv",
            "size": 1024
        }))
        .unwrap();

        assert_eq!(file.file_type.as_deref(), Some("csv"));
        assert_eq!(file.size, 1024);
    }
}
