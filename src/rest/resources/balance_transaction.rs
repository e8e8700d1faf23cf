//! Balance Transaction resource implementation.
//!
//! This module provides the [`BalanceTransaction`] resource. Every movement
//! of funds in or out of the account balance is recorded as one.
//!
//! # Read-Only Resource
//!
//! Balance transactions implement
//! [`ReadOnlyResource`](crate::rest::ReadOnlyResource); they are created by
//! the API as a side effect of charges, refunds, payouts and the like.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::{ListParams, RangeQuery, RestResource};
//! use stripe_api::rest::resources::{BalanceTransaction, BalanceTransactionListParams};
//!
//! let txn = BalanceTransaction::get(&client, "txn_123", &Default::default()).await?;
//! println!("net {} {}", txn.net, txn.currency);
//!
//! let params = BalanceTransactionListParams {
//!     list: ListParams::new().limit(100),
//!     created: Some(RangeQuery::range().gte(1_560_000_000)),
//!     ..Default::default()
//! };
//! let mut iter = BalanceTransaction::list(&client, &params);
//! while iter.next().await {
//!     let txn = iter.current().unwrap();
//!     println!("{} {}", txn.id, txn.amount);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::resources::common::BalanceTransactionSource;
use crate::rest::{
    Expandable, Identifiable, ListFilters, ListIter, ListParams, RangeQuery, ReadOnlyResource,
    ResourceOperation, ResourcePath, RestResource,
};

/// Whether the funds of a balance transaction can be paid out yet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BalanceTransactionStatus {
    /// The funds are available.
    Available,
    /// The funds are not available yet.
    Pending,
    /// A status this version of the SDK does not know.
    #[serde(other)]
    Unknown,
}

/// What caused a balance transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BalanceTransactionType {
    /// A manual adjustment.
    Adjustment,
    /// A fee collected by a platform.
    ApplicationFee,
    /// A refunded platform fee.
    ApplicationFeeRefund,
    /// A card charge.
    Charge,
    /// A non-card payment.
    Payment,
    /// A refunded non-card payment.
    PaymentRefund,
    /// A payout to a bank account.
    Payout,
    /// A failed payout.
    PayoutFailure,
    /// A refunded card charge.
    Refund,
    /// A fee charged by the API provider.
    StripeFee,
    /// A transfer to a connected account.
    Transfer,
    /// A reversed transfer.
    TransferRefund,
    /// A type this version of the SDK does not know.
    #[serde(other)]
    Unknown,
}

/// A movement of funds in the account balance.
///
/// # Expandable Fields
///
/// `source` holds the id of the object that caused the transaction, or
/// the object itself when `source` was expanded.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BalanceTransaction {
    /// Unique identifier, e.g. `txn_123`.
    pub id: String,

    /// Always `"balance_transaction"`.
    pub object: String,

    /// Gross amount, in the smallest currency unit.
    pub amount: i64,

    /// When the funds become available.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub available_on: Option<DateTime<Utc>>,

    /// When the transaction was created.
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,

    /// Three-letter ISO currency code.
    pub currency: String,

    /// Free-form description.
    pub description: Option<String>,

    /// Rate used when the source was in another currency.
    pub exchange_rate: Option<f64>,

    /// Total fees, in the smallest currency unit.
    pub fee: i64,

    /// Breakdown of `fee`.
    pub fee_details: Vec<BalanceTransactionFee>,

    /// `amount` minus `fee`.
    pub net: i64,

    /// Grouping used in financial reports, e.g. `charge`.
    pub reporting_category: Option<String>,

    /// The object that caused the transaction.
    pub source: Option<Expandable<BalanceTransactionSource>>,

    /// Whether the funds are available.
    pub status: Option<BalanceTransactionStatus>,

    /// What caused the transaction.
    #[serde(rename = "type")]
    pub transaction_type: Option<BalanceTransactionType>,
}

/// One fee of a balance transaction.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BalanceTransactionFee {
    /// Amount of the fee, in the smallest currency unit.
    pub amount: i64,

    /// The platform that collected an application fee.
    pub application: Option<String>,

    /// Three-letter ISO currency code.
    pub currency: String,

    /// Free-form description.
    pub description: Option<String>,

    /// `application_fee`, `stripe_fee` or `tax`.
    #[serde(rename = "type")]
    pub fee_type: String,
}

impl BalanceTransaction {
    /// Returns the fees of the given type, e.g. `"stripe_fee"`.
    pub fn fees_of_type<'a>(
        &'a self,
        fee_type: &'a str,
    ) -> impl Iterator<Item = &'a BalanceTransactionFee> + 'a {
        self.fee_details
            .iter()
            .filter(move |fee| fee.fee_type == fee_type)
    }
}

impl Identifiable for BalanceTransaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RestResource for BalanceTransaction {
    type GetParams = BalanceTransactionGetParams;
    type ListParams = BalanceTransactionListParams;
    type CreateParams = ();

    const NAME: &'static str = "BalanceTransaction";
    const OBJECT: &'static str = "balance_transaction";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["id"],
            "balance_transactions/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &[],
            "balance_transactions",
        ),
    ];
}

impl ReadOnlyResource for BalanceTransaction {}

/// Iterator over balance transactions.
pub type BalanceTransactionIter<'a> = ListIter<'a, BalanceTransaction>;

/// Parameters for retrieving a balance transaction.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct BalanceTransactionGetParams {
    /// Fields to expand, e.g. `source`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

/// Parameters for listing balance transactions.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct BalanceTransactionListParams {
    /// Paging and expansion.
    #[serde(flatten)]
    pub list: ListParams,

    /// Filter on when the funds become available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_on: Option<RangeQuery>,

    /// Filter on creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<RangeQuery>,

    /// Only transactions in this currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Only transactions paid out in this payout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout: Option<String>,

    /// Only transactions caused by this object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Only transactions of this type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<BalanceTransactionType>,
}

impl ListFilters for BalanceTransactionListParams {
    fn list_params(&self) -> &ListParams {
        &self.list
    }
}
