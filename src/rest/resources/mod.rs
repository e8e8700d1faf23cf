//! REST resource implementations.
//!
//! Each module defines one API object: its struct, the paths it supports,
//! and the parameter types its operations accept. Every resource
//! implements [`RestResource`](crate::rest::RestResource), so the same
//! `get`, `list`, `create` and `delete` calls work for all of them where
//! the API allows the operation.
//!
//! # Using Resources
//!
//! ```rust,ignore
//! use stripe_api::rest::RestResource;
//! use stripe_api::rest::resources::{CheckoutSession, CheckoutSessionListParams};
//!
//! let session = CheckoutSession::get(&client, "cs_test_123", &Default::default()).await?;
//!
//! let mut iter = CheckoutSession::list(&client, &CheckoutSessionListParams::default());
//! while iter.next().await {
//!     println!("{}", iter.current().unwrap().id);
//! }
//! ```
//!
//! # Available Resources
//!
//! | Resource | Operations |
//! |----------|------------|
//! | [`BalanceTransaction`] | get, list |
//! | [`CheckoutSession`] | get, list, create |
//! | [`Discount`] | delete from a customer or subscription |
//! | [`ExchangeRate`] | get, list |
//! | [`OrderReturn`] | get, list |
//! | [`ReportRun`] | get, list, create |
//! | [`ScheduledQueryRun`] | get, list |
//! | [`TerminalConnectionToken`] | create |
//!
//! Objects that appear only inside other resources live in [`common`].

pub mod common;

mod balance_transaction;
mod checkout_session;
mod discount;
mod exchange_rate;
mod order_return;
mod report_run;
mod scheduled_query_run;
mod terminal_connection_token;

pub use balance_transaction::{
    BalanceTransaction, BalanceTransactionFee, BalanceTransactionGetParams, BalanceTransactionIter,
    BalanceTransactionListParams, BalanceTransactionStatus, BalanceTransactionType,
};
pub use checkout_session::{
    BillingAddressCollection, CheckoutSession, CheckoutSessionAdjustableQuantityParams,
    CheckoutSessionDisplayItem, CheckoutSessionDisplayItemCustom, CheckoutSessionDisplayItemType,
    CheckoutSessionGetParams, CheckoutSessionIter, CheckoutSessionLineItemParams,
    CheckoutSessionListParams, CheckoutSessionMode, CheckoutSessionParams,
    CheckoutSessionPaymentIntentDataParams, CheckoutSessionPriceDataParams,
    CheckoutSessionSetupIntentDataParams, CheckoutSessionSubmitType,
    CheckoutSessionSubscriptionDataParams, CheckoutSessionSubscriptionItemParams,
    CheckoutSessionTransferDataParams,
};
pub use discount::Discount;
pub use exchange_rate::{ExchangeRate, ExchangeRateIter};
pub use order_return::{
    OrderReturn, OrderReturnGetParams, OrderReturnItem, OrderReturnIter, OrderReturnListParams,
};
pub use report_run::{
    ReportRun, ReportRunIter, ReportRunListParams, ReportRunParameters, ReportRunParams,
    ReportRunStatus,
};
pub use scheduled_query_run::{
    ScheduledQueryRun, ScheduledQueryRunError, ScheduledQueryRunIter, ScheduledQueryRunStatus,
};
pub use terminal_connection_token::{TerminalConnectionToken, TerminalConnectionTokenParams};

// Verify resource types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BalanceTransaction>();
    assert_send_sync::<CheckoutSession>();
    assert_send_sync::<Discount>();
    assert_send_sync::<ExchangeRate>();
    assert_send_sync::<OrderReturn>();
    assert_send_sync::<ReportRun>();
    assert_send_sync::<ScheduledQueryRun>();
    assert_send_sync::<TerminalConnectionToken>();
};
