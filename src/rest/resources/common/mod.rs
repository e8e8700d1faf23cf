//! Types shared across resources.
//!
//! This module provides the nested objects that appear inside several
//! resources (addresses, shipping details) and the objects resources refer
//! to through [`Expandable`](crate::rest::Expandable) fields.

mod address;
mod references;

pub use address::{Address, Shipping};
pub use references::{
    BalanceTransactionSource, Coupon, Customer, File, Order, PaymentIntent, Plan, Refund,
    SetupIntent, Sku, Subscription,
};
