//! Checkout Session resource implementation.
//!
//! This module provides the [`CheckoutSession`] resource, a customer's
//! session as they pay through a hosted checkout page.
//!
//! # Operations
//!
//! - Create: `POST /v1/checkout/sessions`
//! - Get: `GET /v1/checkout/sessions/{id}`
//! - List: `GET /v1/checkout/sessions`
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::RestResource;
//! use stripe_api::rest::resources::{
//!     CheckoutSession, CheckoutSessionLineItemParams, CheckoutSessionParams,
//! };
//!
//! let params = CheckoutSessionParams {
//!     cancel_url: Some("https://example.com/cancel".to_string()),
//!     success_url: Some("https://example.com/success".to_string()),
//!     payment_method_types: vec!["card".to_string()],
//!     line_items: vec![CheckoutSessionLineItemParams {
//!         name: Some("T-shirt".to_string()),
//!         amount: Some(2000),
//!         currency: Some("usd".to_string()),
//!         quantity: Some(1),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let session = CheckoutSession::create(&client, &params).await?;
//! println!("Redirect to checkout with session {}", session.id);
//!
//! // Expand the payment intent when retrieving
//! let params = CheckoutSessionGetParams { expand: vec!["payment_intent".to_string()] };
//! let session = CheckoutSession::get(&client, &session.id, &params).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::resources::common::{
    Customer, PaymentIntent, Plan, SetupIntent, Shipping, Sku, Subscription,
};
use crate::rest::{
    Expandable, Identifiable, ListFilters, ListIter, ListParams, ResourceOperation, ResourcePath,
    RestResource,
};

/// The mode of a checkout session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutSessionMode {
    /// Accept one-time payments.
    Payment,
    /// Save payment details to charge later.
    Setup,
    /// Start a subscription.
    Subscription,
    /// A mode this version of the SDK does not know.
    #[serde(other)]
    Unknown,
}

/// The label of the submit button on the checkout page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutSessionSubmitType {
    /// Chosen by the checkout page.
    Auto,
    /// "Book".
    Book,
    /// "Donate".
    Donate,
    /// "Pay".
    Pay,
    /// A submit type this version of the SDK does not know.
    #[serde(other)]
    Unknown,
}

/// Whether the checkout page collects a billing address.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BillingAddressCollection {
    /// Only when needed for the payment.
    Auto,
    /// Always.
    Required,
    /// A value this version of the SDK does not know.
    #[serde(other)]
    Unknown,
}

/// The kind of a [`CheckoutSessionDisplayItem`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutSessionDisplayItemType {
    /// An ad-hoc item described in `custom`.
    Custom,
    /// A subscription plan.
    Plan,
    /// A SKU.
    Sku,
    /// A type this version of the SDK does not know.
    #[serde(other)]
    Unknown,
}

/// A hosted checkout session.
///
/// # Expandable Fields
///
/// `customer`, `payment_intent`, `setup_intent` and `subscription` hold
/// either an id or the full object, depending on whether the request
/// expanded them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CheckoutSession {
    /// Unique identifier, e.g. `cs_123`.
    pub id: String,

    /// Always `"checkout.session"`.
    pub object: String,

    /// Whether a billing address is collected.
    pub billing_address_collection: Option<BillingAddressCollection>,

    /// Where the customer is sent if they cancel.
    pub cancel_url: String,

    /// A reference to reconcile the session with internal systems.
    pub client_reference_id: Option<String>,

    /// The customer, if one was attached or created.
    pub customer: Option<Expandable<Customer>>,

    /// Email prefilled on the checkout page.
    pub customer_email: Option<String>,

    /// Set when the object has been deleted.
    pub deleted: bool,

    /// The items shown on the checkout page.
    pub display_items: Vec<CheckoutSessionDisplayItem>,

    /// Whether the object exists in live mode.
    pub livemode: bool,

    /// IETF language tag of the checkout page, e.g. `auto` or `fr`.
    pub locale: Option<String>,

    /// Payment, setup or subscription.
    pub mode: Option<CheckoutSessionMode>,

    /// The payment intent created in payment mode.
    pub payment_intent: Option<Expandable<PaymentIntent>>,

    /// Payment method types accepted, e.g. `["card"]`.
    pub payment_method_types: Vec<String>,

    /// The setup intent created in setup mode.
    pub setup_intent: Option<Expandable<SetupIntent>>,

    /// The subscription created in subscription mode.
    pub subscription: Option<Expandable<Subscription>>,

    /// Label of the submit button.
    pub submit_type: Option<CheckoutSessionSubmitType>,

    /// Where the customer is sent after paying.
    pub success_url: String,
}

/// An item shown on the checkout page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CheckoutSessionDisplayItem {
    /// Amount in the smallest currency unit.
    pub amount: i64,

    /// Three-letter ISO currency code.
    pub currency: String,

    /// Details of a custom item.
    pub custom: Option<CheckoutSessionDisplayItemCustom>,

    /// Quantity of the item.
    pub quantity: i64,

    /// The plan, for plan items.
    pub plan: Option<Plan>,

    /// The SKU, for SKU items.
    pub sku: Option<Sku>,

    /// Which of `custom`, `plan` and `sku` is set.
    #[serde(rename = "type")]
    pub item_type: Option<CheckoutSessionDisplayItemType>,
}

/// Description of a custom display item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CheckoutSessionDisplayItemCustom {
    /// Item description.
    pub description: Option<String>,

    /// Image URLs.
    pub images: Vec<String>,

    /// Item name.
    pub name: String,
}

impl Identifiable for CheckoutSession {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RestResource for CheckoutSession {
    type GetParams = CheckoutSessionGetParams;
    type ListParams = CheckoutSessionListParams;
    type CreateParams = CheckoutSessionParams;

    const NAME: &'static str = "CheckoutSession";
    const OBJECT: &'static str = "checkout.session";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["id"],
            "checkout/sessions/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &[],
            "checkout/sessions",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "checkout/sessions",
        ),
    ];
}

/// Iterator over checkout sessions.
pub type CheckoutSessionIter<'a> = ListIter<'a, CheckoutSession>;

/// Parameters for retrieving a checkout session.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CheckoutSessionGetParams {
    /// Fields to expand, e.g. `payment_intent`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

/// Parameters for listing checkout sessions.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CheckoutSessionListParams {
    /// Paging and expansion.
    #[serde(flatten)]
    pub list: ListParams,

    /// Only the session for this payment intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent: Option<String>,

    /// Only the session for this subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

impl ListFilters for CheckoutSessionListParams {
    fn list_params(&self) -> &ListParams {
        &self.list
    }
}

/// Parameters for creating a checkout session.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CheckoutSessionParams {
    /// Whether to collect a billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_collection: Option<BillingAddressCollection>,

    /// Where the customer is sent if they cancel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,

    /// A reference to reconcile the session with internal systems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_reference_id: Option<String>,

    /// An existing customer to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    /// Email to prefill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// Fields to expand in the response.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,

    /// The items being purchased.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<CheckoutSessionLineItemParams>,

    /// Language of the checkout page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Payment, setup or subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<CheckoutSessionMode>,

    /// Settings for the payment intent created in payment mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent_data: Option<CheckoutSessionPaymentIntentDataParams>,

    /// Payment method types to accept.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payment_method_types: Vec<String>,

    /// Settings for the setup intent created in setup mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_intent_data: Option<CheckoutSessionSetupIntentDataParams>,

    /// Settings for the subscription created in subscription mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_data: Option<CheckoutSessionSubscriptionDataParams>,

    /// Label of the submit button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_type: Option<CheckoutSessionSubmitType>,

    /// Where the customer is sent after paying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
}

/// One item being purchased.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CheckoutSessionLineItemParams {
    /// Let the customer change the quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustable_quantity: Option<CheckoutSessionAdjustableQuantityParams>,

    /// Price in the smallest currency unit, for ad-hoc items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// Three-letter ISO currency code, for ad-hoc items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Item description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tax rates chosen by the customer's location.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dynamic_tax_rates: Vec<String>,

    /// Image URLs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    /// Item name, for ad-hoc items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// An existing price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// A price defined inline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_data: Option<CheckoutSessionPriceDataParams>,

    /// Quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// Tax rates applied to the item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tax_rates: Vec<String>,
}

/// Bounds of an adjustable quantity.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CheckoutSessionAdjustableQuantityParams {
    /// Whether the quantity can be changed.
    pub enabled: bool,

    /// Largest quantity allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,

    /// Smallest quantity allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
}

/// An inline price.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CheckoutSessionPriceDataParams {
    /// Three-letter ISO currency code.
    pub currency: String,

    /// The product being priced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    /// Unit price in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount: Option<i64>,
}

/// Settings for the payment intent of a payment-mode session.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CheckoutSessionPaymentIntentDataParams {
    /// Fee taken for the platform, in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_amount: Option<i64>,

    /// `automatic` or `manual`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<String>,

    /// Description of the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The connected account the payment is made for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,

    /// Where the receipt is sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_email: Option<String>,

    /// `on_session` or `off_session`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<String>,

    /// Shipping details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,

    /// Text on the customer's statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,

    /// Where the funds are transferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_data: Option<CheckoutSessionTransferDataParams>,
}

/// Destination of a transfer.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CheckoutSessionTransferDataParams {
    /// The connected account receiving the funds.
    pub destination: String,
}

/// Settings for the setup intent of a setup-mode session.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CheckoutSessionSetupIntentDataParams {
    /// Description of the setup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The connected account the setup is for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
}

/// Settings for the subscription of a subscription-mode session.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CheckoutSessionSubscriptionDataParams {
    /// Percentage of each invoice taken for the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_percent: Option<f64>,

    /// The plans to subscribe to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CheckoutSessionSubscriptionItemParams>,

    /// Unix timestamp the trial ends at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_end: Option<i64>,

    /// Use the trial length of the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_from_plan: Option<bool>,

    /// Trial length in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<u32>,
}

/// One plan of a subscription.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CheckoutSessionSubscriptionItemParams {
    /// The plan id.
    pub plan: String,

    /// Quantity of the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
}
