//! Address types for shipping and billing details.

use serde::{Deserialize, Serialize};

/// A postal address.
///
/// Used in responses and as a request parameter, so every field is
/// optional and skipped when unset.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::to_form_values;
/// use stripe_api::rest::resources::common::Address;
///
/// let address = Address {
///     line1: Some("1234 Main Street".to_string()),
///     city: Some("San Francisco".to_string()),
///     country: Some("US".to_string()),
///     ..Default::default()
/// };
///
/// let form = to_form_values(&address).unwrap();
/// assert_eq!(form.get("line1"), Some("1234 Main Street"));
/// assert_eq!(form.get("state"), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Address {
    /// City, district, suburb, town, or village.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Address line 1 (street, PO box, or company name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,

    /// Address line 2 (apartment, suite, unit, or building).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    /// ZIP or postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// State, county, province, or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Shipping details for a payment or order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Shipping {
    /// Where the goods are shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// The delivery service, e.g. Fedex or USPS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,

    /// Recipient name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Recipient phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Tracking number from the carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}
