//! Exchange Rate resource implementation.
//!
//! An [`ExchangeRate`] holds the conversion rates from one currency to every
//! other supported currency. Its id is the lowercase ISO code of the source
//! currency.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::{ListParams, RestResource};
//! use stripe_api::rest::resources::ExchangeRate;
//!
//! let usd = ExchangeRate::get(&client, "usd", &()).await?;
//! if let Some(rate) = usd.rate("eur") {
//!     println!("1 USD = {rate} EUR");
//! }
//!
//! let mut iter = ExchangeRate::list(&client, &ListParams::new());
//! while iter.next().await {
//!     println!("{}", iter.current().unwrap().id);
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{
    Identifiable, ListIter, ListParams, ReadOnlyResource, ResourceOperation, ResourcePath,
    RestResource,
};

/// Conversion rates from one currency.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ExchangeRate {
    /// The source currency, e.g. `usd`.
    pub id: String,

    /// Always `"exchange_rate"`.
    pub object: String,

    /// Units of each target currency per unit of the source currency.
    pub rates: HashMap<String, f64>,
}

impl ExchangeRate {
    /// Returns the rate to `currency`, matched case-insensitively.
    #[must_use]
    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates
            .get(currency)
            .or_else(|| self.rates.get(&currency.to_ascii_lowercase()))
            .copied()
    }

    /// Converts an amount in the source currency to `currency`.
    ///
    /// Amounts are in the smallest unit of each currency and the result is
    /// rounded to the nearest unit.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn convert(&self, amount: i64, currency: &str) -> Option<i64> {
        self.rate(currency)
            .map(|rate| (amount as f64 * rate).round() as i64)
    }
}

impl Identifiable for ExchangeRate {
    fn id(&self) -> &str {
        &self.id
    }
}

impl RestResource for ExchangeRate {
    type GetParams = ();
    type ListParams = ListParams;
    type CreateParams = ();

    const NAME: &'static str = "ExchangeRate";
    const OBJECT: &'static str = "exchange_rate";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Get,
            &["id"],
            "exchange_rates/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, &[], "exchange_rates"),
    ];
}

impl ReadOnlyResource for ExchangeRate {}

/// Iterator over exchange rates.
pub type ExchangeRateIter<'a> = ListIter<'a, ExchangeRate>;
