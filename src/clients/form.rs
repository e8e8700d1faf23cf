//! Form encoding of request parameters.
//!
//! The API takes `application/x-www-form-urlencoded` parameters for every
//! method: GET and DELETE in the query string, POST in the body. Nested
//! parameters use bracket paths:
//!
//! ```text
//! line_items[0][amount]=500
//! payment_intent_data[shipping][address][city]=Anywhere
//! created[gte]=1560000000
//! ```
//!
//! [`to_form_values`] flattens any `Serialize` params struct into
//! [`FormValues`] following these rules.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors produced while encoding request parameters.
#[derive(Debug, Error)]
pub enum FormError {
    /// The parameters could not be serialized.
    #[error("Failed to serialize request parameters: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The parameters serialized to something other than a map of fields.
    #[error("Request parameters must serialize to an object, got {kind}")]
    NotAnObject {
        /// The JSON kind that was produced instead.
        kind: &'static str,
    },
}

/// An ordered list of form key/value pairs.
///
/// Keys may repeat. Order is preserved so encoded output is deterministic.
///
/// # Example
///
/// ```rust
/// use stripe_api::clients::FormValues;
///
/// let mut form = FormValues::new();
/// form.add("limit", "3");
/// form.add("expand[0]", "data.source");
///
/// assert_eq!(form.get("limit"), Some("3"));
/// assert_eq!(form.encode(), "limit=3&expand%5B0%5D=data.source");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pairs: Vec<(String, String)>,
}

impl FormValues {
    /// Creates an empty set of values.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a pair, keeping any existing pairs with the same key.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Replaces every pair with this key by a single pair.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.remove(&key);
        self.pairs.push((key, value.into()));
    }

    /// Removes every pair with this key.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Returns the first value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Appends every pair from `other`.
    pub fn extend(&mut self, other: Self) {
        self.pairs.extend(other.pairs);
    }

    /// Encodes the pairs as `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Flattens a params struct into form values.
///
/// Rules:
/// - nested objects become `parent[child]`
/// - sequences become `parent[0]`, `parent[1]`, ...
/// - `null` values, empty objects and empty sequences are omitted
/// - booleans encode as `true` / `false`
///
/// `()` and `None` produce no values.
///
/// # Errors
///
/// Returns [`FormError::Serialize`] if serialization fails, or
/// [`FormError::NotAnObject`] if `params` is a scalar or a sequence.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stripe_api::clients::to_form_values;
///
/// let form = to_form_values(&json!({
///     "success_url": "https://example.com/success",
///     "line_items": [{"amount": 1234, "quantity": 2}],
///     "payment_intent_data": {"shipping": {"address": {"line1": "line1"}}},
/// }))
/// .unwrap();
///
/// assert_eq!(form.get("line_items[0][amount]"), Some("1234"));
/// assert_eq!(form.get("payment_intent_data[shipping][address][line1]"), Some("line1"));
/// ```
pub fn to_form_values<T: Serialize + ?Sized>(params: &T) -> Result<FormValues, FormError> {
    let value = serde_json::to_value(params)?;
    let mut form = FormValues::new();

    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                flatten(&key, value, &mut form);
            }
        }
        Value::Bool(_) => return Err(FormError::NotAnObject { kind: "boolean" }),
        Value::Number(_) => return Err(FormError::NotAnObject { kind: "number" }),
        Value::String(_) => return Err(FormError::NotAnObject { kind: "string" }),
        Value::Array(_) => return Err(FormError::NotAnObject { kind: "array" }),
    }

    Ok(form)
}

fn flatten(key: &str, value: Value, form: &mut FormValues) {
    match value {
        Value::Null => {}
        Value::Bool(b) => form.add(key, if b { "true" } else { "false" }),
        Value::Number(n) => form.add(key, n.to_string()),
        Value::String(s) => form.add(key, s),
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                flatten(&format!("{key}[{index}]"), item, form);
            }
        }
        Value::Object(map) => {
            for (child, item) in map {
                flatten(&format!("{key}[{child}]"), item, form);
            }
        }
    }
}
