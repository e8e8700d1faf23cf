//! Expandable references.
//!
//! Many fields in API responses refer to another object. By default the API
//! sends only that object's id; when the request asks to `expand` the field,
//! the full object is sent in its place:
//!
//! ```json
//! {"customer": "cus_123"}
//! {"customer": {"id": "cus_123", "object": "customer", "email": "jenny@example.com"}}
//! ```
//!
//! [`Expandable<T>`] models both shapes as one type, so a field decodes the
//! same way whether or not it was expanded.
//!
//! # Example
//!
//! ```rust
//! use serde::Deserialize;
//! use stripe_api::rest::{Expandable, Identifiable};
//!
//! #[derive(Debug, Deserialize)]
//! struct Customer {
//!     id: String,
//!     email: Option<String>,
//! }
//!
//! impl Identifiable for Customer {
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//! }
//!
//! let bare: Expandable<Customer> = serde_json::from_str(r#""cus_123""#).unwrap();
//! assert_eq!(bare.id(), "cus_123");
//! assert!(!bare.is_expanded());
//!
//! let full: Expandable<Customer> =
//!     serde_json::from_str(r#"{"id": "cus_123", "email": "jenny@example.com"}"#).unwrap();
//! assert_eq!(full.id(), "cus_123");
//! assert_eq!(full.as_object().unwrap().email.as_deref(), Some("jenny@example.com"));
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};

/// Objects that carry an id.
pub trait Identifiable {
    /// Returns the object's id.
    fn id(&self) -> &str;
}

/// A reference that is either a bare id or the full object.
#[derive(Debug, Clone, PartialEq)]
pub enum Expandable<T> {
    /// Only the id was sent.
    Id(String),
    /// The full object was sent.
    Object(Box<T>),
}

impl<T> Expandable<T> {
    /// Returns `true` if the full object was sent.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns the object if it was expanded.
    #[must_use]
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(object),
        }
    }

    /// Consumes the reference and returns the object if it was expanded.
    #[must_use]
    pub fn into_object(self) -> Option<T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(*object),
        }
    }
}

impl<T: Identifiable> Expandable<T> {
    /// Returns the id of the referenced object, in either state.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Object(object) => object.id(),
        }
    }
}

impl<T> From<String> for Expandable<T> {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl<T> From<&str> for Expandable<T> {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Expandable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExpandableVisitor(PhantomData))
    }
}

struct ExpandableVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ExpandableVisitor<T> {
    type Value = Expandable<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an id string or an expanded object")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Expandable::Id(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(Expandable::Id(value))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        // Errors from T pass through untouched.
        T::deserialize(de::value::MapAccessDeserializer::new(map))
            .map(|object| Expandable::Object(Box::new(object)))
    }
}

impl<T: Serialize> Serialize for Expandable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Id(id) => serializer.serialize_str(id),
            Self::Object(object) => object.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
    struct Refund {
        id: String,
        amount: i64,
        #[serde(default)]
        reason: Option<String>,
    }

    impl Identifiable for Refund {
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        refund: Option<Expandable<Refund>>,
    }

    #[test]
    fn test_string_decodes_to_id_only() {
        let value: Expandable<Refund> = serde_json::from_value(json!("re_123")).unwrap();
        assert_eq!(value, Expandable::Id("re_123".to_string()));
        assert_eq!(value.id(), "re_123");
        assert!(value.as_object().is_none());
    }

    #[test]
    fn test_object_decodes_to_full_value() {
        let value: Expandable<Refund> =
            serde_json::from_value(json!({"id": "re_123", "amount": 500, "reason": "duplicate"}))
                .unwrap();

        assert!(value.is_expanded());
        assert_eq!(value.id(), "re_123");
        let refund = value.into_object().unwrap();
        assert_eq!(refund.amount, 500);
        assert_eq!(refund.reason.as_deref(), Some("duplicate"));
    }

    #[test]
    fn test_decodes_from_str_source() {
        let holder: Holder = serde_json::from_str(r#"{"refund": "re_456"}"#).unwrap();
        assert_eq!(holder.refund.unwrap().id(), "re_456");

        let holder: Holder =
            serde_json::from_str(r#"{"refund": {"id": "re_456", "amount": 10}}"#).unwrap();
        assert!(holder.refund.unwrap().is_expanded());

        let holder: Holder = serde_json::from_str(r#"{"refund": null}"#).unwrap();
        assert!(holder.refund.is_none());
    }

    #[test]
    fn test_object_errors_surface_unchanged() {
        let direct = serde_json::from_value::<Refund>(json!({"id": "re_1"})).unwrap_err();
        let wrapped =
            serde_json::from_value::<Expandable<Refund>>(json!({"id": "re_1"})).unwrap_err();

        assert_eq!(direct.to_string(), wrapped.to_string());
        assert!(wrapped.to_string().contains("amount"));
    }

    #[test]
    fn test_other_shapes_are_rejected() {
        let error = serde_json::from_value::<Expandable<Refund>>(json!(42)).unwrap_err();
        assert!(error
            .to_string()
            .contains("an id string or an expanded object"));

        assert!(serde_json::from_value::<Expandable<Refund>>(json!(["re_1"])).is_err());
    }

    #[test]
    fn test_serializes_back_to_original_shape() {
        let id: Expandable<Refund> = "re_1".into();
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("re_1"));

        let object = Expandable::Object(Box::new(Refund {
            id: "re_1".to_string(),
            amount: 5,
            reason: None,
        }));
        assert_eq!(
            serde_json::to_value(&object).unwrap(),
            json!({"id": "re_1", "amount": 5, "reason": null})
        );
    }
}
