//! JSON encoding and prototype binding
//!
//! [`from_json`] never decodes straight into a struct. It parses the text
//! into a plain [`Value`] and pairs that value with a [`Prototype`], which
//! supplies the behavior. The pairing is unconditional: a parsed shape that
//! does not suit the prototype is still bound, and the prototype's accessors
//! deal with whatever fields are there.

use std::ops::Deref;

use objkit_common::warning::warn_once;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Failure to encode or decode JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value has no JSON representation (e.g. a map with non-string keys).
    #[error("Failed to encode JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The text is not valid JSON.
    #[error("Failed to parse JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// A set of behavior that parsed fields can be bound to.
pub trait Prototype {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Fields the prototype's behavior reads. Missing ones are reported
    /// when binding, but never refuse the binding.
    fn expected_fields(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Parsed JSON fields bound to a prototype.
///
/// Dereferences to the plain [`Value`]. Behavior comes from impls on
/// `Object<SomePrototype>`: inherent ones next to the prototype, or an
/// extension trait for prototypes defined in other crates.
#[derive(Debug, Clone, PartialEq)]
pub struct Object<P> {
    value: Value,
    proto: P,
}

impl<P: Prototype> Object<P> {
    /// Bind `value` to `proto`.
    #[must_use]
    pub fn bind(value: Value, proto: P) -> Self {
        for field in proto.expected_fields() {
            if value.get(field).is_none() {
                warn_once(
                    "JSON",
                    &format!("{} object has no '{field}' field", proto.name()),
                );
            }
        }
        Self { value, proto }
    }

    /// Replace the prototype, keeping the fields.
    #[must_use]
    pub fn set_prototype<Q: Prototype>(self, proto: Q) -> Object<Q> {
        Object::bind(self.value, proto)
    }
}

impl<P> Object<P> {
    /// The parsed fields.
    #[must_use]
    pub const fn fields(&self) -> &Value {
        &self.value
    }

    /// The bound prototype.
    #[must_use]
    pub const fn proto(&self) -> &P {
        &self.proto
    }

    /// Drop the prototype and keep the plain value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// A field of the parsed value as a number, or `NaN` if it is missing
    /// or not a number.
    #[must_use]
    pub fn number(&self, key: &str) -> f64 {
        self.value
            .get(key)
            .and_then(Value::as_f64)
            .unwrap_or(f64::NAN)
    }
}

impl<P> Deref for Object<P> {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.value
    }
}

impl<P> Serialize for Object<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Encode `value` as compact JSON. Object keys keep insertion order.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value cannot be represented as
/// JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Largest magnitude below which every integral `f64` is exactly an `i64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Serialize a number the way `JSON.stringify` prints it: integral values
/// without a fractional part (`10`, not `10.0`).
///
/// For use with `#[serde(serialize_with = "...")]`.
///
/// # Errors
///
/// Propagates the serializer's error.
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Parse `json` into plain data and bind it to `proto`.
///
/// # Errors
///
/// Returns [`JsonError::Parse`] if `json` is not valid JSON. A parsed shape
/// that does not match the prototype is not an error.
pub fn from_json<P: Prototype>(proto: P, json: &str) -> Result<Object<P>, JsonError> {
    let value: Value = serde_json::from_str(json).map_err(JsonError::Parse)?;
    Ok(Object::bind(value, proto))
}

/// Parse `json` straight into `T`.
///
/// # Errors
///
/// Returns [`JsonError::Parse`] if `json` is not valid JSON or does not
/// have the shape of `T`.
pub fn from_json_typed<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    serde_json::from_str(json).map_err(JsonError::Parse)
}
