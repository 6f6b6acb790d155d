// SPDX-License-Identifier: Apache-2.0

//! The tagged-union representation of one parsed JSON value.
//!
//! A [`Value`] tree is built bottom-up by one parse call and owned by the
//! caller afterwards; string payloads are copies, never borrows of the input
//! text. There is no mutation API. Objects hash their keys, so iteration
//! order is unspecified.

use std::collections::HashMap;

use crate::error::AccessError;
use crate::serializer;

/// A JSON value.
///
/// Exactly one variant is active at a time; asking for the wrong variant
/// through a typed accessor reports [`AccessError::TypeMismatch`] rather
/// than panicking. Numbers are `f64`, so integers beyond 2^53 lose
/// precision; there is no separate integer variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    /// JSON `true` or `false`.
    Bool(bool),
    /// A JSON number, stored as a double.
    Number(f64),
    /// A JSON string. Escape sequences from the source are carried through
    /// as their raw two-byte form, not decoded.
    String(String),
    /// A JSON array, in source order.
    Array(Vec<Value>),
    /// A JSON object. Duplicate keys in the source overwrite silently;
    /// iteration order is unspecified.
    Object(HashMap<String, Value>),
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The boolean payload. No coercion: a `Number` is not a `Bool`.
    pub fn as_bool(&self) -> Result<bool, AccessError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("boolean")),
        }
    }

    /// The number payload.
    pub fn as_f64(&self) -> Result<f64, AccessError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(other.mismatch("number")),
        }
    }

    /// The string payload.
    pub fn as_str(&self) -> Result<&str, AccessError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    /// The array payload.
    pub fn as_array(&self) -> Result<&[Value], AccessError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch("array")),
        }
    }

    /// The object payload.
    pub fn as_object(&self) -> Result<&HashMap<String, Value>, AccessError> {
        match self {
            Value::Object(members) => Ok(members),
            other => Err(other.mismatch("object")),
        }
    }

    /// Look up an object member by key.
    ///
    /// Fails with `TypeMismatch` on a non-object and `KeyNotFound` when the
    /// key is absent.
    pub fn get(&self, key: &str) -> Result<&Value, AccessError> {
        match self {
            Value::Object(members) => members
                .get(key)
                .ok_or_else(|| AccessError::KeyNotFound(key.to_string())),
            other => Err(other.mismatch("object")),
        }
    }

    /// Look up an array element by position.
    ///
    /// Fails with `TypeMismatch` on a non-array and `IndexOutOfRange` past
    /// the end.
    pub fn at(&self, index: usize) -> Result<&Value, AccessError> {
        match self {
            Value::Array(items) => items.get(index).ok_or(AccessError::IndexOutOfRange {
                index,
                len: items.len(),
            }),
            other => Err(other.mismatch("array")),
        }
    }

    /// The variant name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Render this value as compact JSON text.
    pub fn serialize(&self) -> String {
        serializer::to_string(self)
    }

    fn mismatch(&self, expected: &'static str) -> AccessError {
        AccessError::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Value::Null.is_null());
        assert!(Value::Bool(true).is_bool());
        assert!(Value::Number(42.0).is_number());
        assert!(Value::String("test".to_string()).is_string());
        assert!(Value::Array(vec![]).is_array());
        assert!(Value::Object(HashMap::new()).is_object());
    }

    #[test]
    fn test_typed_accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Ok(true));
        assert_eq!(Value::Number(42.0).as_f64(), Ok(42.0));
        assert_eq!(Value::String("hi".to_string()).as_str(), Ok("hi"));
    }

    #[test]
    fn test_no_coercion() {
        let err = Value::Number(1.0).as_bool().unwrap_err();
        assert_eq!(
            err,
            AccessError::TypeMismatch {
                expected: "boolean",
                found: "number",
            }
        );
        assert!(Value::String("true".to_string()).as_bool().is_err());
        assert!(Value::Bool(false).as_f64().is_err());
    }

    #[test]
    fn test_object_lookup() {
        let mut members = HashMap::new();
        members.insert("a".to_string(), Value::Number(1.0));
        let obj = Value::Object(members);

        assert_eq!(obj.get("a"), Ok(&Value::Number(1.0)));
        assert_eq!(
            obj.get("b"),
            Err(AccessError::KeyNotFound("b".to_string()))
        );
        assert!(matches!(
            Value::Null.get("a"),
            Err(AccessError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_array_lookup() {
        let arr = Value::Array(vec![Value::Bool(false), Value::Null]);

        assert_eq!(arr.at(0), Ok(&Value::Bool(false)));
        assert_eq!(
            arr.at(2),
            Err(AccessError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(matches!(
            Value::Number(0.0).at(0),
            Err(AccessError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Bool(false).type_name(), "boolean");
        assert_eq!(Value::Number(0.0).type_name(), "number");
        assert_eq!(Value::String(String::new()).type_name(), "string");
        assert_eq!(Value::Array(vec![]).type_name(), "array");
        assert_eq!(Value::Object(HashMap::new()).type_name(), "object");
    }
}
