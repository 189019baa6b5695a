//! The closed set of storable values.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::array::JsonArray;
use crate::object::JsonObject;

/// A document value: exactly one of string, boolean, integer, object or array.
///
/// There is deliberately no null and no floating point variant. Anything that converts
/// `Into<Value>` can be stored in a [`JsonObject`] or [`JsonArray`], and nothing else can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Boolean(bool),
    Integer(i64),
    Object(JsonObject),
    Array(JsonArray),
}

impl Value {
    pub const STRING: &'static str = "string";
    pub const BOOLEAN: &'static str = "boolean";
    pub const INTEGER: &'static str = "integer";
    pub const OBJECT: &'static str = "object";
    pub const ARRAY: &'static str = "array";

    /// Human readable name of this value's kind, for diagnostics.
    pub fn kind_desc(&self) -> &'static str {
        match self {
            Value::String(_) => Self::STRING,
            Value::Boolean(_) => Self::BOOLEAN,
            Value::Integer(_) => Self::INTEGER,
            Value::Object(_) => Self::OBJECT,
            Value::Array(_) => Self::ARRAY,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Serialize with the given indent factor. See [`crate::write`].
    pub fn to_string_pretty(&self, indent_factor: usize) -> String {
        crate::writer::write(self, indent_factor)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::writer::write_to(f, self, 0, 0)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<JsonObject> for Value {
    fn from(o: JsonObject) -> Self {
        Value::Object(o)
    }
}

impl From<JsonArray> for Value {
    fn from(a: JsonArray) -> Self {
        Value::Array(a)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Object(o) => o.serialize(serializer),
            Value::Array(a) => a.serialize(serializer),
        }
    }
}
