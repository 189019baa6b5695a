use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::error::{DocumentError, ParseError, ParseResult};
use crate::object::JsonObject;
use crate::validate;
use crate::value::Value;

/// An ordered, append-only sequence of values. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonArray {
    values: Vec<Value>,
}

impl JsonArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse text whose top-level value must be an array.
    pub fn parse(text: &str) -> ParseResult<Self> {
        match crate::parse(text)? {
            Value::Array(a) => Ok(a),
            _ => Err(crate::parser::top_level_mismatch(text, '[')),
        }
    }

    /// Append `value` to the end.
    pub fn add(&mut self, value: impl Into<Value>) -> &mut Self {
        self.values.push(value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Value, DocumentError> {
        validate::element(&self.values, index)
    }

    pub fn get_int(&self, index: usize) -> Result<i64, DocumentError> {
        validate::expect_int(self.get(index)?)
    }

    pub fn get_string(&self, index: usize) -> Result<&str, DocumentError> {
        validate::expect_str(self.get(index)?)
    }

    pub fn get_boolean(&self, index: usize) -> Result<bool, DocumentError> {
        validate::expect_bool(self.get(index)?)
    }

    pub fn get_object(&self, index: usize) -> Result<&JsonObject, DocumentError> {
        validate::expect_object(self.get(index)?)
    }

    pub fn get_array(&self, index: usize) -> Result<&JsonArray, DocumentError> {
        validate::expect_array(self.get(index)?)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Serialize with the given indent factor. See [`crate::write`].
    pub fn to_string_pretty(&self, indent_factor: usize) -> String {
        let mut out = String::new();
        let _ = crate::writer::write_array(&mut out, self, indent_factor, 0);
        out
    }

    pub(crate) fn values(&self) -> &[Value] {
        &self.values
    }
}

impl FromStr for JsonArray {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::writer::write_array(f, self, 0, 0)
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for JsonArray {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<V: Into<Value>> FromIterator<V> for JsonArray {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Value>> Extend<V> for JsonArray {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        self.values.extend(iter.into_iter().map(Into::into));
    }
}

impl Serialize for JsonArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
        for v in &self.values {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}
