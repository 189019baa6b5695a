use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::array::JsonArray;
use crate::error::{DocumentError, ParseError, ParseErrorKind, ParseResult};
use crate::validate;
use crate::value::Value;

/// A mapping from unique property names to values.
///
/// Member order is not part of the contract: two objects with the same members compare equal
/// whatever order they were inserted in, and the writer may emit members in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonObject {
    members: IndexMap<String, Value>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse text whose top-level value must be an object.
    pub fn parse(text: &str) -> ParseResult<Self> {
        match crate::parse(text)? {
            Value::Object(o) => Ok(o),
            _ => Err(crate::parser::top_level_mismatch(text, '{')),
        }
    }

    /// Set `name` to `value`, silently replacing any previous value.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.members.insert(name.into(), value.into());
        self
    }

    /// Insert a member read from document text, where a repeated name is an error.
    pub(crate) fn put_unique(
        &mut self,
        name: String,
        value: Value,
        key_offset: usize,
    ) -> ParseResult<()> {
        if self.members.contains_key(&name) {
            return Err(ParseError::new(key_offset, ParseErrorKind::DuplicateKey(name)));
        }
        self.members.insert(name, value);
        Ok(())
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, name: &str) -> Result<&Value, DocumentError> {
        validate::property(self, name)
    }

    pub fn get_int(&self, name: &str) -> Result<i64, DocumentError> {
        validate::expect_int(self.get(name)?)
    }

    pub fn get_string(&self, name: &str) -> Result<&str, DocumentError> {
        validate::expect_str(self.get(name)?)
    }

    pub fn get_boolean(&self, name: &str) -> Result<bool, DocumentError> {
        validate::expect_bool(self.get(name)?)
    }

    pub fn get_object(&self, name: &str) -> Result<&JsonObject, DocumentError> {
        validate::expect_object(self.get(name)?)
    }

    pub fn get_array(&self, name: &str) -> Result<&JsonArray, DocumentError> {
        validate::expect_array(self.get(name)?)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn members(&self) -> &IndexMap<String, Value> {
        &self.members
    }

    /// Serialize with the given indent factor. See [`crate::write`].
    pub fn to_string_pretty(&self, indent_factor: usize) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = crate::writer::write_object(&mut out, self, indent_factor, 0);
        out
    }
}

impl FromStr for JsonObject {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::writer::write_object(f, self, 0, 0)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for JsonObject {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut object = JsonObject::new();
        for (k, v) in iter {
            object.put(k, v);
        }
        object
    }
}

impl Serialize for JsonObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.members.len()))?;
        for (k, v) in &self.members {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_overwrites_silently() {
        let mut object = JsonObject::new();
        object.put("a", 1);
        object.put("a", 2);
        assert_eq!(object.len(), 1);
        assert_eq!(object.get_int("a"), Ok(2));
    }

    #[test]
    fn test_put_unique_rejects_repeat() {
        let mut object = JsonObject::new();
        object.put_unique("a".to_string(), Value::Integer(1), 1).unwrap();
        let err = object
            .put_unique("a".to_string(), Value::Integer(2), 7)
            .unwrap_err();
        assert_eq!(err.position, 7);
        assert_eq!(err.kind, ParseErrorKind::DuplicateKey("a".to_string()));
        assert_eq!(object.get_int("a"), Ok(1));
    }

    #[test]
    fn test_typed_getters() {
        let mut inner = JsonObject::new();
        inner.put("x", 10);
        let mut object = JsonObject::new();
        object
            .put("name", "box")
            .put("visible", true)
            .put("width", 40)
            .put("origin", inner.clone())
            .put("tags", JsonArray::new());

        assert_eq!(object.get_string("name"), Ok("box"));
        assert_eq!(object.get_boolean("visible"), Ok(true));
        assert_eq!(object.get_int("width"), Ok(40));
        assert_eq!(object.get_object("origin"), Ok(&inner));
        assert!(object.get_array("tags").unwrap().is_empty());
        assert!(object.has_property("origin"));
        assert!(!object.has_property("height"));
        assert_eq!(object.len(), 5);
    }

    #[test]
    fn test_getter_never_coerces() {
        let mut object = JsonObject::new();
        object.put("k", "12");
        assert_eq!(
            object.get_int("k"),
            Err(DocumentError::WrongType {
                expected: "integer",
                found: "string"
            })
        );
        assert!(object.get_boolean("k").is_err());
    }

    #[test]
    fn test_unknown_property() {
        let object = JsonObject::new();
        assert!(matches!(
            object.get("missing"),
            Err(DocumentError::UnknownProperty { .. })
        ));
    }

    #[test]
    fn test_equality_ignores_member_order() {
        let a: JsonObject = [("x", 1), ("y", 2)].into_iter().collect();
        let b: JsonObject = [("y", 2), ("x", 1)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_requires_object() {
        let object: JsonObject = r#"{"a": true}"#.parse().unwrap();
        assert_eq!(object.get_boolean("a"), Ok(true));

        let err = JsonObject::parse("  [1]").unwrap_err();
        assert_eq!(err.position, 2);
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedChar {
                expected: '{',
                found: '['
            }
        );
    }
}
