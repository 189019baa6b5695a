//! Runtime checks on document access.
//!
//! The value enum already keeps anything but the five storable kinds out of a document, so
//! what is left to check at runtime is that a stored value has the kind a caller asked for,
//! that an index is in range, and that a property exists. Every getter on
//! [`JsonObject`](crate::JsonObject) and [`JsonArray`](crate::JsonArray) goes through here.

use crate::array::JsonArray;
use crate::edit_distance::find_best_match_for_name;
use crate::error::DocumentError;
use crate::object::JsonObject;
use crate::value::Value;

fn wrong_type(expected: &'static str, found: &Value) -> DocumentError {
    DocumentError::WrongType {
        expected,
        found: found.kind_desc(),
    }
}

pub(crate) fn expect_int(value: &Value) -> Result<i64, DocumentError> {
    value.as_i64().ok_or_else(|| wrong_type(Value::INTEGER, value))
}

pub(crate) fn expect_str(value: &Value) -> Result<&str, DocumentError> {
    value.as_str().ok_or_else(|| wrong_type(Value::STRING, value))
}

pub(crate) fn expect_bool(value: &Value) -> Result<bool, DocumentError> {
    value.as_bool().ok_or_else(|| wrong_type(Value::BOOLEAN, value))
}

pub(crate) fn expect_object(value: &Value) -> Result<&JsonObject, DocumentError> {
    value.as_object().ok_or_else(|| wrong_type(Value::OBJECT, value))
}

pub(crate) fn expect_array(value: &Value) -> Result<&JsonArray, DocumentError> {
    value.as_array().ok_or_else(|| wrong_type(Value::ARRAY, value))
}

pub(crate) fn element(values: &[Value], index: usize) -> Result<&Value, DocumentError> {
    values.get(index).ok_or(DocumentError::IndexOutOfBounds {
        index,
        len: values.len(),
    })
}

pub(crate) fn property<'o>(object: &'o JsonObject, name: &str) -> Result<&'o Value, DocumentError> {
    object
        .members()
        .get(name)
        .ok_or_else(|| DocumentError::UnknownProperty {
            name: name.to_owned(),
            suggestion: find_best_match_for_name(object.keys(), name, None).map(str::to_owned),
        })
}
