//! A small, strict JSON document codec used as the on-disk format for diagrams.
//!
//! Documents are trees built from exactly five kinds of value: strings, booleans, 64-bit
//! integers, [`JsonObject`]s and [`JsonArray`]s. There is no null and no floating point. The
//! parser is a hand-written recursive descent parser (see [`parser`]) that rejects anything
//! outside this subset and reports the character offset where it gave up, so a front end can
//! point at the exact spot in the file.
//!
//! ```
//! use jsondoc::{parse, JsonObject, Value};
//!
//! let doc = JsonObject::parse(r#"{"nodes": [{"id": "a", "x": 10}]}"#).unwrap();
//! let node = doc.get_array("nodes").unwrap().get_object(0).unwrap();
//! assert_eq!(node.get_int("x"), Ok(10));
//! assert!(node.get_int("id").is_err());
//!
//! let err = parse(r#"{"a":}"#).unwrap_err();
//! assert_eq!(err.position, 5);
//!
//! let mut edge = JsonObject::new();
//! edge.put("from", "a").put("to", "b");
//! assert_eq!(parse(&edge.to_string()).unwrap(), Value::from(edge));
//! ```

mod array;
pub mod cursor;
mod edit_distance;
mod error;
pub mod escape;
mod limits;
mod object;
pub mod parser;
mod span;
mod validate;
mod value;
mod writer;

pub use array::JsonArray;
pub use cursor::Cursor;
pub use error::{DocumentError, ParseError, ParseErrorKind, ParseResult};
pub use limits::{Limits, DEFAULT_MAX_DEPTH};
pub use object::JsonObject;
pub use span::Span;
pub use value::Value;
pub use writer::write_to;

use tracing::trace;

/// Parse a complete document with the default [`Limits`].
pub fn parse(text: &str) -> ParseResult<Value> {
    parse_with_limits(text, Limits::default())
}

pub fn parse_with_limits(text: &str, limits: Limits) -> ParseResult<Value> {
    trace!(len = text.len(), ?limits, "parsing document");
    let mut cursor = Cursor::with_limits(text, limits);
    let result = parser::parse_document(&mut cursor);
    match &result {
        Ok(value) => trace!(kind = value.kind_desc(), "parsed document"),
        Err(e) => trace!(position = e.position, error = %e.kind, "document rejected"),
    }
    result
}

/// Serialize a document tree. An `indent_factor` of 0 gives compact output; anything larger
/// pretty-prints with that many spaces per nesting level.
pub fn write(value: &Value, indent_factor: usize) -> String {
    trace!(kind = value.kind_desc(), indent_factor, "writing document");
    writer::write(value, indent_factor)
}
