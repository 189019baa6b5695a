//! Serialization of document trees back to text.
//!
//! With an indent factor of zero the output is compact: no whitespace at all. With a positive
//! indent factor, containers with two or more entries put each entry on its own line, indented
//! `indent_factor` spaces deeper than the container; a container with a single entry stays on
//! one line.

use std::fmt::{self, Write};

use crate::array::JsonArray;
use crate::escape;
use crate::object::JsonObject;
use crate::value::Value;

/// Serialize `value`, pretty-printing if `indent_factor > 0`.
pub fn write(value: &Value, indent_factor: usize) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_to(&mut out, value, indent_factor, 0);
    out
}

/// Serialize `value` into `w`, as if it started at column `indent`.
pub fn write_to<W: Write>(
    w: &mut W,
    value: &Value,
    indent_factor: usize,
    indent: usize,
) -> fmt::Result {
    match value {
        Value::String(s) => write_quoted(w, s),
        Value::Boolean(b) => write!(w, "{b}"),
        Value::Integer(n) => write!(w, "{n}"),
        Value::Object(o) => write_object(w, o, indent_factor, indent),
        Value::Array(a) => write_array(w, a, indent_factor, indent),
    }
}

pub(crate) fn write_object<W: Write>(
    w: &mut W,
    object: &JsonObject,
    indent_factor: usize,
    indent: usize,
) -> fmt::Result {
    w.write_char('{')?;
    if object.len() == 1 {
        for (name, value) in object.iter() {
            write_member(w, name, value, indent_factor, indent)?;
        }
    } else if !object.is_empty() {
        let inner = indent + indent_factor;
        for (i, (name, value)) in object.iter().enumerate() {
            if i > 0 {
                w.write_char(',')?;
            }
            write_line_break(w, indent_factor, inner)?;
            write_member(w, name, value, indent_factor, inner)?;
        }
        write_line_break(w, indent_factor, indent)?;
    }
    w.write_char('}')
}

pub(crate) fn write_array<W: Write>(
    w: &mut W,
    array: &JsonArray,
    indent_factor: usize,
    indent: usize,
) -> fmt::Result {
    w.write_char('[')?;
    match array.values() {
        [] => {}
        [only] => write_to(w, only, indent_factor, indent)?,
        values => {
            let inner = indent + indent_factor;
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    w.write_char(',')?;
                }
                write_line_break(w, indent_factor, inner)?;
                write_to(w, value, indent_factor, inner)?;
            }
            write_line_break(w, indent_factor, indent)?;
        }
    }
    w.write_char(']')
}

fn write_member<W: Write>(
    w: &mut W,
    name: &str,
    value: &Value,
    indent_factor: usize,
    indent: usize,
) -> fmt::Result {
    write_quoted(w, name)?;
    w.write_char(':')?;
    if indent_factor > 0 {
        w.write_char(' ')?;
    }
    write_to(w, value, indent_factor, indent)
}

/// Newline plus `indent` spaces, only when pretty-printing.
fn write_line_break<W: Write>(w: &mut W, indent_factor: usize, indent: usize) -> fmt::Result {
    if indent_factor == 0 {
        return Ok(());
    }
    w.write_char('\n')?;
    write!(w, "{:indent$}", "")
}

fn write_quoted<W: Write>(w: &mut W, s: &str) -> fmt::Result {
    w.write_char('"')?;
    for c in s.chars() {
        if let Some(symbol) = escape::escape_for(c) {
            w.write_char('\\')?;
            w.write_char(symbol)?;
        } else if escape::is_control(c) {
            write!(w, "\\u{:04x}", u32::from(c))?;
        } else {
            w.write_char(c)?;
        }
    }
    w.write_char('"')
}
