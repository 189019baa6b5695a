use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::escape;
use crate::value::Value;

use super::Rule;

/// `"..."` with the short escapes and `\uXXXX`.
pub struct StringRule;

impl StringRule {
    /// Parse a string literal into its unescaped contents. Also used for object keys.
    pub fn parse_string(cursor: &mut Cursor) -> ParseResult<String> {
        cursor.consume('"')?;

        let mut out = String::new();
        loop {
            let offset = cursor.next_offset();
            match cursor.next()? {
                '"' => return Ok(out),
                '\\' => out.push(read_escape(cursor, offset)?),
                c if escape::is_control(c) => {
                    return Err(ParseError::new(
                        offset,
                        ParseErrorKind::ControlCharacter(c.into()),
                    ))
                }
                c => out.push(c),
            }
        }
    }
}

impl Rule for StringRule {
    fn is_applicable(&self, cursor: &Cursor) -> bool {
        cursor.is_next('"')
    }

    fn parse(&self, cursor: &mut Cursor) -> ParseResult<Value> {
        Self::parse_string(cursor).map(Value::String)
    }
}

/// Read what follows a backslash at `escape_start`.
fn read_escape(cursor: &mut Cursor, escape_start: usize) -> ParseResult<char> {
    let symbol = cursor.next()?;
    if let Some(c) = escape::code_point(symbol) {
        return Ok(c);
    }
    if symbol != 'u' {
        return Err(cursor.error_at_last(ParseErrorKind::InvalidEscape(symbol)));
    }

    let unpaired = |unit| ParseError::new(escape_start, ParseErrorKind::UnpairedSurrogate(unit));

    let unit = read_hex4(cursor)?;
    let code = match unit {
        0xD800..=0xDBFF => {
            // A high surrogate must be directly followed by an escaped low surrogate.
            if !cursor.has_more_n(2) || cursor.next_n(2)? != "\\u" {
                return Err(unpaired(unit));
            }
            let low = read_hex4(cursor)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(unpaired(unit));
            }
            0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
        }
        0xDC00..=0xDFFF => return Err(unpaired(unit)),
        _ => unit,
    };

    char::from_u32(code).ok_or_else(|| unpaired(code))
}

fn read_hex4(cursor: &mut Cursor) -> ParseResult<u32> {
    let start = cursor.next_offset();
    let digits = cursor.next_n(4)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseError::new(
            start,
            ParseErrorKind::InvalidUnicodeEscape(digits),
        ));
    }
    u32::from_str_radix(&digits, 16)
        .map_err(|_| ParseError::new(start, ParseErrorKind::InvalidUnicodeEscape(digits)))
}
