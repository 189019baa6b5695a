use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::value::Value;

use super::Rule;

/// `-`? digits, without leading zeros and without `-0`.
pub struct IntegerRule;

impl Rule for IntegerRule {
    fn is_applicable(&self, cursor: &Cursor) -> bool {
        cursor.is_next('-') || cursor.peek().is_some_and(|c| c.is_ascii_digit())
    }

    fn parse(&self, cursor: &mut Cursor) -> ParseResult<Value> {
        let start = cursor.next_offset();

        let mut literal = String::new();
        if cursor.is_next('-') {
            literal.push(cursor.next()?);
        }
        while let Some(c) = cursor.peek().filter(char::is_ascii_digit) {
            cursor.next()?;
            literal.push(c);
        }

        let negative = literal.starts_with('-');
        let digits = literal.trim_start_matches('-');
        let leading_zero = digits.starts_with('0') && (digits.len() > 1 || negative);
        if digits.is_empty() || leading_zero {
            return Err(ParseError::new(start, ParseErrorKind::InvalidInteger(literal)));
        }

        literal
            .parse()
            .map(Value::Integer)
            .map_err(|_| ParseError::new(start, ParseErrorKind::IntegerOutOfRange(literal)))
    }
}
