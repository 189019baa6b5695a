use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::value::Value;

use super::Rule;

/// `true` or `false`.
pub struct BooleanRule;

impl Rule for BooleanRule {
    fn is_applicable(&self, cursor: &Cursor) -> bool {
        cursor.is_next('t') || cursor.is_next('f')
    }

    fn parse(&self, cursor: &mut Cursor) -> ParseResult<Value> {
        let start = cursor.next_offset();
        let (expected, value) = if cursor.is_next('t') {
            ("true", true)
        } else {
            ("false", false)
        };

        let literal = cursor.next_n(expected.len())?;
        if literal != expected {
            return Err(ParseError::new(start, ParseErrorKind::InvalidLiteral(literal)));
        }
        Ok(Value::Boolean(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParseResult<Value> {
        BooleanRule.parse(&mut Cursor::new(text))
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse("true"), Ok(Value::Boolean(true)));
        assert_eq!(parse("false"), Ok(Value::Boolean(false)));
    }

    #[test]
    fn test_consumes_only_the_literal() {
        let mut cursor = Cursor::new("true,");
        BooleanRule.parse(&mut cursor).unwrap();
        assert!(cursor.is_next(','));
    }

    #[test]
    fn test_garbled() {
        let err = parse("trve").unwrap_err();
        assert_eq!(err.position, 0);
        assert_eq!(err.kind, ParseErrorKind::InvalidLiteral("trve".to_string()));
        assert!(parse("fals3").is_err());
    }

    #[test]
    fn test_truncated() {
        assert_eq!(parse("fal").unwrap_err().kind, ParseErrorKind::UnexpectedEnd);
    }
}
