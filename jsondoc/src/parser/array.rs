use crate::array::JsonArray;
use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::value::Value;

use super::{parse_value, Rule};

/// `[` values `]`.
pub struct ArrayRule;

impl Rule for ArrayRule {
    fn is_applicable(&self, cursor: &Cursor) -> bool {
        cursor.is_next('[')
    }

    fn parse(&self, cursor: &mut Cursor) -> ParseResult<Value> {
        let open = cursor.next_offset();
        cursor.consume('[')?;
        cursor.enter(open)?;

        let mut array = JsonArray::new();
        let mut first = true;
        loop {
            cursor.skip_blanks();
            if cursor.is_next(']') {
                cursor.next()?;
                break;
            }
            if !first {
                cursor.consume(',')?;
                cursor.skip_blanks();
            }
            first = false;

            array.add(parse_value(cursor)?);
        }

        cursor.leave();
        Ok(Value::Array(array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    fn parse(text: &str) -> ParseResult<Value> {
        ArrayRule.parse(&mut Cursor::new(text))
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse("[]"), Ok(Value::Array(JsonArray::new())));
        assert_eq!(parse("[ \t ]"), Ok(Value::Array(JsonArray::new())));
    }

    #[test]
    fn test_mixed_elements_keep_order() {
        let mut expected = JsonArray::new();
        expected
            .add(1)
            .add("x")
            .add(false)
            .add(JsonArray::new())
            .add(1);
        assert_eq!(parse(r#"[1, "x",false,[] , 1]"#), Ok(Value::Array(expected)));
    }

    #[test]
    fn test_leading_comma() {
        let err = parse("[,1]").unwrap_err();
        assert_eq!(err.position, 1);
        assert_eq!(err.kind, ParseErrorKind::ExpectedValue(','));
    }

    #[test]
    fn test_trailing_comma() {
        let err = parse("[1,]").unwrap_err();
        assert_eq!(err.position, 3);
        assert_eq!(err.kind, ParseErrorKind::ExpectedValue(']'));
    }

    #[test]
    fn test_unterminated() {
        let err = parse("[1, 2").unwrap_err();
        assert_eq!(err.position, 5);
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd);
    }
}
