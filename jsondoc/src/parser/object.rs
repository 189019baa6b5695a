use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::object::JsonObject;
use crate::value::Value;

use super::string::StringRule;
use super::{parse_value, Rule};

/// `{` members `}`. A key may appear only once per object literal.
pub struct ObjectRule;

impl Rule for ObjectRule {
    fn is_applicable(&self, cursor: &Cursor) -> bool {
        cursor.is_next('{')
    }

    fn parse(&self, cursor: &mut Cursor) -> ParseResult<Value> {
        let open = cursor.next_offset();
        cursor.consume('{')?;
        cursor.enter(open)?;

        let mut object = JsonObject::new();
        let mut first = true;
        loop {
            cursor.skip_blanks();
            if cursor.is_next('}') {
                cursor.next()?;
                break;
            }
            if !first {
                cursor.consume(',')?;
                cursor.skip_blanks();
            }
            first = false;

            let key_offset = cursor.next_offset();
            let key = StringRule::parse_string(cursor)?;
            cursor.skip_blanks();
            cursor.consume(':')?;
            cursor.skip_blanks();
            let value = parse_value(cursor)?;
            object.put_unique(key, value, key_offset)?;
        }

        cursor.leave();
        Ok(Value::Object(object))
    }
}
