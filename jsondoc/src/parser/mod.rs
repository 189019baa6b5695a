//! Recursive-descent parser, one rule per grammar production.
//!
//! Every [`Rule`] decides from a single character of lookahead whether it applies, and the
//! leading characters the rules accept are disjoint, so [`parse_value`] can dispatch to the
//! first applicable rule without backtracking. Containers call back into [`parse_value`] for
//! their elements.

mod array;
mod boolean;
mod integer;
mod object;
mod string;

pub use array::ArrayRule;
pub use boolean::BooleanRule;
pub use integer::IntegerRule;
pub use object::ObjectRule;
pub use string::StringRule;

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::value::Value;

/// A recognizer for one grammar production.
pub trait Rule: Sync {
    /// Can this rule parse what comes next? Must not move the cursor.
    fn is_applicable(&self, cursor: &Cursor) -> bool;

    /// Consume exactly this rule's production, leaving the cursor just past it.
    fn parse(&self, cursor: &mut Cursor) -> ParseResult<Value>;
}

static RULES: [&dyn Rule; 5] = [&StringRule, &BooleanRule, &IntegerRule, &ObjectRule, &ArrayRule];

/// Parse one value with whichever rule applies at the cursor.
pub fn parse_value(cursor: &mut Cursor) -> ParseResult<Value> {
    match RULES.iter().find(|rule| rule.is_applicable(cursor)) {
        Some(rule) => rule.parse(cursor),
        None => Err(cursor.error_here(match cursor.peek() {
            Some(c) => ParseErrorKind::ExpectedValue(c),
            None => ParseErrorKind::UnexpectedEnd,
        })),
    }
}

/// Parse a whole document: one value, optionally surrounded by whitespace, and nothing else.
pub fn parse_document(cursor: &mut Cursor) -> ParseResult<Value> {
    cursor.skip_blanks();
    let value = parse_value(cursor)?;
    cursor.skip_blanks();
    if cursor.has_more() {
        return Err(cursor.error_here(ParseErrorKind::TrailingCharacters));
    }
    Ok(value)
}

/// The error for a well-formed document whose top-level value does not start with `expected`.
/// It points at the first non-blank character.
pub(crate) fn top_level_mismatch(text: &str, expected: char) -> ParseError {
    let mut cursor = Cursor::new(text);
    cursor.skip_blanks();
    let found = cursor.peek().unwrap_or('\0');
    cursor.error_here(ParseErrorKind::UnexpectedChar { expected, found })
}
