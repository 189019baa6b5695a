//! A single-pass reader over document text.
//!
//! Offsets are character offsets (Unicode scalar values), not byte offsets, so they line up
//! with what an editor shows. The cursor starts one before the first character: the first
//! call to [`Cursor::next`] returns the character at offset 0.

use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::limits::Limits;

/// Positional reader with one step of backtracking.
///
/// A cursor is owned by exactly one parse and thrown away afterwards.
#[derive(Debug)]
pub struct Cursor {
    text: Vec<char>,
    /// Number of characters read so far. Never exceeds `text.len()`.
    read: usize,
    depth: usize,
    limits: Limits,
}

impl Cursor {
    pub fn new(text: &str) -> Self {
        Self::with_limits(text, Limits::default())
    }

    pub fn with_limits(text: &str, limits: Limits) -> Self {
        Self {
            text: text.chars().collect(),
            read: 0,
            depth: 0,
            limits,
        }
    }

    /// Is there at least one more character?
    pub fn has_more(&self) -> bool {
        self.read < self.text.len()
    }

    /// Are there at least `n` more characters?
    pub fn has_more_n(&self, n: usize) -> bool {
        self.text.len() - self.read >= n
    }

    /// Read and consume one character.
    pub fn next(&mut self) -> ParseResult<char> {
        match self.text.get(self.read) {
            Some(&c) => {
                self.read += 1;
                Ok(c)
            }
            None => Err(self.error_here(ParseErrorKind::UnexpectedEnd)),
        }
    }

    /// Step back over the last character read, so the next [`Cursor::next`] returns it again.
    ///
    /// Panics if nothing has been read yet.
    pub fn back_up(&mut self) {
        assert!(self.read > 0, "cannot back up before the start of the input");
        self.read -= 1;
    }

    /// Is the next character `c`? Does not consume anything.
    pub fn is_next(&self, c: char) -> bool {
        self.peek() == Some(c)
    }

    pub fn peek(&self) -> Option<char> {
        self.text.get(self.read).copied()
    }

    /// Offset of the last character read, or `None` before the first read.
    pub fn position(&self) -> Option<usize> {
        self.read.checked_sub(1)
    }

    /// Offset of the character the next read would return. Equals the text length once the
    /// input is exhausted.
    pub fn next_offset(&self) -> usize {
        self.read
    }

    pub(crate) fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.read, kind)
    }

    /// Error for the character just read.
    pub(crate) fn error_at_last(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.position().unwrap_or(0), kind)
    }
}

// Parsing helpers. These turn grammar violations into position-tagged errors.
impl Cursor {
    /// Read one character and fail unless it is `expected`.
    pub fn consume(&mut self, expected: char) -> ParseResult<()> {
        let found = self.next()?;
        if found != expected {
            return Err(self.error_at_last(ParseErrorKind::UnexpectedChar { expected, found }));
        }
        Ok(())
    }

    /// Read exactly `n` characters.
    pub fn next_n(&mut self, n: usize) -> ParseResult<String> {
        if !self.has_more_n(n) {
            self.read = self.text.len();
            return Err(self.error_here(ParseErrorKind::UnexpectedEnd));
        }
        let s = self.text[self.read..self.read + n].iter().collect();
        self.read += n;
        Ok(s)
    }

    /// Advance past ECMA-404 whitespace. The next read returns the first non-blank character.
    pub fn skip_blanks(&mut self) {
        while let Some(c) = self.peek() {
            if !matches!(c, ' ' | '\t' | '\n' | '\r') {
                break;
            }
            self.read += 1;
        }
    }

    /// Record entry into a container opened at `offset`.
    pub(crate) fn enter(&mut self, offset: usize) -> ParseResult<()> {
        if self.depth >= self.limits.max_depth {
            return Err(ParseError::new(
                offset,
                ParseErrorKind::NestingTooDeep(self.limits.max_depth),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_starts_before_input() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.position(), None);
        assert_eq!(cursor.next(), Ok('a'));
        assert_eq!(cursor.position(), Some(0));
        assert_eq!(cursor.next(), Ok('b'));
        assert_eq!(cursor.position(), Some(1));
        assert!(!cursor.has_more());
    }

    #[test]
    fn test_next_past_end_fails_at_text_length() {
        let mut cursor = Cursor::new("a");
        cursor.next().unwrap();
        let err = cursor.next().unwrap_err();
        assert_eq!(err.position, 1);
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEnd);
        assert_eq!(cursor.position(), Some(0));
    }

    #[test]
    fn test_back_up_rereads_last_char() {
        let mut cursor = Cursor::new("xy");
        cursor.next().unwrap();
        cursor.back_up();
        assert_eq!(cursor.position(), None);
        assert_eq!(cursor.next(), Ok('x'));
    }

    #[test]
    #[should_panic]
    fn test_back_up_before_start_panics() {
        Cursor::new("x").back_up();
    }

    #[test]
    fn test_is_next_does_not_consume() {
        let cursor = Cursor::new("{");
        assert!(cursor.is_next('{'));
        assert!(!cursor.is_next('['));
        assert_eq!(cursor.position(), None);
    }

    #[test]
    fn test_has_more_n() {
        let mut cursor = Cursor::new("abcd");
        assert!(cursor.has_more_n(4));
        assert!(!cursor.has_more_n(5));
        cursor.next().unwrap();
        assert!(cursor.has_more_n(3));
        assert!(!cursor.has_more_n(4));
    }

    #[test]
    fn test_consume_mismatch_reports_offset_of_char() {
        let mut cursor = Cursor::new("ab");
        cursor.consume('a').unwrap();
        let err = cursor.consume(':').unwrap_err();
        assert_eq!(err.position, 1);
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedChar {
                expected: ':',
                found: 'b'
            }
        );
    }

    #[test]
    fn test_next_n() {
        let mut cursor = Cursor::new("0041\"");
        assert_eq!(cursor.next_n(4).unwrap(), "0041");
        assert_eq!(cursor.next(), Ok('"'));

        let mut short = Cursor::new("00");
        assert_eq!(short.next_n(4).unwrap_err().kind, ParseErrorKind::UnexpectedEnd);
    }

    #[test]
    fn test_skip_blanks_stops_on_first_non_blank() {
        let mut cursor = Cursor::new(" \t\r\n x");
        cursor.skip_blanks();
        assert_eq!(cursor.next_offset(), 5);
        assert_eq!(cursor.next(), Ok('x'));
    }

    #[test]
    fn test_skip_blanks_ignores_non_json_whitespace() {
        let mut cursor = Cursor::new("\u{a0}x");
        cursor.skip_blanks();
        assert_eq!(cursor.next_offset(), 0);
    }

    #[test]
    fn test_offsets_count_chars_not_bytes() {
        let mut cursor = Cursor::new("éx");
        cursor.next().unwrap();
        assert_eq!(cursor.next_offset(), 1);
        assert_eq!(cursor.next(), Ok('x'));
    }

    #[test]
    fn test_enter_respects_max_depth() {
        let mut cursor = Cursor::with_limits("", Limits { max_depth: 1 });
        cursor.enter(0).unwrap();
        let err = cursor.enter(1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NestingTooDeep(1));
        cursor.leave();
        cursor.enter(2).unwrap();
    }
}
