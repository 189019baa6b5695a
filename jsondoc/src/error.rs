//! Error types for document access and parsing.

use thiserror::Error;

use crate::span::Span;

/// Errors raised while reading or building a document tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// A typed getter found a value of a different kind.
    #[error("expected {expected} but found {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    /// The object has no property with the requested name.
    #[error("unknown property \"{name}\"{}", suggestion_suffix(.suggestion))]
    UnknownProperty {
        name: String,
        suggestion: Option<String>,
    },

    /// An array index at or past the end of the array.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean \"{s}\"?)"),
        None => String::new(),
    }
}

/// What went wrong during a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected:?} but found {found:?}")]
    UnexpectedChar { expected: char, found: char },

    /// No grammar rule applies at this position.
    #[error("expected a value but found {0:?}")]
    ExpectedValue(char),

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("duplicate key \"{0}\"")]
    DuplicateKey(String),

    #[error("invalid integer literal \"{0}\"")]
    InvalidInteger(String),

    #[error("integer literal \"{0}\" does not fit in 64 bits")]
    IntegerOutOfRange(String),

    #[error("invalid literal \"{0}\"")]
    InvalidLiteral(String),

    #[error("invalid escape character {0:?}")]
    InvalidEscape(char),

    #[error("invalid unicode escape \"\\u{0}\"")]
    InvalidUnicodeEscape(String),

    #[error("unpaired surrogate \\u{0:04x}")]
    UnpairedSurrogate(u32),

    #[error("control character U+{0:04X} in string literal")]
    ControlCharacter(u32),

    #[error("trailing characters after document")]
    TrailingCharacters,

    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// A grammar violation, tagged with the character offset at which it was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    pub position: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(position: usize, kind: ParseErrorKind) -> Self {
        Self { position, kind }
    }

    pub fn span(&self) -> Span {
        Span::at(self.position)
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
