//! The short escape sequences of JSON strings.
//!
//! Each entry pairs the symbol that follows a backslash with the character it stands for.

const TABLE: [(char, char); 8] = [
    ('"', '"'),
    ('\\', '\\'),
    ('/', '/'),
    ('b', '\u{8}'),
    ('t', '\t'),
    ('n', '\n'),
    ('f', '\u{c}'),
    ('r', '\r'),
];

/// Is `c` one of the eight short escape symbols?
pub fn is_symbol(c: char) -> bool {
    TABLE.iter().any(|&(symbol, _)| symbol == c)
}

/// The character a short escape symbol stands for, e.g. `n` → line feed.
pub fn code_point(symbol: char) -> Option<char> {
    TABLE
        .iter()
        .find(|&&(s, _)| s == symbol)
        .map(|&(_, literal)| literal)
}

/// Does `c` have a short escape form?
pub fn is_escapable(c: char) -> bool {
    TABLE.iter().any(|&(_, literal)| literal == c)
}

/// The escape symbol for a character, e.g. line feed → `n`.
pub fn escape_for(c: char) -> Option<char> {
    TABLE
        .iter()
        .find(|&&(_, literal)| literal == c)
        .map(|&(symbol, _)| symbol)
}

/// Is `c` a control character? These may not appear raw inside a string literal, and the
/// writer emits them as `\uXXXX` unless they have a short escape. Covers U+0000–U+001F,
/// U+007F and U+0080–U+009F.
pub fn is_control(c: char) -> bool {
    c.is_control()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        for c in ['b', 't', 'n', 'f', 'r', '"', '\\', '/'] {
            assert!(is_symbol(c), "{c:?}");
        }
        for c in ['u', 'a', 'x', '\'', '0'] {
            assert!(!is_symbol(c), "{c:?}");
        }
    }

    #[test]
    fn test_lookups_are_inverse() {
        for (symbol, literal) in TABLE {
            assert_eq!(code_point(symbol), Some(literal));
            assert_eq!(escape_for(literal), Some(symbol));
            assert!(is_escapable(literal));
        }
    }

    #[test]
    fn test_non_members() {
        assert_eq!(code_point('u'), None);
        assert_eq!(escape_for('a'), None);
        assert!(!is_escapable('\u{1}'));
    }

    #[test]
    fn test_control_range() {
        for c in ['\0', '\n', '\u{1f}', '\u{7f}', '\u{80}', '\u{9f}'] {
            assert!(is_control(c), "{c:?}");
        }
        for c in [' ', '~', '\u{a0}', 'é', '\u{2028}'] {
            assert!(!is_control(c), "{c:?}");
        }
    }
}
