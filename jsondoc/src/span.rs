/// The half-open character range `lo..hi` of a document that an error report underlines.
///
/// Offsets count Unicode scalar values from the start of the text, the same unit as
/// [`ParseError::position`](crate::ParseError::position), so a span can go straight into a
/// diagnostic label. `lo` never exceeds `hi`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub lo: usize,
    pub hi: usize,
}

impl Span {
    /// The range `lo..hi`.
    ///
    /// # Panics
    ///
    /// If `lo > hi`.
    pub const fn new(lo: usize, hi: usize) -> Self {
        assert!(lo <= hi, "span starts after it ends");
        Span { lo, hi }
    }

    /// A span covering exactly the character at `offset`.
    pub const fn at(offset: usize) -> Self {
        Span::new(offset, offset + 1)
    }

    pub fn into_range(self) -> std::ops::Range<usize> {
        self.lo..self.hi
    }
}
