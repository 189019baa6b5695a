//! Resource limits for parsing.

/// Default maximum container nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Bounds applied while parsing. Containers are parsed recursively, so the depth limit keeps
/// hostile input from exhausting the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of nested objects/arrays.
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
