/// Limits applied while building a [`FormDocument`](crate::document::FormDocument).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Largest bracket index treated as an array position.
    ///
    /// Larger indices are kept as object keys so that a single short key
    /// cannot force a huge dense array.
    pub max_index: usize,
    /// Largest number of bracket groups read from one key.
    ///
    /// Deeper keys are cut at this depth, which also bounds the recursion
    /// of everything that walks the tree.
    pub max_depth: usize,
}

impl Config {
    pub const DEFAULT_MAX_INDEX: usize = 65_535;
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    pub fn with_max_index(mut self, max_index: usize) -> Self {
        self.max_index = max_index;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_index: Self::DEFAULT_MAX_INDEX,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
