//! Logical document ranges.
//!
//! A [`Range`] is a position plus a length measured in content units
//! (characters), independent of how the host editor renders them. Ranges are
//! half-open: `[index, index + length)`. A caret is a zero-length range.

/// A logical selection range within the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Range {
    /// Start offset in content units.
    pub index: usize,
    /// Number of content units covered. Zero for a bare caret.
    pub length: usize,
}

impl Range {
    /// Create a new range.
    #[must_use]
    pub fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// A zero-length range (caret) at the given offset.
    #[must_use]
    pub fn caret(index: usize) -> Self {
        Self { index, length: 0 }
    }

    /// End offset (exclusive).
    #[must_use]
    pub fn end(&self) -> usize {
        self.index + self.length
    }

    /// Whether this range is a bare caret.
    #[must_use]
    pub fn is_caret(&self) -> bool {
        self.length == 0
    }
}

/// Clamp an offset into the document bounds `[0, len]`.
///
/// Stale ranges can reference positions beyond a shrunk document; leaf
/// lookups must never see such offsets.
#[must_use]
pub fn clamp_offset(offset: usize, len: usize) -> usize {
    offset.min(len)
}
