//! Edit operations and positional transform.
//!
//! A [`TextChange`] describes a local document mutation as an ordered
//! sequence of retain/insert/delete steps, the payload the host editor hands
//! to its text-change notification. The overlay never applies these steps to
//! any text; it only remaps tracked cursor offsets through them so stale
//! positions stay valid after an edit.
//!
//! # Examples
//!
//! ```
//! use cursor_overlay::TextChange;
//!
//! // Insert "foo" at offset 5
//! let change = TextChange::new().retain(5).insert("foo");
//!
//! assert_eq!(change.transform_position(3), 3);
//! assert_eq!(change.transform_position(10), 13);
//! ```

use crate::range::Range;

/// One step of an edit operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangeStep {
    /// Skip over existing content.
    Retain(usize),
    /// Insert the given text at the current position.
    Insert(String),
    /// Delete content units at the current position.
    Delete(usize),
}

impl ChangeStep {
    /// Length of this step in content units.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Retain(n) | Self::Delete(n) => *n,
            Self::Insert(text) => text.chars().count(),
        }
    }

    /// Whether this step covers no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered sequence of edit steps over the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextChange {
    steps: Vec<ChangeStep>,
}

impl TextChange {
    /// Create an empty edit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a retain step.
    #[must_use]
    pub fn retain(mut self, n: usize) -> Self {
        self.steps.push(ChangeStep::Retain(n));
        self
    }

    /// Append an insert step.
    #[must_use]
    pub fn insert(mut self, text: &str) -> Self {
        self.steps.push(ChangeStep::Insert(text.to_string()));
        self
    }

    /// Append a delete step.
    #[must_use]
    pub fn delete(mut self, n: usize) -> Self {
        self.steps.push(ChangeStep::Delete(n));
        self
    }

    /// The underlying steps.
    #[must_use]
    pub fn steps(&self) -> &[ChangeStep] {
        &self.steps
    }

    /// Whether the edit has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Map a document offset through this edit.
    ///
    /// An insertion before or at the offset shifts it forward by the insert
    /// length; a deletion before it shifts it back by the overlapping deleted
    /// length; retained content never shifts it. Steps at positions past the
    /// offset have no effect.
    #[must_use]
    pub fn transform_position(&self, position: usize) -> usize {
        let mut index = position;
        let mut offset = 0usize;

        for step in &self.steps {
            if offset > index {
                break;
            }
            match step {
                ChangeStep::Delete(n) => {
                    index -= (*n).min(index - offset);
                }
                ChangeStep::Insert(text) => {
                    let len = text.chars().count();
                    index += len;
                    offset += len;
                }
                ChangeStep::Retain(n) => {
                    offset += n;
                }
            }
        }

        index
    }

    /// Map a range through this edit.
    ///
    /// Only the start offset is remapped; the length is carried over
    /// unchanged.
    #[must_use]
    pub fn transform_range(&self, range: Range) -> Range {
        Range {
            index: self.transform_position(range.index),
            length: range.length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_before_shifts_forward() {
        let change = TextChange::new().retain(5).insert("foo");
        assert_eq!(change.transform_position(10), 13);
    }

    #[test]
    fn test_insert_after_does_not_shift() {
        let change = TextChange::new().retain(20).insert("foo");
        assert_eq!(change.transform_position(10), 10);
    }

    #[test]
    fn test_insert_at_position_shifts() {
        let change = TextChange::new().retain(10).insert("ab");
        assert_eq!(change.transform_position(10), 12);
    }

    #[test]
    fn test_delete_before_shifts_back() {
        let change = TextChange::new().retain(2).delete(4);
        assert_eq!(change.transform_position(10), 6);
    }

    #[test]
    fn test_delete_spanning_position_clamps_to_delete_start() {
        let change = TextChange::new().retain(8).delete(10);
        assert_eq!(change.transform_position(10), 8);
    }

    #[test]
    fn test_retain_only_is_identity() {
        let change = TextChange::new().retain(100);
        assert_eq!(change.transform_position(42), 42);
    }

    #[test]
    fn test_mixed_steps() {
        let change = TextChange::new().delete(2).retain(3).insert("xyz");
        assert_eq!(change.transform_position(10), 11);
    }

    #[test]
    fn test_insert_length_in_chars() {
        let change = TextChange::new().insert("héllo");
        assert_eq!(change.transform_position(0), 5);
    }

    #[test]
    fn test_transform_range_preserves_length() {
        let change = TextChange::new().retain(5).insert("foo");
        let range = change.transform_range(Range::new(10, 5));
        assert_eq!(range, Range::new(13, 5));
    }
}
