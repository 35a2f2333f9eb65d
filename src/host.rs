//! The host editor capability contract.
//!
//! The overlay does not own a document, a DOM, or an event loop; it consumes
//! a narrow slice of a rich-text editor through [`HostEditor`]. Anything that
//! can resolve logical offsets to leaves and pixel bounds can host the
//! overlay, including the in-memory mock the test suite uses.
//!
//! Event flow is inverted from a callback-based host: the application's event
//! loop forwards editor notifications as [`EditorEvent`] values into
//! [`CursorOverlay::handle_event`](crate::CursorOverlay::handle_event), and
//! calls [`CursorOverlay::run_pending`](crate::CursorOverlay::run_pending)
//! once the current turn has completed, which is where deferred text-change
//! work runs.

use crate::delta::TextChange;
use crate::geometry::Rect;
use crate::range::Range;

/// A resolved document position: the smallest host-addressable text-bearing
/// node plus an offset within it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaf<N> {
    /// Host node reference.
    pub node: N,
    /// Offset within the node, in content units.
    pub offset: usize,
}

/// Capabilities the overlay consumes from the host editor.
pub trait HostEditor {
    /// Host node reference type used in [`Leaf`] values.
    type Node: Clone;

    /// Inject a cursor layer element scoped to the editor's rendering root.
    /// Called once per overlay, at construction.
    fn add_container(&mut self, class: &str);

    /// Document length in content units.
    fn length(&self) -> usize;

    /// The local user's current selection, if any.
    fn selection(&self) -> Option<Range>;

    /// Resolve a document offset to a leaf. `None` means the offset is not
    /// currently resolvable (e.g. the editor is mid-mutation); the overlay
    /// treats that as a normal transient state.
    fn leaf(&self, offset: usize) -> Option<Leaf<Self::Node>>;

    /// Pixel bounds of the caret at a document offset, relative to the
    /// editor container (unlike [`selection_rects`](Self::selection_rects),
    /// which reports viewport client rectangles).
    fn caret_bounds(&self, offset: usize) -> Rect;

    /// Client rectangles covering the span between two leaves, in viewport
    /// coordinates. Wrapped lines and RTL runs yield multiple rectangles.
    fn selection_rects(&self, start: &Leaf<Self::Node>, end: &Leaf<Self::Node>) -> Vec<Rect>;

    /// Bounding box of the editor's root container, in viewport coordinates.
    fn container_bounds(&self) -> Rect;

    /// Re-inject a synthetic selection-change notification into the host's
    /// event bus.
    fn emit_selection_change(
        &mut self,
        new: Option<Range>,
        previous: Option<Range>,
        source: &str,
    );
}

/// An editor notification forwarded into the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    /// A local edit was applied; carries the edit operation.
    TextChange(TextChange),
    /// The local selection changed.
    SelectionChange(Option<Range>),
    /// The editing surface scrolled.
    Scroll,
    /// The editing surface was resized.
    Resize,
}

impl EditorEvent {
    /// Whether this event reconciles synchronously (scroll/resize).
    #[must_use]
    pub fn is_layout(&self) -> bool {
        matches!(self, Self::Scroll | Self::Resize)
    }
}
