//! Geometry reconciliation.
//!
//! Reconciliation recomputes one cursor's on-screen geometry from its
//! logical range. It runs on every cursor move, after text changes, and on
//! scroll/resize, because any of those invalidate previously computed pixel
//! coordinates. Failure paths are normal states: a cursor with no range, or
//! one whose offsets do not currently resolve to leaves, is simply hidden.

use crate::cursor::Cursor;
use crate::event::{LogLevel, emit_log};
use crate::host::HostEditor;
use crate::range::clamp_offset;

/// Recompute a cursor's caret and selection geometry from its range.
pub fn update_cursor<H: HostEditor>(host: &H, cursor: &mut Cursor) {
    let Some(range) = cursor.range else {
        cursor.hide();
        return;
    };

    // Stale ranges can outlive a shrinking document.
    let len = host.length();
    let start = clamp_offset(range.index, len);
    let end = clamp_offset(range.end(), len);

    let (Some(start_leaf), Some(end_leaf)) = (host.leaf(start), host.leaf(end)) else {
        emit_log(
            LogLevel::Debug,
            &format!("cursor {}: leaf unresolved, hiding", cursor.id()),
        );
        cursor.hide();
        return;
    };

    cursor.show();
    cursor.update_caret(host.caret_bounds(end));

    let rects = host.selection_rects(&start_leaf, &end_leaf);
    let container = host.container_bounds();
    cursor.update_selection(&rects, &container);
}
