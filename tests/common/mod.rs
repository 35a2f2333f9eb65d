//! Shared test fixtures.
//!
//! [`MockEditor`] implements the [`HostEditor`] contract over an in-memory
//! rope document with fixed-width font metrics: leaves are (line, column)
//! pairs, carets are one column wide, and selections cover one rectangle per
//! line. It records leaf lookups and emitted selection changes so tests can
//! assert on the overlay's interaction with the host.

#![allow(dead_code)] // Not every suite uses every helper

use std::cell::RefCell;

use cursor_overlay::{HostEditor, Leaf, Range, Rect};
use ropey::Rope;
use unicode_width::UnicodeWidthStr;

/// Pixel width of one display column.
pub const CELL_WIDTH: f64 = 8.0;
/// Pixel height of one line.
pub const LINE_HEIGHT: f64 = 18.0;
/// Viewport position of the editor container.
pub const CONTAINER: Rect = Rect {
    left: 100.0,
    top: 50.0,
    width: 640.0,
    height: 480.0,
};

/// An emitted selection-change notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Emitted {
    pub new: Option<Range>,
    pub previous: Option<Range>,
    pub source: String,
}

/// In-memory host editor for tests.
pub struct MockEditor {
    doc: Rope,
    pub selection: Option<Range>,
    /// When set, every leaf lookup fails (editor "mid-mutation").
    pub fail_leaves: bool,
    /// Vertical scroll offset applied to all reported geometry.
    pub scroll_top: f64,
    /// CSS classes passed to `add_container`.
    pub containers: Vec<String>,
    /// Offsets passed to `leaf`, in call order.
    pub leaf_lookups: RefCell<Vec<usize>>,
    /// Selection-change notifications re-injected by the overlay.
    pub emitted: Vec<Emitted>,
}

impl MockEditor {
    pub fn new(text: &str) -> Self {
        Self {
            doc: Rope::from_str(text),
            selection: Some(Range::caret(0)),
            fail_leaves: false,
            scroll_top: 0.0,
            containers: Vec::new(),
            leaf_lookups: RefCell::new(Vec::new()),
            emitted: Vec::new(),
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.doc = Rope::from_str(text);
    }

    pub fn insert(&mut self, offset: usize, text: &str) {
        self.doc.insert(offset, text);
    }

    /// Display column of a char offset within its line.
    fn column(&self, line: usize, in_line: usize) -> f64 {
        let start = self.doc.line_to_char(line);
        let prefix: String = self.doc.slice(start..start + in_line).to_string();
        prefix.width() as f64
    }

    fn line_rect(&self, line: usize, start_col: f64, end_col: f64) -> Rect {
        Rect::new(
            CONTAINER.left + start_col * CELL_WIDTH,
            CONTAINER.top + line as f64 * LINE_HEIGHT - self.scroll_top,
            (end_col - start_col) * CELL_WIDTH,
            LINE_HEIGHT,
        )
    }
}

impl HostEditor for MockEditor {
    type Node = usize;

    fn add_container(&mut self, class: &str) {
        self.containers.push(class.to_string());
    }

    fn length(&self) -> usize {
        self.doc.len_chars()
    }

    fn selection(&self) -> Option<Range> {
        self.selection
    }

    fn leaf(&self, offset: usize) -> Option<Leaf<usize>> {
        self.leaf_lookups.borrow_mut().push(offset);
        if self.fail_leaves || offset > self.doc.len_chars() {
            return None;
        }
        let line = self.doc.char_to_line(offset);
        Some(Leaf {
            node: line,
            offset: offset - self.doc.line_to_char(line),
        })
    }

    fn caret_bounds(&self, offset: usize) -> Rect {
        let offset = offset.min(self.doc.len_chars());
        let line = self.doc.char_to_line(offset);
        let col = self.column(line, offset - self.doc.line_to_char(line));
        // Container-relative, unlike selection_rects.
        self.line_rect(line, col, col + 0.25).relative_to(&CONTAINER)
    }

    fn selection_rects(&self, start: &Leaf<usize>, end: &Leaf<usize>) -> Vec<Rect> {
        let mut rects = Vec::new();
        for line in start.node..=end.node {
            let from = if line == start.node {
                self.column(line, start.offset)
            } else {
                0.0
            };
            let to = if line == end.node {
                self.column(line, end.offset)
            } else {
                let len = self.doc.line(line).len_chars();
                self.column(line, len)
            };
            rects.push(self.line_rect(line, from, to));
        }
        rects
    }

    fn container_bounds(&self) -> Rect {
        CONTAINER
    }

    fn emit_selection_change(
        &mut self,
        new: Option<Range>,
        previous: Option<Range>,
        source: &str,
    ) {
        self.emitted.push(Emitted {
            new,
            previous,
            source: source.to_string(),
        });
    }
}
