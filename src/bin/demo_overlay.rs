//! Demo: drive the cursor overlay against a small in-process editor.
//!
//! Builds a one-line document with fixed-width font metrics, attaches two
//! remote cursors, applies a local edit, and prints the reconciled geometry
//! after each step.

use cursor_overlay::{
    Config, CursorOverlay, EditorEvent, HostEditor, Leaf, Range, Rect, TextChange,
};

const CELL_WIDTH: f64 = 8.0;
const LINE_HEIGHT: f64 = 18.0;

/// A single-line in-memory editor with fixed metrics.
struct DemoEditor {
    text: String,
    selection: Option<Range>,
}

impl DemoEditor {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            selection: Some(Range::caret(0)),
        }
    }

    fn apply(&mut self, at: usize, insert: &str) {
        let byte = self
            .text
            .char_indices()
            .nth(at)
            .map_or(self.text.len(), |(b, _)| b);
        self.text.insert_str(byte, insert);
    }
}

impl HostEditor for DemoEditor {
    type Node = usize;

    fn add_container(&mut self, class: &str) {
        println!("[editor] cursor layer attached ({class})");
    }

    fn length(&self) -> usize {
        self.text.chars().count()
    }

    fn selection(&self) -> Option<Range> {
        self.selection
    }

    fn leaf(&self, offset: usize) -> Option<Leaf<usize>> {
        (offset <= self.length()).then_some(Leaf { node: 0, offset })
    }

    fn caret_bounds(&self, offset: usize) -> Rect {
        Rect::new(offset as f64 * CELL_WIDTH, 0.0, 2.0, LINE_HEIGHT)
    }

    fn selection_rects(&self, start: &Leaf<usize>, end: &Leaf<usize>) -> Vec<Rect> {
        let width = (end.offset.saturating_sub(start.offset)) as f64 * CELL_WIDTH;
        vec![Rect::new(
            start.offset as f64 * CELL_WIDTH,
            0.0,
            width,
            LINE_HEIGHT,
        )]
    }

    fn container_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 640.0, LINE_HEIGHT)
    }

    fn emit_selection_change(
        &mut self,
        new: Option<Range>,
        previous: Option<Range>,
        source: &str,
    ) {
        println!("[editor] selection-change {previous:?} -> {new:?} (source: {source})");
    }
}

fn print_cursors<H: HostEditor>(overlay: &CursorOverlay<H>) {
    for cursor in overlay.cursors() {
        let visual = cursor.visual();
        match (cursor.range, visual.caret) {
            (Some(range), Some(caret)) => println!(
                "  {} ({}) at {}..{}: caret x={:.0}, {} selection rect(s)",
                cursor.id(),
                cursor.name(),
                range.index,
                range.end(),
                caret.left,
                visual.selection_rects.len(),
            ),
            _ => println!("  {} ({}): hidden", cursor.id(), cursor.name()),
        }
    }
}

fn main() -> cursor_overlay::Result<()> {
    let editor = DemoEditor::new("The quick brown fox jumps over the lazy dog");

    let config = Config {
        transform_on_text_change: true,
        ..Config::default()
    };
    let mut overlay = CursorOverlay::new(editor, config)?;

    overlay.create_cursor("alice", "Alice", "#e91e63");
    overlay.create_cursor("bob", "Bob", "#2196f3");
    overlay.move_cursor("alice", Some(Range::new(4, 5)));
    overlay.move_cursor("bob", Some(Range::caret(16)));

    println!("initial:");
    print_cursors(&overlay);

    // Local edit: insert "very " before "quick", then notify the overlay the
    // way a host event loop would.
    let change = TextChange::new().retain(4).insert("very ");
    overlay.host_mut().apply(4, "very ");
    overlay.host_mut().selection = Some(Range::caret(9));
    overlay.handle_event(EditorEvent::TextChange(change));
    overlay.run_pending();

    println!("after insert at 4:");
    print_cursors(&overlay);

    overlay.handle_event(EditorEvent::Scroll);
    println!("after scroll reconcile:");
    print_cursors(&overlay);

    Ok(())
}
