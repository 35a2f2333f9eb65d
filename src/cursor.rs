//! Remote cursor entities.
//!
//! A [`Cursor`] owns one remote participant's identity, color, last-known
//! logical range, and visual state. Pixel geometry lives in
//! [`CursorVisual`]; the overlay recomputes it on every reconciliation and a
//! host applies it to whatever element the rendered markup became.

use bitflags::bitflags;

use crate::config::Config;
use crate::geometry::Rect;
use crate::range::Range;
use crate::template::{Template, TemplateValues};

bitflags! {
    /// Which parts of a cursor's visual element are currently shown.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Visibility: u8 {
        /// The caret bar is shown.
        const CARET     = 0x01;
        /// The selection highlight is shown.
        const SELECTION = 0x02;
    }
}

/// On-screen state of a cursor's visual element.
///
/// Selection geometry is a set of disjoint rectangles rather than one box:
/// wrapped lines and RTL runs produce several client rects per range. All
/// rectangles are relative to the editor container.
#[derive(Clone, Debug, Default)]
pub struct CursorVisual {
    /// Markup for the cursor element, rendered from the configured template.
    pub markup: String,
    /// Caret rectangle, if geometry has been resolved.
    pub caret: Option<Rect>,
    /// Selection highlight rectangles.
    pub selection_rects: Vec<Rect>,
    /// Current visibility flags.
    pub visibility: Visibility,
}

/// One remote participant's cursor.
#[derive(Clone, Debug)]
pub struct Cursor {
    id: String,
    name: String,
    color: String,
    /// Last-known logical range. Absent when no caret position is known.
    pub range: Option<Range>,
    visual: CursorVisual,
}

impl Cursor {
    /// Create a cursor with no range and an empty visual.
    #[must_use]
    pub fn new(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            range: None,
            visual: CursorVisual::default(),
        }
    }

    /// Opaque identity, assigned by the caller.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Visual style token.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Current visual state.
    #[must_use]
    pub fn visual(&self) -> &CursorVisual {
        &self.visual
    }

    /// Instantiate the visual element markup from the template.
    pub(crate) fn build(&mut self, template: &Template, config: &Config) {
        self.visual.markup = template.render(&TemplateValues {
            name: &self.name,
            color: &self.color,
            delay_ms: config.hide_delay.as_millis() as u64,
            speed_ms: config.hide_speed.as_millis() as u64,
        });
    }

    /// Show caret and selection.
    pub(crate) fn show(&mut self) {
        self.visual.visibility = Visibility::CARET | Visibility::SELECTION;
    }

    /// Hide caret and selection and drop stale geometry.
    pub(crate) fn hide(&mut self) {
        self.visual.visibility = Visibility::empty();
        self.visual.caret = None;
        self.visual.selection_rects.clear();
    }

    /// Whether any part of the cursor is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.visual.visibility.is_empty()
    }

    /// Place the caret at the given rectangle.
    pub(crate) fn update_caret(&mut self, bounds: Rect) {
        self.visual.caret = Some(bounds);
    }

    /// Replace the selection highlight rectangles, translating each into the
    /// container's coordinate space. Zero-area rects are dropped.
    pub(crate) fn update_selection(&mut self, rects: &[Rect], container: &Rect) {
        self.visual.selection_rects.clear();
        for rect in rects {
            let relative = rect.relative_to(container);
            if !relative.is_empty() {
                self.visual.selection_rects.push(relative);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_is_hidden_with_no_range() {
        let cursor = Cursor::new("abc", "Joe Bloggs", "red");
        assert_eq!(cursor.id(), "abc");
        assert_eq!(cursor.name(), "Joe Bloggs");
        assert_eq!(cursor.color(), "red");
        assert!(cursor.range.is_none());
        assert!(!cursor.is_visible());
    }

    #[test]
    fn test_show_hide() {
        let mut cursor = Cursor::new("abc", "Joe", "red");
        cursor.show();
        assert!(cursor.is_visible());
        assert_eq!(
            cursor.visual().visibility,
            Visibility::CARET | Visibility::SELECTION
        );

        cursor.update_caret(Rect::new(1.0, 2.0, 2.0, 14.0));
        cursor.hide();
        assert!(!cursor.is_visible());
        assert!(cursor.visual().caret.is_none());
        assert!(cursor.visual().selection_rects.is_empty());
    }

    #[test]
    fn test_build_renders_template() {
        let config = Config::default();
        let template = Template::compile("{{name}}:{{color}}").expect("compile");
        let mut cursor = Cursor::new("abc", "Joe", "red");
        cursor.build(&template, &config);
        assert_eq!(cursor.visual().markup, "Joe:red");
    }

    #[test]
    fn test_update_selection_translates_and_filters() {
        let mut cursor = Cursor::new("abc", "Joe", "red");
        let container = Rect::new(100.0, 100.0, 800.0, 600.0);
        let rects = [
            Rect::new(110.0, 120.0, 50.0, 16.0),
            Rect::new(100.0, 136.0, 0.0, 16.0), // collapsed, dropped
        ];
        cursor.update_selection(&rects, &container);
        assert_eq!(
            cursor.visual().selection_rects,
            vec![Rect::new(10.0, 20.0, 50.0, 16.0)]
        );
    }
}
