//! The cursor registry façade.
//!
//! [`CursorOverlay`] owns the set of remote cursors for one editor
//! attachment and wires the reconciler, the deferred text-change handling,
//! and selection re-emission together. Multiple overlays (for multiple
//! editors) are fully independent.
//!
//! # Examples
//!
//! ```no_run
//! use cursor_overlay::{Config, CursorOverlay, EditorEvent, Range, TextChange};
//! # use cursor_overlay::{HostEditor, Leaf, Rect};
//! # struct MyEditor;
//! # impl HostEditor for MyEditor {
//! #     type Node = usize;
//! #     fn add_container(&mut self, _: &str) {}
//! #     fn length(&self) -> usize { 0 }
//! #     fn selection(&self) -> Option<Range> { None }
//! #     fn leaf(&self, _: usize) -> Option<Leaf<usize>> { None }
//! #     fn caret_bounds(&self, _: usize) -> Rect { Rect::default() }
//! #     fn selection_rects(&self, _: &Leaf<usize>, _: &Leaf<usize>) -> Vec<Rect> { Vec::new() }
//! #     fn container_bounds(&self) -> Rect { Rect::default() }
//! #     fn emit_selection_change(&mut self, _: Option<Range>, _: Option<Range>, _: &str) {}
//! # }
//! # fn editor() -> MyEditor { MyEditor }
//! let mut overlay = CursorOverlay::new(editor(), Config::default()).unwrap();
//!
//! overlay.create_cursor("peer-1", "Joe Bloggs", "#ff0000");
//! overlay.move_cursor("peer-1", Some(Range::new(10, 5)));
//!
//! // In the host event loop:
//! overlay.handle_event(EditorEvent::TextChange(TextChange::new().retain(5).insert("a")));
//! // ...once the current turn has completed:
//! overlay.run_pending();
//! ```

use crate::config::Config;
use crate::cursor::Cursor;
use crate::delta::TextChange;
use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::host::{EditorEvent, HostEditor};
use crate::range::Range;
use crate::reconcile::update_cursor;
use crate::scheduler::DeferredQueue;
use crate::template::Template;

/// Renders remote collaborators' cursors over one host editor.
pub struct CursorOverlay<H: HostEditor> {
    host: H,
    config: Config,
    template: Template,
    cursors: Vec<Cursor>,
    /// Most recent local selection, the "previous" value of the next
    /// re-emitted selection-change notification.
    current_selection: Option<Range>,
    pending: DeferredQueue<TextChange>,
}

impl<H: HostEditor> CursorOverlay<H> {
    /// Attach an overlay to a host editor.
    ///
    /// Compiles the cursor template, injects the cursor layer container, and
    /// captures the host's current selection as the emission baseline.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured template does not compile.
    pub fn new(mut host: H, config: Config) -> Result<Self> {
        let template = Template::compile(&config.template)?;
        host.add_container(&config.container_class);
        let current_selection = host.selection();

        Ok(Self {
            host,
            config,
            template,
            cursors: Vec::new(),
            current_selection,
            pending: DeferredQueue::new(),
        })
    }

    /// The host editor.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host editor, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The overlay configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a cursor, or return the existing one for `id`.
    ///
    /// Creation is idempotent: a second call with the same id returns the
    /// already-registered cursor and ignores the new name and color.
    pub fn create_cursor(&mut self, id: &str, name: &str, color: &str) -> &Cursor {
        if let Some(idx) = self.index_of(id) {
            return &self.cursors[idx];
        }

        let mut cursor = Cursor::new(id, name, color);
        cursor.build(&self.template, &self.config);
        emit_log(LogLevel::Debug, &format!("cursor {id}: created"));

        let idx = self.cursors.len();
        self.cursors.push(cursor);
        &self.cursors[idx]
    }

    /// Set a cursor's range (`None` clears it) and reconcile its geometry.
    /// Silent no-op if `id` is unknown.
    pub fn move_cursor(&mut self, id: &str, range: Option<Range>) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        self.cursors[idx].range = range;
        update_cursor(&self.host, &mut self.cursors[idx]);
    }

    /// Discard a cursor and its visual element. Silent no-op if `id` is
    /// unknown.
    pub fn remove_cursor(&mut self, id: &str) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        self.cursors.remove(idx);
        emit_log(LogLevel::Debug, &format!("cursor {id}: removed"));
    }

    /// Remove all cursors.
    pub fn clear_cursors(&mut self) {
        self.cursors.clear();
    }

    /// Reconcile geometry for every registered cursor.
    ///
    /// Used when the viewport or layout changed rather than a specific
    /// cursor's range.
    pub fn update(&mut self) {
        for cursor in &mut self.cursors {
            update_cursor(&self.host, cursor);
        }
    }

    /// Snapshot of the registered cursors, in registration order.
    #[must_use]
    pub fn cursors(&self) -> &[Cursor] {
        &self.cursors
    }

    /// Look up a cursor by id.
    #[must_use]
    pub fn cursor(&self, id: &str) -> Option<&Cursor> {
        self.index_of(id).map(|idx| &self.cursors[idx])
    }

    /// Dispatch an editor notification.
    ///
    /// Scroll and resize reconcile synchronously; selection changes only
    /// update the remembered baseline; text changes are deferred to the next
    /// [`run_pending`](Self::run_pending) turn.
    pub fn handle_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::Scroll | EditorEvent::Resize => self.update(),
            EditorEvent::SelectionChange(selection) => self.current_selection = selection,
            EditorEvent::TextChange(change) => self.pending.schedule(change),
        }
    }

    /// Whether any deferred text-change work is queued.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Run deferred text-change work.
    ///
    /// The host event loop calls this after the current turn completes, once
    /// the editor's own mutation has settled. Each queued edit runs in
    /// order: cursor transform first (if enabled), then selection
    /// re-emission and a full reconciliation pass (unless suppressed).
    pub fn run_pending(&mut self) {
        while let Some(change) = self.pending.pop() {
            self.process_text_change(&change);
        }
    }

    fn process_text_change(&mut self, change: &TextChange) {
        if self.config.transform_on_text_change {
            self.transform_cursors(change);
        }

        if let Some(source) = self.config.selection_change_source.tag() {
            let source = source.to_string();
            let new_selection = self.host.selection();
            self.host
                .emit_selection_change(new_selection, self.current_selection, &source);
            self.current_selection = new_selection;
            self.update();
        }
    }

    /// Remap every ranged cursor's start offset through the edit. Lengths
    /// are carried over unchanged.
    fn transform_cursors(&mut self, change: &TextChange) {
        for cursor in &mut self.cursors {
            let Some(range) = cursor.range else {
                continue;
            };
            cursor.range = Some(change.transform_range(range));
            update_cursor(&self.host, cursor);
        }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.cursors.iter().position(|cursor| cursor.id() == id)
    }
}
