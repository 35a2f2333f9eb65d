//! `cursor_overlay` - Collaborative-editing cursor overlay
//!
//! Renders remote participants' carets and selection highlights over a
//! rich-text editor surface. The overlay tracks each remote cursor's logical
//! range, converts it to pixel geometry through the host editor's leaf and
//! bounds queries, keeps that geometry synchronized across edits, scrolls,
//! and resizes, and re-emits local selection changes after edits so the host
//! application can broadcast the local cursor to peers.
//!
//! The host editor is consumed through the narrow [`HostEditor`] trait;
//! document storage, text editing, merge logic, and networking all stay on
//! the host side.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_precision_loss)] // Intentional offset-to-pixel casts
#![allow(clippy::cast_possible_truncation)] // Millisecond values fit u64
#![allow(clippy::module_name_repetitions)] // Allow CursorOverlay, CursorVisual etc
#![allow(clippy::missing_errors_doc)] // Errors documented on the one fallible path
#![allow(clippy::must_use_candidate)] // Applied where it matters
#![allow(clippy::float_cmp)] // Exact comparison of untransformed geometry in tests

pub mod config;
pub mod cursor;
pub mod delta;
pub mod error;
pub mod event;
pub mod geometry;
pub mod host;
pub mod overlay;
pub mod range;
pub mod reconcile;
pub mod scheduler;
pub mod template;

// Re-export core types at crate root
pub use config::{Config, DEFAULT_CONTAINER_CLASS, SelectionSource};
pub use cursor::{Cursor, CursorVisual, Visibility};
pub use delta::{ChangeStep, TextChange};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use geometry::Rect;
pub use host::{EditorEvent, HostEditor, Leaf};
pub use overlay::CursorOverlay;
pub use range::Range;
pub use reconcile::update_cursor;
pub use scheduler::DeferredQueue;
pub use template::{DEFAULT_TEMPLATE, Template};
