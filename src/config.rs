//! Overlay configuration.

use std::time::Duration;

use crate::template::DEFAULT_TEMPLATE;

/// Default CSS class for the cursor layer container.
pub const DEFAULT_CONTAINER_CLASS: &str = "remote-cursors";

/// Source tag attached to re-emitted selection-change notifications.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionSource {
    /// The host editor's programmatic-change tag, `"api"`.
    #[default]
    Api,
    /// A caller-chosen tag.
    Custom(String),
    /// Suppress re-emission entirely.
    None,
}

impl SelectionSource {
    /// The tag to emit, or `None` when emission is suppressed.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Api => Some("api"),
            Self::Custom(tag) => Some(tag),
            Self::None => None,
        }
    }
}

/// Configuration options for a [`CursorOverlay`](crate::CursorOverlay).
///
/// Options are fixed for the lifetime of the overlay.
#[derive(Clone, Debug)]
pub struct Config {
    /// CSS class for the cursor layer container.
    pub container_class: String,
    /// Markup template used to instantiate each cursor's visual element.
    /// Compiled when the overlay is constructed.
    pub template: String,
    /// Source tag for selection-change notifications re-emitted after local
    /// text changes.
    pub selection_change_source: SelectionSource,
    /// How long a cursor's name flag stays up before hiding.
    pub hide_delay: Duration,
    /// Duration of the flag hide transition.
    pub hide_speed: Duration,
    /// Remap tracked cursor ranges through local edit operations.
    pub transform_on_text_change: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            selection_change_source: SelectionSource::Api,
            hide_delay: Duration::from_millis(3000),
            hide_speed: Duration::from_millis(400),
            transform_on_text_change: false,
        }
    }
}

impl Config {
    /// Create a configuration with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
