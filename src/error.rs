//! Error types for the cursor overlay.
//!
//! Almost nothing in this layer can fail: unknown cursor IDs are no-ops,
//! unresolvable leaves hide the cursor, out-of-bounds ranges are clamped.
//! The one real failure is a malformed cursor template, caught when the
//! overlay is constructed.

use std::fmt;

/// Result type alias for overlay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for overlay operations.
#[derive(Debug)]
pub enum Error {
    /// The cursor template references a placeholder the overlay does not
    /// provide a value for.
    UnknownPlaceholder(String),
    /// The cursor template has an unterminated `{{` placeholder.
    UnterminatedPlaceholder { offset: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlaceholder(name) => {
                write!(f, "unknown template placeholder: {{{{{name}}}}}")
            }
            Self::UnterminatedPlaceholder { offset } => {
                write!(f, "unterminated template placeholder at byte {offset}")
            }
        }
    }
}

impl std::error::Error for Error {}
