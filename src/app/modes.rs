//! Mode and status enums for the list controller.
//!
//! Three small state machines live here:
//!
//! - [`Mode`]: what the list shows, the paginated listing or a lookup result
//! - [`LoadStatus`]: whether a list fetch is outstanding or has failed
//! - [`InputMode`]: which keybindings the terminal host applies
//!
//! # Example
//!
//! ```rust
//! use pokedex_explorer::app::modes::{InputMode, LoadStatus, Mode};
//!
//! let mode = Mode::Browse;
//! let status = LoadStatus::Idle;
//! assert!(!status.is_loading());
//! assert_eq!(InputMode::default(), InputMode::Normal);
//! # let _ = mode;
//! ```

/// What the accumulated collection currently represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Paginated listing, grown page by page as the tail scrolls into view.
    #[default]
    Browse,

    /// Result of a single lookup by the settled search term.
    ///
    /// Holds at most one item and never paginates.
    Search,
}

/// Lifecycle of the list fetches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No list fetch outstanding.
    #[default]
    Idle,

    /// A page or lookup request is in flight.
    Loading,

    /// The last list fetch failed.
    ///
    /// The accumulated collection is kept; the next trigger may retry.
    Error(String),
}

impl LoadStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Which part of the terminal UI receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and commands: j/k, /, t/T, a, q.
    #[default]
    Normal,

    /// Editing the search box. Characters feed the debounce timer.
    Typing,
}
