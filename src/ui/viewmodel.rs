//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready strings and flags.
//!
//! # Example
//!
//! ```rust
//! use pokedex_explorer::ui::viewmodel::{DisplayItem, HeaderInfo};
//!
//! let row = DisplayItem {
//!     number: "#025".to_string(),
//!     name: "pikachu".to_string(),
//!     is_selected: true,
//! };
//! let header = HeaderInfo { title: " Pokédex · All types (1) ".to_string() };
//! # let _ = (row, header);
//! ```

/// Rows taken by the detail panel, including its top border.
pub const DETAIL_PANEL_ROWS: usize = 6;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,
    pub footer: FooterInfo,

    /// Message shown in place of the table when there are no rows.
    pub empty_state: Option<EmptyState>,

    /// Present while the search box is focused or a search is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Loading, error or end-of-list line under the table.
    pub status: Option<StatusLine>,

    pub detail: DetailInfo,

    /// Whether the last row of the collection falls inside the window.
    ///
    /// The host reports this back to the controller after every render.
    pub tail_visible: bool,
}

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Formatted dex number (`#025`), empty when unknown.
    pub number: String,
    pub name: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current input mode.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently go to the search box.
    pub is_focused: bool,
}

/// Kind of status line, selecting its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
    End,
}

#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
}

/// Detail panel contents for the selected row.
#[derive(Debug, Clone, Default)]
pub struct DetailInfo {
    pub title: String,
    /// Label/value pairs, one per line.
    pub rows: Vec<(String, String)>,
    /// Placeholder or error text shown instead of `rows`.
    pub message: Option<String>,
}
