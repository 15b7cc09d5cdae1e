//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns the
//! next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with the active type and row count
//! - [`search`]: Search input box
//! - [`list`]: Pokémon table (NO., NAME)
//! - [`empty`]: Message shown when the table has no rows
//! - [`status`]: Loading / error / end-of-list line
//! - [`detail`]: Attributes of the selected Pokémon
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, when shown]
//! [Table Headers]
//! [Table Rows / Empty State]
//! [Status Line]
//! [Detail Panel - 6 lines]
//! [Border]
//! [Footer]
//! ```
//!
//! The status line, detail panel and footer are anchored to the bottom of the
//! terminal; the table fills the rows in between.

mod detail;
mod empty;
mod footer;
mod header;
mod list;
mod search;
mod status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{UIViewModel, DETAIL_PANEL_ROWS};

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::{render_list_headers, render_list_rows};
use search::render_search_bar;
use status::render_status;

/// Renders a horizontal border line at `row`. Returns `row + 1`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full screen for `vm`.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_list_headers(current_row, theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_list_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let detail_row = border_row.saturating_sub(DETAIL_PANEL_ROWS);
    let status_row = detail_row.saturating_sub(1);

    render_status(status_row, vm.status.as_ref(), theme, cols);
    render_detail(detail_row, &vm.detail, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
