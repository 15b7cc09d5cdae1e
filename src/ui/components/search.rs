//! Search box renderer.
//!
//! ```text
//!      ┌───────────────────────────┐
//!      │ Search: pikachu▏          │
//!      └───────────────────────────┘
//! ```
//!
//! The frame takes the accent color and a cursor follows the query while the
//! box has focus.

use crate::ui::helpers::{fit, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Blank columns on each side of the frame.
const MARGIN: usize = 5;

/// Renders the 3-row search box starting at `row`. Returns `row + 3`.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner = cols.saturating_sub(MARGIN * 2 + 2);
    let frame = Theme::fg(if search.is_focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    });
    let rule = "─".repeat(inner);
    let indent = " ".repeat(MARGIN);

    let caret = if search.is_focused { "▏" } else { "" };
    let text = fit(&format!(" Search: {}{caret}", search.query), inner);
    let fill = " ".repeat(inner.saturating_sub(width(&text)));

    position_cursor(row, 1);
    print!("{indent}{frame}┌{rule}┐{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!(
        "{indent}{frame}│{}{text}{fill}{frame}│{}",
        Theme::fg(&theme.colors.text_normal),
        Theme::reset()
    );

    position_cursor(row + 2, 1);
    print!("{indent}{frame}└{rule}┘{}", Theme::reset());

    row + 3
}
