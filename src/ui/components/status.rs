//! Status line under the table.

use crate::ui::helpers::{fit, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusKind, StatusLine};

/// Renders the loading, error or end-of-list line at `row`.
///
/// A missing status clears the row.
pub fn render_status(row: usize, status: Option<&StatusLine>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let Some(status) = status else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    let color = match status.kind {
        StatusKind::Loading => &theme.colors.status_loading_fg,
        StatusKind::Error => &theme.colors.status_error_fg,
        StatusKind::End => &theme.colors.text_dim,
    };

    let text = fit(&format!("  {}", status.text), cols);
    print!("{}", Theme::fg(color));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(width(&text))));
    print!("{}", Theme::reset());
    row + 1
}
