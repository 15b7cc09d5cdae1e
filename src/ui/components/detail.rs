//! Detail panel renderer.
//!
//! Occupies a fixed block of [`DETAIL_PANEL_ROWS`] rows: a separator titled
//! with the selected Pokémon, then one line per attribute or a single
//! placeholder message.

use crate::ui::helpers::{fit, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailInfo, DETAIL_PANEL_ROWS};

/// Width of the label column.
const LABEL_WIDTH: usize = 11;

/// Renders the panel starting at `row`. Returns the row after the block.
pub fn render_detail(row: usize, detail: &DetailInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let title = if detail.title.is_empty() {
        String::new()
    } else {
        format!("─ {} ", fit(&detail.title, cols.saturating_sub(4)))
    };
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{title}");
    print!("{}", "─".repeat(cols.saturating_sub(width(&title))));
    print!("{}", Theme::reset());

    let body_rows = DETAIL_PANEL_ROWS - 1;
    for offset in 0..body_rows {
        position_cursor(row + 1 + offset, 1);

        let line_len = match (&detail.message, detail.rows.get(offset)) {
            (Some(message), _) if offset == 0 => {
                let text = fit(&format!("  {message}"), cols);
                print!("{}", Theme::fg(&theme.colors.text_dim));
                print!("{text}");
                width(&text)
            }
            (None, Some((label, value))) => {
                let value = fit(value, cols.saturating_sub(LABEL_WIDTH + 2));
                print!("{}", Theme::fg(&theme.colors.detail_label_fg));
                print!("  {label:<width$}", width = LABEL_WIDTH);
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print!("{value}");
                2 + LABEL_WIDTH.max(width(label)) + width(&value)
            }
            _ => 0,
        };

        print!("{}", " ".repeat(cols.saturating_sub(line_len)));
        print!("{}", Theme::reset());
    }

    row + DETAIL_PANEL_ROWS
}
