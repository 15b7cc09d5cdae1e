//! Pokémon table renderer.
//!
//! Two columns: the dex number and the name. The selected row is painted
//! across the full terminal width.

use crate::ui::helpers::{fit, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the `NO.` column including its trailing gap.
const NUMBER_COLUMN_WIDTH: usize = 8;

/// Renders the column headers. Returns the next available row.
pub fn render_list_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("  {:<width$}{}", "NO.", "NAME", width = NUMBER_COLUMN_WIDTH - 2);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every row in `items`. Returns the next available row.
pub fn render_list_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(current_row, item, theme, cols);
    }
    current_row
}

fn render_list_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("> ");
    } else {
        print!("{}", Theme::fg(&theme.colors.number_fg));
        print!("  ");
    }

    print!("{:<width$}", item.number, width = NUMBER_COLUMN_WIDTH - 2);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    let name = fit(&item.name, cols.saturating_sub(NUMBER_COLUMN_WIDTH));
    print!("{name}");

    let line_len = NUMBER_COLUMN_WIDTH.max(2 + width(&item.number)) + width(&name);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
