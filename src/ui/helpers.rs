//! Shared rendering utilities.
//!
//! Cursor positioning and width handling used by every component. Widths are
//! counted in characters so names like "Pokédex" and "nidoran♀" line up.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `max` characters, marking the cut with `...`.
///
/// # Example
///
/// ```rust
/// use pokedex_explorer::ui::helpers::fit;
///
/// assert_eq!(fit("charizard", 20), "charizard");
/// assert_eq!(fit("charizard", 7), "char...");
/// ```
#[must_use]
pub fn fit(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Prints `text` centered in `cols` columns, padding both sides.
pub fn print_centered(text: &str, cols: usize) {
    let text = fit(text, cols);
    let len = width(&text);
    let padding = cols.saturating_sub(len) / 2;

    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_characters() {
        assert_eq!(width("Pokédex"), 7);
        assert_eq!(width("nidoran♀"), 8);
    }

    #[test]
    fn fit_respects_multibyte_names() {
        assert_eq!(fit("flabébé", 7), "flabébé");
        assert_eq!(fit("flabébé", 6), "fla...");
        assert_eq!(fit("mew", 2), "me");
    }
}
