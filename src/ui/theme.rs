//! Color themes and ANSI styling.
//!
//! A [`Theme`] is a named palette of hex colors, one per UI role. Two
//! Catppuccin palettes are compiled in; any other palette can be loaded from
//! a TOML file with the same shape:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! number_fg = "#fab387"
//! status_loading_fg = "#89b4fa"
//! status_error_fg = "#f38ba8"
//! detail_label_fg = "#a6e3a1"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! `header_bg` is optional. Colors are written as 24-bit ANSI sequences.
//!
//! ```rust
//! use pokedex_explorer::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! print!("{}#025{} pikachu", Theme::fg(&theme.colors.number_fg), Theme::reset());
//! ```

use crate::domain::{ExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MOCHA: &str = include_str!("../../themes/catppuccin-mocha.toml");
const LATTE: &str = include_str!("../../themes/catppuccin-latte.toml");

/// Fallback for colors that do not parse.
const WHITE: Rgb = Rgb(255, 255, 255);

/// A named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for each UI role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg: Option<String>,

    /// Highlighted row.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer hints, column headings and secondary values.
    pub text_dim: String,
    pub border: String,
    pub search_bar_border: String,

    /// Dex number column.
    pub number_fg: String,

    pub status_loading_fg: String,
    pub status_error_fg: String,
    pub detail_label_fg: String,
    pub empty_state_fg: String,
}

impl ThemeColors {
    fn all(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("header_fg", self.header_fg.as_str()),
            ("selection_fg", self.selection_fg.as_str()),
            ("selection_bg", self.selection_bg.as_str()),
            ("text_normal", self.text_normal.as_str()),
            ("text_dim", self.text_dim.as_str()),
            ("border", self.border.as_str()),
            ("search_bar_border", self.search_bar_border.as_str()),
            ("number_fg", self.number_fg.as_str()),
            ("status_loading_fg", self.status_loading_fg.as_str()),
            ("status_error_fg", self.status_error_fg.as_str()),
            ("detail_label_fg", self.detail_label_fg.as_str()),
            ("empty_state_fg", self.empty_state_fg.as_str()),
        ]
        .into_iter()
        .chain(self.header_bg.as_deref().map(|bg| ("header_bg", bg)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

impl Rgb {
    fn parse(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Theme {
    /// Looks up a compiled-in palette.
    ///
    /// ```rust
    /// use pokedex_explorer::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
    /// assert!(Theme::from_name("gameboy").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "catppuccin-mocha" => MOCHA,
            "catppuccin-latte" => LATTE,
            _ => return None,
        };
        toml::from_str(source).ok()
    }

    /// Reads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Theme`] if the file cannot be read, is missing
    /// a role, or contains a color that is not `#rrggbb`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ExplorerError::Theme(format!("reading {}: {e}", path.display())))?;
        let theme: Self = toml::from_str(&contents)
            .map_err(|e| ExplorerError::Theme(format!("parsing {}: {e}", path.display())))?;

        if let Some((role, value)) = theme.colors.all().find(|(_, value)| Rgb::parse(value).is_none()) {
            return Err(ExplorerError::Theme(format!("{role} = {value:?} is not a #rrggbb color")));
        }

        Ok(theme)
    }

    /// Truecolor foreground sequence. Unparseable colors render white.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let Rgb(r, g, b) = Rgb::parse(hex).unwrap_or(WHITE);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Truecolor background sequence. Unparseable colors render white.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let Rgb(r, g, b) = Rgb::parse(hex).unwrap_or(WHITE);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears every attribute set by the other sequences.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in palette does not parse.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").expect("built-in catppuccin-mocha theme should parse")
    }
}
