//! Platform path utilities.
//!
//! Resolves where the explorer keeps its configuration and log files and
//! expands `~` in user-supplied paths.

use std::path::PathBuf;

/// Returns the data directory for explorer files.
///
/// Resolves to the platform's local data directory joined with
/// `pokedex-explorer` (for example `~/.local/share/pokedex-explorer` on
/// Linux). Falls back to a relative `.pokedex-explorer` directory when the
/// platform reports no data directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(|| PathBuf::from(".pokedex-explorer"), |dir| dir.join("pokedex-explorer"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, and tilde paths on platforms without a home
/// directory, are returned unchanged.
///
/// # Examples
///
/// ```
/// use pokedex_explorer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
