//! Pokédex Explorer: a terminal browser for the PokeAPI catalog.
//!
//! The explorer provides:
//! - An incrementally loaded Pokémon list that fetches the next page when the
//!   last row scrolls into view
//! - Debounced search that switches the list to a direct lookup by name
//! - A type filter that restarts the list for one category
//! - A detail panel for the selected row

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Host (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, list controller                  │
//! │  - Debounce timer, visibility trigger               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - HTTP client │   │ - tokio tasks │
//! │ - Theming     │   │ - Wire models │   │ - Completions │
//! │ - Components  │   │ - Source trait│   │   channel     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Clock, platform paths (infrastructure/)          │
//! │  - Error types, item model (domain/)                │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Settings are read from `config.toml` in the data directory (or a file
//! passed with `--config`) and may be overridden on the command line:
//!
//! ```toml
//! api_url = "https://pokeapi.co/api/v2"
//! page_size = 20
//! debounce_ms = 300
//! theme = "catppuccin-latte"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use pokedex_explorer::{handle_event, initialize, Config, Event};
//!
//! let config = Config { page_size: 10, ..Config::default() };
//! let mut state = initialize(&config);
//!
//! let (_render, actions) = handle_event(&mut state, &Event::Start)?;
//! assert_eq!(actions.len(), 2);
//! # Ok::<(), pokedex_explorer::ExplorerError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, ListController, ListSnapshot, Mode};
pub use domain::{ExplorerError, Item, Result};
pub use ui::Theme;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the configuration file looked up in the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Explorer configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the PokeAPI v2 endpoints.
    pub api_url: String,

    /// Entries requested per page. Must be non-zero.
    pub page_size: usize,

    /// Quiet interval before a search term settles, in milliseconds.
    pub debounce_ms: u64,

    /// Per-request timeout, in seconds.
    pub request_timeout_secs: u64,

    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Log filter directive (`trace`, `debug`, `info`, ...).
    ///
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Defaults to `pokedex-explorer.log` in the data directory.
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://pokeapi.co/api/v2".to_string(),
            page_size: 20,
            debounce_ms: 300,
            request_timeout_secs: 10,
            theme: None,
            theme_file: None,
            trace_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration.
    ///
    /// Reads `path` when given; otherwise reads `config.toml` from the data
    /// directory if it exists, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(infrastructure::expand_tilde(path));
        }

        let default_path = infrastructure::get_data_dir().join(CONFIG_FILE_NAME);
        if default_path.exists() {
            Self::from_file(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ExplorerError::Config(format!("reading {}: {e}", path.display())))?;

        let config: Self = toml::from_str(&contents)
            .map_err(|e| ExplorerError::Config(format!("parsing {}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Checks values that would make the explorer unusable.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] for a zero page size or an
    /// `api_url` that is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ExplorerError::Config("page_size must be at least 1".to_string()));
        }

        let url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| ExplorerError::Config(format!("invalid api_url {:?}: {e}", self.api_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ExplorerError::Config(format!(
                "api_url {:?} must use http or https",
                self.api_url
            )));
        }

        Ok(())
    }

    #[must_use]
    pub const fn debounce_interval(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Resolved log file path with `~` expanded.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.log_file.as_deref().map_or_else(
            || infrastructure::get_data_dir().join("pokedex-explorer.log"),
            infrastructure::expand_tilde,
        )
    }
}

/// Builds the initial application state for `config`.
///
/// The theme is resolved from `theme_file`, then `theme`, then the built-in
/// default; a theme that fails to load falls back to the default.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing pokedex explorer");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.page_size, theme)
}
