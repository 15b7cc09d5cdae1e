//! Structured logging to a rotating file.
//!
//! `tracing` spans and events from every layer are collected by a
//! `tracing-subscriber` registry and written as text to a log file, since the
//! terminal itself is occupied by the UI.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → pokedex-explorer.log
//! ```
//!
//! # Configuration
//!
//! The filter is taken from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the configuration
//! 3. Default: `"info"`
//!
//! The log file defaults to `pokedex-explorer.log` in the data directory and
//! rotates at 10 MB, keeping 3 backups.
//!
//! # Usage
//!
//! ```rust,no_run
//! use pokedex_explorer::observability::init_tracing;
//! use pokedex_explorer::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("explorer initialized");
//! ```

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
