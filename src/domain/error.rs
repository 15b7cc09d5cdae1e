//! Error types for the explorer.
//!
//! This module defines the centralized error type [`ExplorerError`] and a type
//! alias [`Result`] used throughout the crate. Fetch failures are folded into
//! controller state before they reach the host, so only configuration, theme
//! and I/O errors ever surface from the binary.

use thiserror::Error;

/// The main error type for explorer operations.
///
/// # Examples
///
/// ```
/// use pokedex_explorer::domain::ExplorerError;
///
/// let err = ExplorerError::NotFound("missingno".to_string());
/// assert_eq!(err.to_string(), "no catalog entry matches \"missingno\"");
/// ```
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The catalog reported no entry for the requested key.
    ///
    /// Not a loud failure: the list controller renders it as "no result".
    #[error("no catalog entry matches \"{0}\"")]
    NotFound(String),

    /// Transport or protocol failure talking to the catalog.
    ///
    /// Covers connection errors, timeouts, unexpected status codes and bodies
    /// that do not decode into the expected shape.
    #[error("catalog unreachable: {0}")]
    Unreachable(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl From<reqwest::Error> for ExplorerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unreachable(err.to_string())
    }
}

/// A specialized `Result` type for explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;
