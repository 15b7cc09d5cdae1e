//! Catalog access layer.
//!
//! This module provides the seam between the list controller and the remote
//! catalog. The controller only sees the [`CatalogSource`] trait; the HTTP
//! implementation and its wire records live behind it.
//!
//! # Modules
//!
//! - `backend`: The [`CatalogSource`] trait
//! - `http`: PokeAPI client built on `reqwest`
//! - `models`: Wire records and their normalization into domain types

pub mod backend;
pub mod http;
pub mod models;

pub use backend::CatalogSource;
pub use http::HttpCatalog;
