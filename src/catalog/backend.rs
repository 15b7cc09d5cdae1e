//! Catalog source abstraction.
//!
//! [`CatalogSource`] is the injected fetch primitive of the list controller.
//! Every operation returns an owned, boxed future so callers can hand it to
//! the runtime without borrowing the source.
//!
//! # Implementations
//!
//! - [`HttpCatalog`](crate::catalog::HttpCatalog): PokeAPI over HTTP (default)
//! - Scripted in-memory sources in the integration tests

use crate::domain::{Batch, Item, Result};
use futures_util::future::BoxFuture;

/// Remote catalog operations consumed by the explorer.
///
/// Implementations perform exactly one network round trip per call: no
/// caching and no retry. Failures surface as
/// [`ExplorerError::NotFound`](crate::domain::ExplorerError::NotFound) or
/// [`ExplorerError::Unreachable`](crate::domain::ExplorerError::Unreachable).
pub trait CatalogSource: Send + Sync {
    /// Fetches up to `limit` entries starting at `offset`.
    ///
    /// When `category` is set only entries of that category are listed.
    ///
    /// # Errors
    ///
    /// Returns `Unreachable` on transport or decoding failure.
    fn fetch_page(&self, offset: usize, limit: usize, category: Option<&str>) -> BoxFuture<'static, Result<Batch>>;

    /// Resolves a single item, including its detail record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the catalog has no match for `key`, and
    /// `Unreachable` on any other failure.
    fn fetch_by_key(&self, key: &str) -> BoxFuture<'static, Result<Item>>;

    /// Lists the category names accepted by [`fetch_page`](Self::fetch_page).
    ///
    /// # Errors
    ///
    /// Returns `Unreachable` on transport or decoding failure.
    fn fetch_categories(&self) -> BoxFuture<'static, Result<Vec<String>>>;
}
