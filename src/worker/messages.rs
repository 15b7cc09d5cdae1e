//! Fetch request and response types.
//!
//! This module defines the protocol between the controller and the fetch
//! worker. Every request carries the generation (or ticket) it was issued
//! under; the response echoes it back together with the original request so
//! the controller can route the result and discard stale ones.

use crate::domain::{Batch, ExplorerError, Item};

/// The catalog operation a request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    /// Next page of the listing.
    Page {
        /// Offset of the first entry.
        cursor: usize,
        /// Page size.
        limit: usize,
        /// Active category filter.
        category: Option<String>,
    },

    /// Direct lookup for search mode.
    Lookup {
        /// Settled search term.
        key: String,
    },

    /// Detail record for the selected row.
    Detail {
        /// Key of the selected item.
        key: String,
    },

    /// Category names for the type filter.
    Categories,
}

impl FetchKind {
    /// Whether the request belongs to the list state machine.
    ///
    /// List fetches carry a generation; detail and category fetches do not.
    #[must_use]
    pub const fn is_list_fetch(&self) -> bool {
        matches!(self, Self::Page { .. } | Self::Lookup { .. })
    }
}

/// A request issued by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Generation (list requests) or ticket (detail requests) at issue time.
    pub generation: u64,
    /// The operation to perform.
    pub kind: FetchKind,
}

impl FetchRequest {
    #[must_use]
    pub fn page(generation: u64, cursor: usize, limit: usize, category: Option<String>) -> Self {
        Self {
            generation,
            kind: FetchKind::Page { cursor, limit, category },
        }
    }

    #[must_use]
    pub fn lookup(generation: u64, key: impl Into<String>) -> Self {
        Self {
            generation,
            kind: FetchKind::Lookup { key: key.into() },
        }
    }

    #[must_use]
    pub fn detail(ticket: u64, key: impl Into<String>) -> Self {
        Self {
            generation: ticket,
            kind: FetchKind::Detail { key: key.into() },
        }
    }

    #[must_use]
    pub const fn categories() -> Self {
        Self {
            generation: 0,
            kind: FetchKind::Categories,
        }
    }
}

/// Normalized result of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A listing page was retrieved.
    Page(Batch),

    /// A lookup or detail request resolved.
    Found(Item),

    /// The catalog has no match for the key.
    NotFound {
        /// Key that was looked up.
        key: String,
    },

    /// Category names were retrieved.
    Categories(Vec<String>),

    /// Transport or protocol failure.
    Failed {
        /// Human-readable error message.
        message: String,
    },
}

impl FetchOutcome {
    /// Folds a fetch error into an outcome.
    ///
    /// `NotFound` stays distinguishable; everything else becomes `Failed`.
    #[must_use]
    pub fn from_error(err: ExplorerError) -> Self {
        match err {
            ExplorerError::NotFound(key) => Self::NotFound { key },
            other => Self::Failed {
                message: other.to_string(),
            },
        }
    }
}

/// A completed fetch, delivered back to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// Generation or ticket copied from the request.
    pub generation: u64,
    /// The request that produced this response.
    pub request: FetchKind,
    /// What happened.
    pub outcome: FetchOutcome,
}

impl FetchResponse {
    #[must_use]
    pub fn new(request: &FetchRequest, outcome: FetchOutcome) -> Self {
        Self {
            generation: request.generation,
            request: request.kind.clone(),
            outcome,
        }
    }
}
