//! Domain layer for the explorer.
//!
//! Holds the catalog types shared by every other layer, independent of the
//! HTTP client, the terminal host and the controller wiring.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Catalog items, detail records and page batches
//!
//! # Examples
//!
//! ```
//! use pokedex_explorer::domain::{Batch, Item};
//!
//! let batch = Batch::new(vec![Item::entry("bulbasaur", "bulbasaur", Some(1))], true);
//! assert_eq!(batch.items.len(), 1);
//! assert!(batch.has_more);
//! ```

pub mod error;
pub mod item;

pub use error::{ExplorerError, Result};
pub use item::{Batch, Item, ItemDetail};
