//! Catalog item model.
//!
//! An [`Item`] is one row of the rendered list. Rows produced by the paginated
//! listing only know their key and display name; rows produced by a direct
//! lookup carry the full [`ItemDetail`] record.

use serde::{Deserialize, Serialize};

/// One entry of the accumulated collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique lookup key (the lowercase Pokémon name).
    pub key: String,
    /// Name shown in the list.
    pub display_name: String,
    /// National dex number, when the listing exposes it.
    pub id: Option<u32>,
    /// Full record, present for items resolved by key.
    pub detail: Option<Box<ItemDetail>>,
}

impl Item {
    /// Creates a listing entry without detail.
    #[must_use]
    pub fn entry(key: impl Into<String>, display_name: impl Into<String>, id: Option<u32>) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            id,
            detail: None,
        }
    }

    /// Wraps a fully resolved record.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokedex_explorer::domain::{Item, ItemDetail};
    ///
    /// let detail = ItemDetail { id: 132, name: "ditto".into(), ..Default::default() };
    /// let item = Item::from_detail(detail);
    /// assert_eq!(item.key, "ditto");
    /// assert_eq!(item.id, Some(132));
    /// ```
    #[must_use]
    pub fn from_detail(detail: ItemDetail) -> Self {
        Self {
            key: detail.name.clone(),
            display_name: detail.name.clone(),
            id: Some(detail.id),
            detail: Some(Box::new(detail)),
        }
    }
}

/// Full record returned by the item lookup endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    /// `(stat name, base value)` in catalog order, `hp` first.
    pub stats: Vec<(String, u32)>,
    /// Front sprite URL.
    pub sprite: Option<String>,
}

/// One page of the catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub items: Vec<Item>,
    /// Whether the catalog reports a further page after this one.
    pub has_more: bool,
}

impl Batch {
    #[must_use]
    pub const fn new(items: Vec<Item>, has_more: bool) -> Self {
        Self { items, has_more }
    }

    /// An empty, final page.
    #[must_use]
    pub const fn exhausted() -> Self {
        Self {
            items: Vec::new(),
            has_more: false,
        }
    }
}
