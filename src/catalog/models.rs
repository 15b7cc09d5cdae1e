//! Wire records for the PokeAPI endpoints.
//!
//! These types mirror the JSON shapes the catalog returns and are kept apart
//! from the domain model. The listing endpoint returns a page object, the type
//! endpoint returns a flat member list, and the lookup endpoint returns a bare
//! record; each is normalized into [`Batch`] or [`Item`] here.

use crate::domain::{Batch, Item, ItemDetail};
use serde::Deserialize;

/// A `{ name, url }` reference as used throughout the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Parses the trailing numeric path segment of the resource URL.
    ///
    /// ```
    /// use pokedex_explorer::catalog::models::NamedResource;
    ///
    /// let r = NamedResource { name: "pikachu".into(), url: "https://pokeapi.co/api/v2/pokemon/25/".into() };
    /// assert_eq!(r.id(), Some(25));
    /// ```
    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.url
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .and_then(|segment| segment.parse().ok())
    }

    fn into_item(self) -> Item {
        let id = self.id();
        Item::entry(self.name.clone(), self.name, id)
    }
}

/// Response of `GET /pokemon?limit=&offset=` and `GET /type`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRecord {
    pub count: usize,
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl PageRecord {
    #[must_use]
    pub fn into_batch(self) -> Batch {
        let has_more = self.next.is_some();
        Batch::new(self.results.into_iter().map(NamedResource::into_item).collect(), has_more)
    }

    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        self.results.into_iter().map(|r| r.name).collect()
    }
}

/// Response of `GET /type/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeRecord {
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeMember {
    pub pokemon: NamedResource,
}

impl TypeRecord {
    /// Cuts the `[offset, offset + limit)` window out of the member list.
    ///
    /// The type endpoint is not paginated, so paging over a category happens
    /// here.
    #[must_use]
    pub fn into_batch(self, offset: usize, limit: usize) -> Batch {
        let total = self.pokemon.len();
        let end = offset.saturating_add(limit).min(total);
        let items = self
            .pokemon
            .into_iter()
            .skip(offset)
            .take(end.saturating_sub(offset))
            .map(|member| member.pokemon.into_item())
            .collect();
        Batch::new(items, end < total)
    }
}

/// Response of `GET /pokemon/{key}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

impl PokemonRecord {
    #[must_use]
    pub fn into_item(self) -> Item {
        let detail = ItemDetail {
            id: self.id,
            name: self.name,
            height: self.height,
            weight: self.weight,
            types: self.types.into_iter().map(|slot| slot.kind.name).collect(),
            abilities: self.abilities.into_iter().map(|slot| slot.ability.name).collect(),
            stats: self
                .stats
                .into_iter()
                .map(|slot| (slot.stat.name, slot.base_stat))
                .collect(),
            sprite: self.sprites.front_default,
        };
        Item::from_detail(detail)
    }
}
