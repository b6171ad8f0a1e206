//! Upstream wire types.
//!
//! Everything here mirrors the PokeAPI v2 JSON shapes. Fields the normalizer
//! does not need are left out; anything optional upstream defaults so a
//! schema addition or omission never fails a whole response.

use serde::Deserialize;

use dex_core::{CatalogEntryDetail, CatalogEntrySummary, Stat};

use crate::reference::PLACEHOLDER_IMAGE;

/// A `{name, url}` pair pointing at another upstream resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A listing entry: name plus the URL of its detail record.
pub type RawListingRef = NamedResource;

/// Response from the `pokemon?limit&offset` list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub count: usize,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Response from the `type/{name}` endpoint.
#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    #[serde(default)]
    pub pokemon: Vec<CategoryMember>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryMember {
    pub pokemon: NamedResource,
}

/// Detail record from the `pokemon/{id or name}` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

impl Sprites {
    /// Pick the best image: official artwork, then the default sprite, then
    /// the local placeholder. Empty strings count as missing.
    pub fn best_image(&self) -> String {
        let artwork = self
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref());
        artwork
            .filter(|s| !s.is_empty())
            .or_else(|| self.front_default.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string()
    }
}

impl RawEntry {
    /// Category names in slot order.
    pub fn category_names(&self) -> Vec<String> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.kind.name.clone()).collect()
    }

    pub fn into_summary(self) -> CatalogEntrySummary {
        CatalogEntrySummary {
            id: self.id,
            image_url: self.sprites.best_image(),
            categories: self.category_names(),
            name: self.name,
        }
    }

    pub fn into_detail(self) -> CatalogEntryDetail {
        CatalogEntryDetail {
            id: self.id,
            image_url: self.sprites.best_image(),
            categories: self.category_names(),
            height: self.height,
            weight: self.weight,
            abilities: self.abilities.into_iter().map(|a| a.ability.name).collect(),
            stats: self
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            name: self.name,
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
