use dex_core::CatalogEntrySummary;

use crate::error::CatalogError;

/// Local image path used when an entry has no artwork at all.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-pokemon.svg";

const ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// Extract the numeric id from a resource URL such as
/// `https://pokeapi.co/api/v2/pokemon/25/`.
///
/// The id is the last non-empty path segment. Query strings and fragments
/// are ignored.
pub fn resolve_id(url: &str) -> Result<u32, CatalogError> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segment = path
        .split('/')
        .filter(|s| !s.is_empty())
        .next_back()
        .ok_or_else(|| CatalogError::malformed_reference(format!("no path segments in '{url}'")))?;
    segment.parse::<u32>().map_err(|_| {
        CatalogError::malformed_reference(format!("'{segment}' in '{url}' is not a numeric id"))
    })
}

/// Deterministic artwork URL for an id, used when the detail fetch failed.
pub fn fallback_image_url(id: u32) -> String {
    format!("{ARTWORK_BASE_URL}/{id}.png")
}

/// Summary built from nothing but a listing name and id.
pub fn fallback_summary(id: u32, name: &str) -> CatalogEntrySummary {
    CatalogEntrySummary {
        id,
        name: name.to_string(),
        image_url: fallback_image_url(id),
        categories: Vec::new(),
    }
}
