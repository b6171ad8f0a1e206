use serde::{Deserialize, Serialize};

use dex_core::CatalogEntrySummary;

/// One saved entry as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedEntry {
    pub id: u32,
    pub name: String,
    /// Older collections stored this as `image`.
    #[serde(alias = "image")]
    pub image_url: String,
    /// RFC 3339 timestamp of the first save.
    pub saved_at: String,
}

/// What a caller hands to [`CollectionStore::add`](crate::CollectionStore::add).
/// The store stamps the save time itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionItem {
    pub id: u32,
    pub name: String,
    pub image_url: String,
}

impl CollectionItem {
    pub fn new(id: u32, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}

impl From<&CatalogEntrySummary> for CollectionItem {
    fn from(summary: &CatalogEntrySummary) -> Self {
        Self::new(summary.id, summary.name.clone(), summary.image_url.clone())
    }
}
