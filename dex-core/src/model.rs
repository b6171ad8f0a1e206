//! Normalized catalog shapes handed to the view layer.
//!
//! These are deliberately smaller than the upstream records: everything a
//! list or detail view needs, nothing about where it came from.

use serde::{Deserialize, Serialize};

/// Lightweight entry representation used in list, search and filter pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntrySummary {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    /// Category names in upstream slot order.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Full entry representation for a single-item view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryDetail {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Height in decimetres, as reported upstream.
    pub height: u32,
    /// Weight in hectograms, as reported upstream.
    pub weight: u32,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl CatalogEntryDetail {
    /// Height converted to metres.
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight converted to kilograms.
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// Sum of all base stat values.
    pub fn stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.value).sum()
    }
}

/// A named base stat (e.g. `hp`, `special-attack`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}
