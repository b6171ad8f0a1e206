pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod reference;
pub mod service;
pub mod types;

pub use client::CatalogClient;
pub use config::{ApiConfig, ResolvedApiConfig};
pub use error::CatalogError;
pub use query::QueryMode;
pub use reference::{PLACEHOLDER_IMAGE, fallback_image_url, resolve_id};
pub use service::CatalogService;
pub use types::RawListingRef;
