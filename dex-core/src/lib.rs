pub mod category;
pub mod display;
pub mod entry_ref;
pub mod error;
pub mod model;
pub mod page;
pub mod settings;

pub use category::{KNOWN_CATEGORIES, category_color, category_rgb};
pub use entry_ref::{EntryRef, EntryRefParseError};
pub use error::SettingsError;
pub use model::{CatalogEntryDetail, CatalogEntrySummary, Stat};
pub use page::PageResult;
pub use settings::{ConfigSource, Settings};
