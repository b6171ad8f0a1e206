pub mod entry;
pub mod error;
pub mod storage;
pub mod store;

pub use entry::{CollectionItem, SavedEntry};
pub use error::{CollectionError, StorageError};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, default_data_dir};
pub use store::{CollectionStore, SAVED_COLLECTION_KEY};
