//! The saved collection: a set of [`SavedEntry`] keyed by id.
//!
//! The store owns its storage backend. [`CollectionStore::open`] is the only
//! way to get one, so a store is always loaded before it is used. Every
//! mutation writes the full set back before returning. Persistence problems
//! never reach the caller: a corrupted value is discarded, a failed write is
//! logged, and the in-memory set stays authoritative either way.

use std::collections::HashSet;

use chrono::{SecondsFormat, Utc};

use crate::entry::{CollectionItem, SavedEntry};
use crate::error::{CollectionError, StorageError};
use crate::storage::KeyValueStorage;

/// Storage key holding the serialized collection.
pub const SAVED_COLLECTION_KEY: &str = "saved-collection";

pub struct CollectionStore<S: KeyValueStorage> {
    storage: S,
    entries: Vec<SavedEntry>,
    /// Set when the stored value could not be read. Writes are held back so
    /// an unreadable collection is never replaced by a partial one.
    read_failed: bool,
}

impl<S: KeyValueStorage> CollectionStore<S> {
    /// Take ownership of `storage` and restore the persisted collection.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            entries: Vec::new(),
            read_failed: false,
        };
        store.load();
        store
    }

    /// Re-read the collection from storage, replacing the in-memory set.
    pub fn load(&mut self) {
        self.read_failed = false;
        self.entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(CollectionError::Corrupted(e)) => {
                log::warn!("Discarding corrupted saved collection: {e}");
                if let Err(e) = self.storage.remove(SAVED_COLLECTION_KEY) {
                    log::warn!("Failed to remove corrupted collection: {e}");
                }
                Vec::new()
            }
            Err(e) => {
                log::error!("{e}; changes this session will not be saved");
                self.read_failed = true;
                Vec::new()
            }
        };
        log::debug!("Loaded {} saved entries", self.entries.len());
    }

    fn read_entries(&self) -> Result<Vec<SavedEntry>, CollectionError> {
        let raw = match self.storage.get(SAVED_COLLECTION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(StorageError::Malformed { reason, .. }) => {
                return Err(CollectionError::corrupted(reason));
            }
            Err(e) => return Err(CollectionError::Read(e)),
        };
        let stored: Vec<SavedEntry> =
            serde_json::from_str(&raw).map_err(|e| CollectionError::corrupted(e.to_string()))?;

        // First occurrence of an id wins
        let mut seen = HashSet::new();
        Ok(stored.into_iter().filter(|e| seen.insert(e.id)).collect())
    }

    fn write_entries(&mut self) -> Result<(), CollectionError> {
        let raw = serde_json::to_string(&self.entries).map_err(CollectionError::Serialize)?;
        self.storage
            .set(SAVED_COLLECTION_KEY, &raw)
            .map_err(CollectionError::Write)
    }

    fn persist(&mut self) {
        if self.read_failed {
            log::error!("Not saving: the stored collection could not be read");
            return;
        }
        if let Err(e) = self.write_entries() {
            log::error!("{e}");
        }
    }

    /// Save an entry stamped with the current time. Returns `false` and
    /// changes nothing if the id is already saved.
    pub fn add(&mut self, item: impl Into<CollectionItem>) -> bool {
        let item = item.into();
        if self.is_saved(item.id) {
            return false;
        }
        self.entries.push(SavedEntry {
            id: item.id,
            name: item.name,
            image_url: item.image_url,
            saved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        self.persist();
        true
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return false;
        }
        self.persist();
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    pub fn is_saved(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// When `id` was first saved.
    pub fn saved_at(&self, id: u32) -> Option<&str> {
        self.get(id).map(|e| e.saved_at.as_str())
    }

    pub fn get(&self, id: u32) -> Option<&SavedEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries in the order they were saved.
    pub fn entries(&self) -> &[SavedEntry] {
        &self.entries
    }

    /// Entries newest first.
    pub fn entries_by_recent(&self) -> Vec<&SavedEntry> {
        let mut sorted: Vec<&SavedEntry> = self.entries.iter().collect();
        // RFC 3339 UTC timestamps of equal precision sort lexically
        sorted.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the backend back, e.g. to reopen it as a fresh store.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
