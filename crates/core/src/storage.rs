//! Key-value storage for locally persisted state
//!
//! The core never depends on a specific storage technology: favorites are
//! kept behind the [`KeyValueStore`] trait, with an in-memory implementation
//! for tests and a JSON-file implementation for the CLI.

use crate::error::StorageError;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::warn;

/// Durable string-to-string storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = read_lock(&self.entries);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = write_lock(&self.entries);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store holding a single JSON object of key-value pairs.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file. The file is created on the
    /// first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default store location under the platform data directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from(".mealdex"))
            .join("mealdex")
            .join("store.json")
    }

    fn load(&self) -> Result<HashMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.load()?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut entries = self.load().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// Storage key holding the favorites id set
const FAVORITES_KEY: &str = "favorites";

/// The favorites id set, persisted on every change.
///
/// Loaded once at construction; an unparseable stored value falls back to an
/// empty set rather than failing startup.
pub struct Favorites {
    store: Box<dyn KeyValueStore>,
    ids: RwLock<BTreeSet<String>>,
}

impl Favorites {
    /// Load favorites from the given store.
    pub fn load(store: Box<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let ids = match store.get(FAVORITES_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(err) => {
                    warn!(error = %err, "stored favorites are unreadable, starting empty");
                    BTreeSet::new()
                }
            },
            None => BTreeSet::new(),
        };

        Ok(Self {
            store,
            ids: RwLock::new(ids),
        })
    }

    /// True when the meal id is a favorite.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        read_lock(&self.ids).contains(id)
    }

    /// All favorite ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        read_lock(&self.ids).iter().cloned().collect()
    }

    /// Add a meal id; returns true when it was newly added.
    pub fn add(&self, id: &str) -> Result<bool, StorageError> {
        let added = write_lock(&self.ids).insert(id.to_string());
        if added {
            self.persist()?;
        }
        Ok(added)
    }

    /// Remove a meal id; returns true when it was present.
    pub fn remove(&self, id: &str) -> Result<bool, StorageError> {
        let removed = write_lock(&self.ids).remove(id);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Flip membership of a meal id; returns the new membership state.
    pub fn toggle(&self, id: &str) -> Result<bool, StorageError> {
        let is_favorite = {
            let mut ids = write_lock(&self.ids);
            if ids.remove(id) {
                false
            } else {
                ids.insert(id.to_string());
                true
            }
        };
        self.persist()?;
        Ok(is_favorite)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let ids: Vec<String> = self.ids();
        self.store.set(FAVORITES_KEY, &serde_json::to_string(&ids)?)
    }
}

fn read_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn write_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());

        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));

        store.set("key", "replaced").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("replaced"));
    }

    #[test]
    fn file_store_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");

        let store = JsonFileStore::new(&path);
        assert!(store.get("key").unwrap().is_none());

        store.set("key", "value").unwrap();

        // A fresh handle sees the persisted value
        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn favorites_add_remove_toggle() {
        let favorites = Favorites::load(Box::new(MemoryStore::new())).unwrap();

        assert!(favorites.add("52772").unwrap());
        assert!(!favorites.add("52772").unwrap());
        assert!(favorites.contains("52772"));

        assert!(favorites.toggle("52773").unwrap());
        assert!(!favorites.toggle("52773").unwrap());
        assert!(!favorites.contains("52773"));

        assert!(favorites.remove("52772").unwrap());
        assert!(!favorites.remove("52772").unwrap());
        assert!(favorites.ids().is_empty());
    }

    #[test]
    fn favorites_persist_across_loads() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("store.json");

        let favorites = Favorites::load(Box::new(JsonFileStore::new(&path))).unwrap();
        favorites.add("52772").unwrap();
        favorites.add("52944").unwrap();

        let reloaded = Favorites::load(Box::new(JsonFileStore::new(&path))).unwrap();
        assert_eq!(reloaded.ids(), vec!["52772", "52944"]);
    }

    #[test]
    fn corrupt_favorites_fall_back_to_empty() {
        let store = MemoryStore::new();
        store.set(FAVORITES_KEY, "not json at all").unwrap();

        let favorites = Favorites::load(Box::new(store)).unwrap();
        assert!(favorites.ids().is_empty());
    }
}
