//! The user's saved destinations.
//!
//! Saved destination ids are kept as a JSON array under a single key of a
//! [`KeyValueStore`]. The SQLite store keeps them across restarts; the
//! memory store exists so tests need no files.

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use log::info;
use rand::{seq::SliceRandom, Rng};

use crate::{
    db::Database,
    error::{Result, TravelError},
    models::Destination,
};

/// Key the saved-destination ids are stored under.
pub const SAVED_DESTINATIONS_KEY: &str = "savedDestinations";

/// Minimal string key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Key-value store backed by a SQLite file.
///
/// A connection is opened per call.
#[derive(Debug, Clone)]
pub struct SqliteKeyValueStore {
    db_path: PathBuf,
}

impl SqliteKeyValueStore {
    /// Opens (and initializes) the database at `db_path`.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::Database` if the file cannot be opened.
    pub fn open(db_path: PathBuf) -> Result<Self> {
        Database::new(&db_path)?;
        Ok(Self { db_path })
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Database::new(&self.db_path)?.get_value(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Database::new(&self.db_path)?.set_value(key, value)
    }
}

/// Key-value store held in memory.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().map_err(|_| TravelError::Configuration {
            message: "Memory store lock poisoned".to_string(),
        })
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Result of saving a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The id was added
    Saved,
    /// The id was already in the set; nothing changed
    AlreadySaved,
}

/// Set of saved destination ids.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use wanderlust_core::saved::{MemoryKeyValueStore, SaveOutcome, SavedDestinations};
///
/// let saved = SavedDestinations::new(Arc::new(MemoryKeyValueStore::new()));
/// assert_eq!(saved.save("3")?, SaveOutcome::Saved);
/// assert_eq!(saved.save("3")?, SaveOutcome::AlreadySaved);
/// assert_eq!(saved.ids()?, vec!["3".to_string()]);
/// # Ok::<(), wanderlust_core::TravelError>(())
/// ```
#[derive(Clone)]
pub struct SavedDestinations {
    store: Arc<dyn KeyValueStore>,
}

impl SavedDestinations {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Saved ids in the order they were saved. A missing key reads as empty.
    pub fn ids(&self) -> Result<Vec<String>> {
        match self.store.get(SAVED_DESTINATIONS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write(&self, ids: &[String]) -> Result<()> {
        let raw = serde_json::to_string(ids)?;
        self.store.set(SAVED_DESTINATIONS_KEY, &raw)
    }

    pub fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.ids()?.iter().any(|saved| saved == id))
    }

    /// Adds `id` unless it is already saved.
    pub fn save(&self, id: &str) -> Result<SaveOutcome> {
        let mut ids = self.ids()?;
        if ids.iter().any(|saved| saved == id) {
            return Ok(SaveOutcome::AlreadySaved);
        }

        ids.push(id.to_string());
        self.write(&ids)?;
        info!("Saved destination {id}");
        Ok(SaveOutcome::Saved)
    }

    /// Removes `id`. Returns whether it was saved; removing an unsaved id
    /// changes nothing.
    pub fn unsave(&self, id: &str) -> Result<bool> {
        let mut ids = self.ids()?;
        let before = ids.len();
        ids.retain(|saved| saved != id);
        if ids.len() == before {
            return Ok(false);
        }

        self.write(&ids)?;
        info!("Removed saved destination {id}");
        Ok(true)
    }

    /// The saved destinations, in collection order.
    ///
    /// Saved ids with no matching destination are ignored.
    pub fn list_saved(&self, all: &[Destination]) -> Result<Vec<Destination>> {
        let ids = self.ids()?;
        Ok(all
            .iter()
            .filter(|destination| ids.contains(&destination.id))
            .cloned()
            .collect())
    }

    /// Saves a random destination that is not saved yet.
    ///
    /// Returns `None` when every destination is already saved.
    pub fn save_random(&self, all: &[Destination]) -> Result<Option<Destination>> {
        self.save_random_with(all, &mut rand::thread_rng())
    }

    /// [`SavedDestinations::save_random`] with a caller-supplied generator.
    pub fn save_random_with<R: Rng + ?Sized>(
        &self,
        all: &[Destination],
        rng: &mut R,
    ) -> Result<Option<Destination>> {
        let ids = self.ids()?;
        let unsaved: Vec<&Destination> = all
            .iter()
            .filter(|destination| !ids.contains(&destination.id))
            .collect();

        let Some(pick) = unsaved.choose(rng) else {
            return Ok(None);
        };

        self.save(&pick.id)?;
        Ok(Some((*pick).clone()))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use tempfile::TempDir;

    use super::*;

    fn memory_saved() -> SavedDestinations {
        SavedDestinations::new(Arc::new(MemoryKeyValueStore::new()))
    }

    fn destination(id: &str) -> Destination {
        Destination {
            id: id.to_string(),
            name: format!("Destination {id}"),
            country: "Somewhere".to_string(),
            description: String::new(),
            hero_image: String::new(),
            difficulty: "Easy".to_string(),
            best_months: Vec::new(),
            interests: Vec::new(),
            created: None,
        }
    }

    #[test]
    fn test_save_is_idempotent() {
        let saved = memory_saved();
        assert_eq!(saved.save("1").unwrap(), SaveOutcome::Saved);
        assert_eq!(saved.save("1").unwrap(), SaveOutcome::AlreadySaved);
        assert_eq!(saved.ids().unwrap(), vec!["1"]);
    }

    #[test]
    fn test_unsave_non_member_is_noop() {
        let saved = memory_saved();
        saved.save("1").unwrap();
        assert!(!saved.unsave("2").unwrap());
        assert_eq!(saved.ids().unwrap(), vec!["1"]);

        assert!(saved.unsave("1").unwrap());
        assert!(saved.ids().unwrap().is_empty());
        assert!(!saved.unsave("1").unwrap());
    }

    #[test]
    fn test_value_is_json_array() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let saved = SavedDestinations::new(store.clone());
        saved.save("4").unwrap();
        saved.save("2").unwrap();
        assert_eq!(
            store.get(SAVED_DESTINATIONS_KEY).unwrap().as_deref(),
            Some(r#"["4","2"]"#)
        );
    }

    #[test]
    fn test_list_saved_keeps_collection_order() {
        let saved = memory_saved();
        saved.save("3").unwrap();
        saved.save("1").unwrap();
        saved.save("ghost").unwrap();

        let all = vec![destination("1"), destination("2"), destination("3")];
        let listed = saved.list_saved(&all).unwrap();
        let ids: Vec<&str> = listed.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_save_random_picks_unsaved() {
        let saved = memory_saved();
        saved.save("1").unwrap();
        let all = vec![destination("1"), destination("2"), destination("3")];
        let mut rng = StdRng::seed_from_u64(7);

        let first = saved.save_random_with(&all, &mut rng).unwrap().unwrap();
        assert_ne!(first.id, "1");
        let second = saved.save_random_with(&all, &mut rng).unwrap().unwrap();
        assert_ne!(second.id, "1");
        assert_ne!(second.id, first.id);

        assert!(saved.save_random_with(&all, &mut rng).unwrap().is_none());
        assert_eq!(saved.ids().unwrap().len(), 3);
    }

    #[test]
    fn test_sqlite_store_persists_between_instances() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("saved.db");

        let first = SavedDestinations::new(Arc::new(
            SqliteKeyValueStore::open(path.clone()).expect("Failed to open store"),
        ));
        first.save("5").unwrap();

        let second = SavedDestinations::new(Arc::new(
            SqliteKeyValueStore::open(path).expect("Failed to reopen store"),
        ));
        assert!(second.contains("5").unwrap());
    }
}
