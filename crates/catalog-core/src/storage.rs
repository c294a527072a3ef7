//! Key-Value Storage
//!
//! Named JSON blobs in a string-keyed store. Reads fall back to a default
//! and writes swallow failures, so a broken or full store degrades to
//! in-memory state instead of breaking the UI.

use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::StorageError;

/// Raw string storage backend
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same entries, so a clone outlives a
/// "reload" of whatever held the original.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A typed value persisted under one key.
///
/// The first `write` is skipped: it carries the value that `read` just
/// produced, and writing it back would replace stored data with defaults
/// whenever the stored blob failed to parse.
pub struct PersistedValue<S, T> {
    store: S,
    key: String,
    skip_next_write: bool,
    _value: PhantomData<fn() -> T>,
}

impl<S: KeyValueStore, T> PersistedValue<S, T> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            skip_next_write: true,
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored value, or `default` when absent, unreadable or unparsable
    pub fn read(&self, default: T) -> T
    where
        T: DeserializeOwned,
    {
        match self.try_read() {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                debug!(key = %self.key, error = %err, "falling back to default");
                default
            }
        }
    }

    fn try_read(&self) -> Result<Option<T>, StorageError>
    where
        T: DeserializeOwned,
    {
        match self.store.get(&self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store `value`. Returns whether it reached the store.
    pub fn write(&mut self, value: &T) -> bool
    where
        T: Serialize,
    {
        if self.skip_next_write {
            self.skip_next_write = false;
            return false;
        }
        match self.try_write(value) {
            Ok(()) => true,
            Err(err) => {
                debug!(key = %self.key, error = %err, "write dropped");
                false
            }
        }
    }

    fn try_write(&self, value: &T) -> Result<(), StorageError>
    where
        T: Serialize,
    {
        let raw = serde_json::to_string(value)?;
        self.store.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favourites::Favourites;

    /// Store whose every call fails, like a browser with storage disabled
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("QuotaExceededError".into()))
        }
    }

    #[test]
    fn test_read_missing_returns_default() {
        let value: PersistedValue<_, Favourites> = PersistedValue::new(MemoryStore::new(), "favs");
        assert_eq!(value.read(Favourites::from_ids([1])), Favourites::from_ids([1]));
    }

    #[test]
    fn test_read_unparsable_returns_default() {
        let store = MemoryStore::new();
        store.set("favs", "{not json").unwrap();
        let value: PersistedValue<_, Favourites> = PersistedValue::new(store, "favs");
        assert!(value.read(Favourites::new()).is_empty());
    }

    #[test]
    fn test_read_duplicate_ids_yields_set() {
        let store = MemoryStore::new();
        store.set("favs", "[3,3,7]").unwrap();
        let value: PersistedValue<_, Favourites> = PersistedValue::new(store, "favs");

        let favs = value.read(Favourites::new());
        assert_eq!(favs.len(), 2);
        assert_eq!(favs.ids(), &[3, 7]);
    }

    #[test]
    fn test_first_write_is_skipped() {
        let store = MemoryStore::new();
        store.set("favs", "[5]").unwrap();

        let mut value = PersistedValue::new(store.clone(), "favs");
        let initial: Favourites = value.read(Favourites::new());
        assert!(!value.write(&initial));
        assert_eq!(store.raw("favs").as_deref(), Some("[5]"));

        let mut changed = initial.clone();
        changed.toggle(6);
        assert!(value.write(&changed));
        assert_eq!(store.raw("favs").as_deref(), Some("[5,6]"));
    }

    #[test]
    fn test_first_write_skipped_even_when_read_failed() {
        let store = MemoryStore::new();
        store.set("favs", "garbage").unwrap();

        let mut value = PersistedValue::new(store.clone(), "favs");
        let initial: Favourites = value.read(Favourites::new());
        value.write(&initial);
        assert_eq!(store.raw("favs").as_deref(), Some("garbage"));
    }

    #[test]
    fn test_broken_store_never_panics() {
        let mut value: PersistedValue<_, Favourites> = PersistedValue::new(BrokenStore, "favs");
        let initial = value.read(Favourites::new());
        assert!(initial.is_empty());
        assert!(!value.write(&initial));
        assert!(!value.write(&Favourites::from_ids([1])));
    }
}
