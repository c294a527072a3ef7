//! Favourites
//!
//! Set of favourite item ids. Stored as a JSON array in insertion order;
//! order has no meaning for filtering.

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, PersistedValue};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<u32>", from = "Vec<u32>")]
pub struct Favourites {
    ids: Vec<u32>,
}

impl From<Vec<u32>> for Favourites {
    fn from(ids: Vec<u32>) -> Self {
        Self::from_ids(ids)
    }
}

impl From<Favourites> for Vec<u32> {
    fn from(favourites: Favourites) -> Self {
        favourites.ids
    }
}

impl Favourites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored ids, dropping duplicates
    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        let mut favourites = Self::new();
        for id in ids {
            if !favourites.contains(id) {
                favourites.ids.push(id);
            }
        }
        favourites
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership of `id`. Returns true when `id` is now a favourite.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.contains(id) {
            self.ids.retain(|&x| x != id);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }
}

/// Favourites bound to a key-value store.
///
/// `open` reads the stored set once; `observe` is called with the current
/// set on the initial render and after every change, and writes all but
/// the initial one.
pub struct PersistedFavourites<S> {
    persisted: PersistedValue<S, Favourites>,
}

impl<S: KeyValueStore> PersistedFavourites<S> {
    pub fn open(store: S, key: impl Into<String>) -> (Self, Favourites) {
        let persisted = PersistedValue::new(store, key);
        let favourites = persisted.read(Favourites::new());
        (Self { persisted }, favourites)
    }

    /// Returns whether `favourites` reached the store
    pub fn observe(&mut self, favourites: &Favourites) -> bool {
        self.persisted.write(favourites)
    }
}
