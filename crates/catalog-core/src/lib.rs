//! Catalog Core
//!
//! Platform-independent logic for the catalog browser: the item model,
//! view parameters, the filter → sort → paginate pipeline, favourites and
//! their persistence, and a timer-agnostic debouncer.

pub mod config;
pub mod debounce;
pub mod derive;
pub mod error;
pub mod favourites;
pub mod item;
pub mod load;
pub mod pagination;
pub mod query;
pub mod storage;

pub use config::CatalogConfig;
pub use debounce::{Debouncer, Ticket};
pub use derive::{categories, derive_view, CatalogView};
pub use error::{LoadError, StorageError};
pub use favourites::{Favourites, PersistedFavourites};
pub use item::{parse_items, Item};
pub use load::LoadState;
pub use query::{CatalogQuery, CategoryFilter, SortDirection, SortField};
pub use storage::{KeyValueStore, MemoryStore, PersistedValue};
