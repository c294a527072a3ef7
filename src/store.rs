//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use catalog_core::{
    CatalogQuery, CategoryFilter, Favourites, Item, LoadError, LoadState, SortDirection, SortField,
};

/// Catalog state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Items from the last successful load
    pub items: Vec<Item>,
    pub load: LoadState,
    /// Filter, sort and paging parameters
    pub query: CatalogQuery,
    pub favourites: Favourites,
}

impl CatalogState {
    pub fn new(favourites: Favourites, page_size: usize) -> Self {
        Self {
            query: CatalogQuery::with_page_size(page_size),
            favourites,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<CatalogState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record the outcome of the item fetch
pub fn store_finish_load(store: &AppStore, result: Result<Vec<Item>, LoadError>) {
    let (items, load) = LoadState::settle(result);
    store.items().set(items);
    store.load().set(load);
}

pub fn store_set_search(store: &AppStore, text: String) {
    store.query().write().set_search(text);
}

pub fn store_set_category(store: &AppStore, category: CategoryFilter) {
    store.query().write().set_category(category);
}

pub fn store_set_sort_field(store: &AppStore, field: SortField) {
    store.query().write().set_sort_field(field);
}

pub fn store_set_sort_direction(store: &AppStore, direction: SortDirection) {
    store.query().write().set_sort_direction(direction);
}

pub fn store_toggle_favourites_only(store: &AppStore) {
    store.query().write().toggle_favourites_only();
}

pub fn store_set_page_size(store: &AppStore, page_size: usize) {
    store.query().write().set_page_size(page_size);
}

pub fn store_next_page(store: &AppStore, total_pages: usize) {
    store.query().write().next_page(total_pages);
}

pub fn store_previous_page(store: &AppStore, total_pages: usize) {
    store.query().write().previous_page(total_pages);
}

/// Flip favourite membership of an item
pub fn store_toggle_favourite(store: &AppStore, item_id: u32) {
    store.favourites().write().toggle(item_id);
}

pub fn store_is_favourite(store: &AppStore, item_id: u32) -> bool {
    store.favourites().read().contains(item_id)
}
