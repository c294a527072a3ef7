//! End-to-end catalog scenarios against the shipped sample items.

use catalog_core::{
    derive_view, parse_items, CatalogQuery, Debouncer, Favourites, Item, LoadError, LoadState,
    MemoryStore, PersistedFavourites, SortDirection, SortField,
};
use catalog_core::config::FAVOURITES_KEY;

fn sample_items() -> Vec<Item> {
    parse_items(include_str!("../../../public/items.json")).expect("sample items parse")
}

fn names(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

/// One mount of the catalog: the same open / observe sequence the app's
/// favourites effect runs, once on mount and once per toggle.
struct Mount {
    favourites: Favourites,
    persisted: PersistedFavourites<MemoryStore>,
}

impl Mount {
    fn new(store: &MemoryStore) -> Self {
        let (mut persisted, favourites) = PersistedFavourites::open(store.clone(), FAVOURITES_KEY);
        assert!(!persisted.observe(&favourites));
        Self { favourites, persisted }
    }

    fn toggle(&mut self, id: u32) {
        self.favourites.toggle(id);
        assert!(self.persisted.observe(&self.favourites));
    }
}

#[test]
fn search_applies_only_after_debounce() {
    let items = sample_items();
    let mut query = CatalogQuery::default();
    let mut search = Debouncer::new(String::new());

    let tickets: Vec<_> = ["l", "la", "lam", "lamp"]
        .into_iter()
        .map(|text| search.push(text.to_string()))
        .collect();
    let ticket = tickets[tickets.len() - 1];
    assert_eq!(search.fire(tickets[0]), None);

    // Still typing: the applied search is unchanged
    let view = derive_view(&items, &Favourites::new(), &query);
    assert_eq!(view.total(), 15);

    if let Some(text) = search.fire(ticket) {
        query.set_search(text);
    }
    let view = derive_view(&items, &Favourites::new(), &query);
    let found = names(&view.matches);
    assert_eq!(found.len(), 2);
    assert!(found.contains(&"Aurora Lamp"));
    assert!(found.contains(&"Photon Desk Lamp"));
    assert!(!found.contains(&"Summit Tent"));
}

#[test]
fn price_descending_starts_with_most_expensive() {
    let items = sample_items();
    let mut query = CatalogQuery::default();
    query.set_sort_field(SortField::Price);
    query.set_sort_direction(SortDirection::Descending);

    let view = derive_view(&items, &Favourites::new(), &query);
    let first = &view.page_items[0];
    assert_eq!(first.name, "Summit Tent");
    assert_eq!(first.display_price(), "$199.00");
}

#[test]
fn favourite_survives_remount() {
    let store = MemoryStore::new();

    let mut first = Mount::new(&store);
    first.toggle(1);
    assert!(first.favourites.contains(1));
    assert_eq!(store.raw(FAVOURITES_KEY).as_deref(), Some("[1]"));
    drop(first);

    let second = Mount::new(&store);
    assert!(second.favourites.contains(1));
}

#[test]
fn first_mount_does_not_overwrite_stored_favourites() {
    let store = MemoryStore::new();
    {
        use catalog_core::KeyValueStore;
        store.set(FAVOURITES_KEY, "[4,8]").unwrap();
    }

    let mount = Mount::new(&store);
    assert_eq!(mount.favourites.ids(), &[4, 8]);
    assert_eq!(store.raw(FAVOURITES_KEY).as_deref(), Some("[4,8]"));
}

#[test]
fn persisted_matches_memory_after_each_toggle() {
    let store = MemoryStore::new();
    let mut mount = Mount::new(&store);

    for id in [3, 5, 3, 9] {
        mount.toggle(id);
        let stored: Favourites =
            serde_json::from_str(&store.raw(FAVOURITES_KEY).unwrap()).unwrap();
        assert_eq!(stored, mount.favourites);
    }
    assert_eq!(mount.favourites.ids(), &[5, 9]);
}

#[test]
fn failed_fetch_leaves_catalog_empty() {
    let (items, state) = LoadState::settle(Err(LoadError::Status(500)));
    assert!(!state.is_loading());
    assert!(state.error().is_some());
    assert!(items.is_empty());

    let (_, state) = LoadState::settle(parse_items("not json"));
    assert!(matches!(state, LoadState::Failed(_)));
}

#[test]
fn no_match_yields_empty_view() {
    let items = sample_items();
    let mut query = CatalogQuery::default();
    query.set_search("zeppelin");

    let view = derive_view(&items, &Favourites::new(), &query);
    assert!(view.is_empty());
    assert!(view.page_items.is_empty());
    assert_eq!(view.total_pages, 1);
}

#[test]
fn second_page_holds_the_rest() {
    let items = sample_items();
    let mut query = CatalogQuery::default();
    let first = derive_view(&items, &Favourites::new(), &query);
    assert_eq!(first.page_items.len(), 9);
    assert_eq!(first.total_pages, 2);

    query.next_page(first.total_pages);
    let second = derive_view(&items, &Favourites::new(), &query);
    assert_eq!(second.page, 2);
    assert_eq!(second.page_items.len(), 6);
    assert_eq!(second.page_items.last().unwrap().name, "Summit Tent");

    query.set_sort_direction(SortDirection::Descending);
    assert_eq!(query.page(), 1);
}
