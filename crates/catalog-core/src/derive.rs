//! View Derivation
//!
//! Pure filter → sort → paginate pipeline. Same inputs always give the same
//! view; nothing here touches state.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::favourites::Favourites;
use crate::item::Item;
use crate::pagination::{clamp_page, page_range, total_pages};
use crate::query::{CatalogQuery, SortDirection, SortField};

/// The visible state of the catalog for one set of inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogView {
    /// Every matching item, sorted
    pub matches: Vec<Item>,
    /// Clamped current page (1-based)
    pub page: usize,
    pub total_pages: usize,
    /// The slice of `matches` on `page`
    pub page_items: Vec<Item>,
}

impl CatalogView {
    pub fn total(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Result count line shown above the grid
    pub fn summary(&self) -> String {
        format!("Showing {} result(s)", self.total())
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Case-insensitive substring match on the item name.
/// `needle` must already be trimmed and lowercased; empty matches everything.
fn name_matches(item: &Item, needle: &str) -> bool {
    needle.is_empty() || item.name.to_lowercase().contains(needle)
}

fn sort_key(item: &Item, field: SortField) -> f64 {
    match field {
        SortField::Price => item.price,
        SortField::Rating => item.rating,
    }
}

fn compare(a: &Item, b: &Item, field: SortField, direction: SortDirection) -> Ordering {
    let ord = sort_key(a, field)
        .partial_cmp(&sort_key(b, field))
        .unwrap_or(Ordering::Equal);
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Apply category, search and favourites filters, keeping input order
pub fn filter_items(items: &[Item], favourites: &Favourites, query: &CatalogQuery) -> Vec<Item> {
    let needle = query.search().trim().to_lowercase();
    items
        .iter()
        .filter(|item| query.category().matches(&item.category))
        .filter(|item| name_matches(item, &needle))
        .filter(|item| !query.favourites_only() || favourites.contains(item.id))
        .cloned()
        .collect()
}

/// Stable sort; equal keys keep their relative order in both directions
pub fn sort_items(items: &mut [Item], field: SortField, direction: SortDirection) {
    items.sort_by(|a, b| compare(a, b, field, direction));
}

pub fn derive_view(items: &[Item], favourites: &Favourites, query: &CatalogQuery) -> CatalogView {
    let mut matches = filter_items(items, favourites, query);
    sort_items(&mut matches, query.sort_field(), query.sort_direction());

    let total_pages = total_pages(matches.len(), query.page_size());
    let page = clamp_page(query.page(), total_pages);
    let page_items = matches[page_range(page, query.page_size(), matches.len())].to_vec();

    CatalogView {
        matches,
        page,
        total_pages,
        page_items,
    }
}

/// Distinct categories of `items`, sorted
pub fn categories(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
