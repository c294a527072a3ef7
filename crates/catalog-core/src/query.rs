//! View Parameters
//!
//! Search, category, sort and paging state. Every filter, sort or page-size
//! change sends the user back to page 1.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAGE_SIZE;

/// Field the result list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Price,
    Rating,
}

impl SortField {
    pub const ALL: [SortField; 2] = [SortField::Price, SortField::Rating];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Price => "Price",
            SortField::Rating => "Rating",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "rating" => SortField::Rating,
            _ => SortField::Price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub const ALL: [SortDirection; 2] = [SortDirection::Ascending, SortDirection::Descending];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "desc" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

/// Category selection; `All` disables the category filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    const ALL_VALUE: &'static str = "all";

    /// Value used by the category `<select>`
    pub fn as_value(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_VALUE,
            CategoryFilter::Only(name) => name,
        }
    }

    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => name == category,
        }
    }
}

/// All transient view parameters of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    search: String,
    category: CategoryFilter,
    sort_field: SortField,
    sort_direction: SortDirection,
    favourites_only: bool,
    /// 1-based, clamped against the result count when the view is derived
    page: usize,
    page_size: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogQuery {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            favourites_only: false,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn favourites_only(&self) -> bool {
        self.favourites_only
    }

    /// Requested page; may exceed the page count until the view clamps it
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Apply (already debounced) search text
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_sort_field(&mut self, field: SortField) {
        self.sort_field = field;
        self.page = 1;
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort_direction = direction;
        self.page = 1;
    }

    pub fn set_favourites_only(&mut self, favourites_only: bool) {
        self.favourites_only = favourites_only;
        self.page = 1;
    }

    pub fn toggle_favourites_only(&mut self) {
        self.set_favourites_only(!self.favourites_only);
    }

    /// Zero is treated as one
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Step forward, never past `total_pages`
    pub fn next_page(&mut self, total_pages: usize) {
        let last = total_pages.max(1);
        self.page = (self.page.min(last) + 1).min(last);
    }

    /// Step back, never below 1
    pub fn previous_page(&mut self, total_pages: usize) {
        let last = total_pages.max(1);
        self.page = self.page.min(last).saturating_sub(1).max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page_three() -> CatalogQuery {
        let mut query = CatalogQuery::default();
        query.next_page(5);
        query.next_page(5);
        assert_eq!(query.page(), 3);
        query
    }

    #[test]
    fn test_every_parameter_change_resets_page() {
        let mut q = on_page_three();
        q.set_search("lamp");
        assert_eq!(q.page(), 1);

        let mut q = on_page_three();
        q.set_category(CategoryFilter::Only("Home".into()));
        assert_eq!(q.page(), 1);

        let mut q = on_page_three();
        q.set_sort_field(SortField::Rating);
        assert_eq!(q.page(), 1);

        let mut q = on_page_three();
        q.set_sort_direction(SortDirection::Descending);
        assert_eq!(q.page(), 1);

        let mut q = on_page_three();
        q.toggle_favourites_only();
        assert_eq!(q.page(), 1);
        assert!(q.favourites_only());

        let mut q = on_page_three();
        q.set_page_size(12);
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), 12);
    }

    #[test]
    fn test_page_navigation_stays_in_bounds() {
        let mut q = CatalogQuery::default();
        q.previous_page(2);
        assert_eq!(q.page(), 1);

        q.next_page(2);
        q.next_page(2);
        q.next_page(2);
        assert_eq!(q.page(), 2);

        // Page count shrank underneath the query
        q.next_page(1);
        assert_eq!(q.page(), 1);

        q.next_page(0);
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn test_zero_page_size_becomes_one() {
        let mut q = CatalogQuery::with_page_size(0);
        assert_eq!(q.page_size(), 1);
        q.set_page_size(0);
        assert_eq!(q.page_size(), 1);
    }

    #[test]
    fn test_select_values() {
        assert_eq!(SortField::from_str("rating"), SortField::Rating);
        assert_eq!(SortField::from_str("bogus"), SortField::Price);
        assert_eq!(SortDirection::from_str(SortDirection::Descending.as_str()), SortDirection::Descending);
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_value("Home").as_value(), "Home");
        assert!(CategoryFilter::All.matches("anything"));
        assert!(!CategoryFilter::Only("Home".into()).matches("home"));
    }
}
