//! Catalog Configuration
//!
//! Fixed settings shared by the core and the web front end.

/// Location of the static item document
pub const ITEMS_URL: &str = "/items.json";

/// localStorage key holding the favourite ids
pub const FAVOURITES_KEY: &str = "favourites:v1";

/// Quiet period before search text is applied
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Artificial latency before the item fetch starts
pub const LOAD_DELAY_MS: u32 = 600;

pub const DEFAULT_PAGE_SIZE: usize = 9;

pub const PAGE_SIZE_OPTIONS: &[usize] = &[6, 9, 12, 24];

/// Runtime settings for one mounted catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub items_url: String,
    pub favourites_key: String,
    pub search_debounce_ms: u32,
    pub load_delay_ms: u32,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items_url: ITEMS_URL.to_string(),
            favourites_key: FAVOURITES_KEY.to_string(),
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            load_delay_ms: LOAD_DELAY_MS,
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_size_is_an_option() {
        let config = CatalogConfig::default();
        assert!(config.page_size_options.contains(&config.default_page_size));
        assert_eq!(config.favourites_key, "favourites:v1");
    }
}
