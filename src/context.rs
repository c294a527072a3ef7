//! Application Context
//!
//! Shared settings provided via Leptos Context API.

use leptos::prelude::*;

use catalog_core::CatalogConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<CatalogConfig>,
}

impl AppContext {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> CatalogConfig {
        self.config.get_value()
    }

    /// Choices offered by the page-size selector
    pub fn page_size_options(&self) -> Vec<usize> {
        self.config.with_value(|c| c.page_size_options.clone())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
