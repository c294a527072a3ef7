//! UI Components
//!
//! Reusable Leptos components.

mod controls;
mod item_card;
mod pagination;
mod results_panel;

pub use controls::Controls;
pub use item_card::ItemCard;
pub use pagination::Pagination;
pub use results_panel::ResultsPanel;
