//! Catalog Item
//!
//! One entry of the static item document.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// A catalog entry. Every field must be present in the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, stable identifier
    pub id: u32,
    pub name: String,
    /// Free-form category label
    pub category: String,
    /// Non-negative price
    pub price: f64,
    /// Rating on a 0–5 scale
    pub rating: f64,
}

impl Item {
    /// Price formatted for display, e.g. `$39.99`
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Rating formatted for display, e.g. `4.4★`
    pub fn display_rating(&self) -> String {
        format!("{:.1}★", self.rating)
    }
}

/// Parse the item document (a JSON array of items)
pub fn parse_items(json: &str) -> Result<Vec<Item>, LoadError> {
    Ok(serde_json::from_str(json)?)
}
