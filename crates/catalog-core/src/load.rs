//! Load Lifecycle

use tracing::{info, warn};

use crate::error::LoadError;
use crate::item::Item;

/// Status of the one-shot item load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Terminal for this mount; carries the message shown to the user
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Turn a fetch result into the new item collection and state.
    /// A failure always yields an empty collection.
    pub fn settle(result: Result<Vec<Item>, LoadError>) -> (Vec<Item>, LoadState) {
        match result {
            Ok(items) => {
                info!(count = items.len(), "catalog loaded");
                (items, LoadState::Ready)
            }
            Err(err) => {
                warn!(error = ?err, "catalog load failed");
                (Vec::new(), LoadState::Failed(err.to_string()))
            }
        }
    }
}
