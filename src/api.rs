//! Catalog API
//!
//! Frontend binding to the static item document.

use catalog_core::{parse_items, Item, LoadError};
use gloo_net::http::Request;
use web_sys::{AbortSignal, RequestCache};

/// Fetch and parse the item document, bypassing the HTTP cache.
/// Aborting `signal` fails the request with `LoadError::Request`.
pub async fn fetch_items(url: &str, signal: Option<&AbortSignal>) -> Result<Vec<Item>, LoadError> {
    let response = Request::get(url)
        .cache(RequestCache::NoStore)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;
    parse_items(&body)
}
