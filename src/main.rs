//! Catalog Browser Entry Point

mod api;
mod app;
mod components;
mod context;
mod hooks;
mod local_storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("Starting catalog browser");
    mount_to_body(App);
}
