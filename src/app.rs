//! Catalog Browser App
//!
//! Owns the catalog state: loads items once per mount, applies debounced
//! search, persists favourites and derives the visible page.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use send_wrapper::SendWrapper;
use web_sys::AbortController;

use catalog_core::{
    categories, derive_view, CatalogConfig, CategoryFilter, LoadState, PersistedFavourites,
    SortDirection, SortField,
};

use crate::api;
use crate::components::{Controls, ResultsPanel};
use crate::context::AppContext;
use crate::hooks::use_debounced;
use crate::local_storage::BrowserStorage;
use crate::store::*;

#[component]
pub fn App() -> impl IntoView {
    let config = CatalogConfig::default();
    let ctx = AppContext::new(config.clone());
    provide_context(ctx);

    // Favourites are read before the store exists so the first render has them
    let (persisted, favourites) =
        PersistedFavourites::open(BrowserStorage, config.favourites_key.clone());
    let persisted = StoredValue::new(persisted);
    let store: AppStore = Store::new(CatalogState::new(favourites, config.default_page_size));
    provide_context(store);

    // Write-through on every change; the initial run is not written back
    Effect::new(move |_| {
        let favourites = store.favourites().get();
        persisted.update_value(|p| {
            p.observe(&favourites);
        });
    });

    // Load items once per mount; teardown clears the pending delay and
    // aborts an in-flight request
    Effect::new(move |_| {
        let config = ctx.config();
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());

        store.load().set(LoadState::Loading);
        tracing::info!(url = %config.items_url, "loading catalog");
        let delay = Timeout::new(config.load_delay_ms, move || {
            spawn_local(async move {
                let result = api::fetch_items(&config.items_url, signal.as_ref()).await;
                if signal.as_ref().is_some_and(|s| s.aborted()) {
                    tracing::debug!("catalog unmounted before load finished");
                    return;
                }
                store_finish_load(&store, result);
            });
        });

        let pending = SendWrapper::new((delay, controller));
        on_cleanup(move || {
            let (delay, controller) = pending.take();
            drop(delay);
            if let Some(controller) = controller {
                controller.abort();
            }
        });
    });

    // Search text is applied only after typing pauses
    let (search, set_search) = signal(String::new());
    let applied_search = use_debounced(search.into(), config.search_debounce_ms);
    Effect::new(move |_| store_set_search(&store, applied_search.get()));

    let category_options = Memo::new(move |_| categories(&store.items().read()));
    let catalog = Memo::new(move |_| {
        derive_view(
            &store.items().read(),
            &store.favourites().read(),
            &store.query().read(),
        )
    });

    let is_loading = move || store.load().with(|l| l.is_loading());
    let error = move || store.load().with(|l| l.error().map(str::to_string));

    view! {
        <div class="container">
            <div class="header">
                <h1 class="title">"Catalog"</h1>
            </div>

            <Controls
                search=search
                on_search=move |text: String| set_search.set(text)
                categories=category_options.into()
                category=Signal::derive(move || store.query().with(|q| q.category().clone()))
                on_category=move |category: CategoryFilter| store_set_category(&store, category)
                sort_field=Signal::derive(move || store.query().with(|q| q.sort_field()))
                on_sort_field=move |field: SortField| store_set_sort_field(&store, field)
                sort_direction=Signal::derive(move || store.query().with(|q| q.sort_direction()))
                on_sort_direction=move |direction: SortDirection| store_set_sort_direction(&store, direction)
                page_size=Signal::derive(move || store.query().with(|q| q.page_size()))
                on_page_size=move |size: usize| store_set_page_size(&store, size)
                favourites_only=Signal::derive(move || store.query().with(|q| q.favourites_only()))
                on_toggle_favourites_only=move |_: ()| store_toggle_favourites_only(&store)
            />

            <Show when=is_loading>
                <div class="loading" role="status" aria-live="polite">
                    <span class="spinner" aria-hidden="true"></span>
                    <span class="sr-only">"Loading items…"</span>
                </div>
            </Show>

            {move || error().map(|message| view! {
                <div class="empty" role="alert">{message}</div>
            })}

            <Show when=move || store.load().with(|l| l.is_ready())>
                <ResultsPanel catalog=catalog />
            </Show>
        </div>
    }
}
