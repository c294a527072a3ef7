//! Results Panel Component
//!
//! Result count, the current page of item cards and pagination, or an
//! empty-state message when nothing matches.

use leptos::prelude::*;

use catalog_core::CatalogView;

use crate::components::{ItemCard, Pagination};
use crate::store::{
    store_is_favourite, store_next_page, store_previous_page, store_toggle_favourite,
    use_app_store,
};

#[component]
pub fn ResultsPanel(catalog: Memo<CatalogView>) -> impl IntoView {
    let store = use_app_store();

    let page = Signal::derive(move || catalog.with(|v| v.page));
    let total_pages = Signal::derive(move || catalog.with(|v| v.total_pages));

    view! {
        <div class="toolbar" aria-live="polite">
            {move || catalog.with(|v| v.summary())}
        </div>
        <Show
            when=move || catalog.with(|v| !v.is_empty())
            fallback=|| view! {
                <div class="empty">"No items match your filters. Try adjusting search or category."</div>
            }
        >
            <div class="grid" role="list">
                <For
                    each=move || catalog.with(|v| v.page_items.clone())
                    key=|item| item.id
                    children=move |item| {
                        let id = item.id;
                        view! {
                            <ItemCard
                                item=item
                                is_favourite=Signal::derive(move || store_is_favourite(&store, id))
                                on_toggle_favourite=move |item_id: u32| store_toggle_favourite(&store, item_id)
                            />
                        }
                    }
                />
            </div>
            <Pagination
                page=page
                total_pages=total_pages
                has_previous=Signal::derive(move || catalog.with(|v| v.has_previous()))
                has_next=Signal::derive(move || catalog.with(|v| v.has_next()))
                on_previous=move |_: ()| store_previous_page(&store, total_pages.get_untracked())
                on_next=move |_: ()| store_next_page(&store, total_pages.get_untracked())
            />
        </Show>
    }
}
