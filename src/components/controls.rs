//! Controls Panel Component
//!
//! Search box, category / sort / page-size selectors and the favourites
//! switch. Holds no state of its own; every change goes out through a
//! callback.

use leptos::prelude::*;

use catalog_core::{CategoryFilter, SortDirection, SortField};

use crate::context::use_app_context;

#[component]
pub fn Controls(
    /// Raw (undebounced) search text
    search: ReadSignal<String>,
    #[prop(into)] on_search: Callback<String>,
    categories: Signal<Vec<String>>,
    category: Signal<CategoryFilter>,
    #[prop(into)] on_category: Callback<CategoryFilter>,
    sort_field: Signal<SortField>,
    #[prop(into)] on_sort_field: Callback<SortField>,
    sort_direction: Signal<SortDirection>,
    #[prop(into)] on_sort_direction: Callback<SortDirection>,
    page_size: Signal<usize>,
    #[prop(into)] on_page_size: Callback<usize>,
    favourites_only: Signal<bool>,
    #[prop(into)] on_toggle_favourites_only: Callback<()>,
) -> impl IntoView {
    let page_size_options = use_app_context().page_size_options();

    view! {
        <div class="controls" role="region" aria-label="Filters and sorting">
            <label class="control control--search">
                <span class="control__label">"Search"</span>
                <div class="searchbox">
                    <span class="searchbox__icon" aria-hidden="true">"⌕"</span>
                    <input
                        id="catalog-search"
                        type="search"
                        placeholder="Search by name"
                        aria-label="Search by name"
                        prop:value=move || search.get()
                        on:input=move |ev| on_search.run(event_target_value(&ev))
                    />
                </div>
            </label>

            <label class="control">
                <span class="control__label">"Category"</span>
                <select
                    aria-label="Filter by category"
                    on:change=move |ev| on_category.run(CategoryFilter::from_value(&event_target_value(&ev)))
                >
                    <option value="all" prop:selected=move || category.get() == CategoryFilter::All>
                        "All"
                    </option>
                    <For
                        each=move || categories.get()
                        key=|cat| cat.clone()
                        children=move |cat| {
                            let value = cat.clone();
                            let is_selected = move || category.get().as_value() == value;
                            let option_value = cat.clone();
                            view! {
                                <option value=option_value prop:selected=is_selected>{cat}</option>
                            }
                        }
                    />
                </select>
            </label>

            <label class="control">
                <span class="control__label">"Sort By"</span>
                <select
                    aria-label="Sort by field"
                    on:change=move |ev| on_sort_field.run(SortField::from_str(&event_target_value(&ev)))
                >
                    {SortField::ALL.iter().map(|&field| view! {
                        <option value=field.as_str() prop:selected=move || sort_field.get() == field>
                            {field.label()}
                        </option>
                    }).collect_view()}
                </select>
            </label>

            <label class="control">
                <span class="control__label">"Direction"</span>
                <select
                    aria-label="Sort direction"
                    on:change=move |ev| on_sort_direction.run(SortDirection::from_str(&event_target_value(&ev)))
                >
                    {SortDirection::ALL.iter().map(|&direction| view! {
                        <option value=direction.as_str() prop:selected=move || sort_direction.get() == direction>
                            {direction.label()}
                        </option>
                    }).collect_view()}
                </select>
            </label>

            <label class="control">
                <span class="control__label">"Per Page"</span>
                <select
                    aria-label="Items per page"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            on_page_size.run(size);
                        }
                    }
                >
                    {page_size_options.into_iter().map(|size| view! {
                        <option value=size.to_string() prop:selected=move || page_size.get() == size>
                            {size}
                        </option>
                    }).collect_view()}
                </select>
            </label>

            <label class="switch">
                <input
                    type="checkbox"
                    aria-label="Show favourites only"
                    prop:checked=move || favourites_only.get()
                    on:change=move |_| on_toggle_favourites_only.run(())
                />
                <span>"Favourites only"</span>
            </label>
        </div>
    }
}
