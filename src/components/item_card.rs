//! Item Card Component
//!
//! One catalog entry with a favourite toggle.

use leptos::prelude::*;

use catalog_core::Item;

#[component]
pub fn ItemCard(
    item: Item,
    is_favourite: Signal<bool>,
    #[prop(into)] on_toggle_favourite: Callback<u32>,
) -> impl IntoView {
    let id = item.id;
    let aria_label = format!("Item {}", item.name);

    view! {
        <div class="item-card" role="listitem" aria-label=aria_label>
            <div class="item-card__header">
                <h3 class="item-card__title">{item.name.clone()}</h3>
                <button
                    class=move || if is_favourite.get() { "fav-btn fav-btn--active" } else { "fav-btn" }
                    aria-pressed=move || if is_favourite.get() { "true" } else { "false" }
                    title=move || if is_favourite.get() { "Remove from favourites" } else { "Add to favourites" }
                    on:click=move |_| on_toggle_favourite.run(id)
                >
                    {move || if is_favourite.get() { "★" } else { "☆" }}
                </button>
            </div>
            <div class="item-card__meta">
                <span class="badge" aria-label="Category">{item.category.clone()}</span>
                <span class="price" aria-label="Price">{item.display_price()}</span>
                <span class="rating" aria-label="Rating">{item.display_rating()}</span>
            </div>
        </div>
    }
}
