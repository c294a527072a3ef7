//! Pagination Component
//!
//! Prev / "Page X of Y" / Next. Buttons are disabled when there is no page
//! in that direction.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    page: Signal<usize>,
    total_pages: Signal<usize>,
    has_previous: Signal<bool>,
    has_next: Signal<bool>,
    #[prop(into)] on_previous: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination" role="navigation" aria-label="Pagination">
            <button
                aria-label="Previous page"
                disabled=move || !has_previous.get()
                on:click=move |_| on_previous.run(())
            >
                "Prev"
            </button>
            <span>{move || format!("Page {} of {}", page.get(), total_pages.get())}</span>
            <button
                aria-label="Next page"
                disabled=move || !has_next.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
