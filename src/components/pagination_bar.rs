//! Pagination Bar Component
//!
//! Prev/Next controls clamped to the first and last page.

use leptos::prelude::*;

use crate::models::Pagination;

#[component]
pub fn PaginationBar(
    #[prop(into)] pagination: Signal<Pagination>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    let go_prev = move |_| {
        let p = pagination.get_untracked();
        if p.has_prev() {
            on_page.run(p.page - 1);
        }
    };
    let go_next = move |_| {
        let p = pagination.get_untracked();
        if p.has_next() {
            on_page.run(p.page + 1);
        }
    };

    view! {
        <div class="pagination">
            <button disabled=move || !pagination.get().has_prev() on:click=go_prev>
                "Prev"
            </button>
            <span>
                {move || {
                    let p = pagination.get();
                    format!("Page {} of {}", p.page, p.display_total_pages())
                }}
            </span>
            <button disabled=move || !pagination.get().has_next() on:click=go_next>
                "Next"
            </button>
        </div>
    }
}
