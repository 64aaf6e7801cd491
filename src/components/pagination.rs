//! Pagination Component
//!
//! Previous/next controls with a "page X / Y" label.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::view::{next_page, previous_page, PageView};

#[component]
pub fn Pagination(page_view: Memo<PageView>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let labels = ctx.labels();
    let prefix = labels.page_prefix.clone();

    let on_previous = move |_| {
        let page = page_view.with_untracked(|view| view.page);
        ctx.go_to_page(previous_page(page));
    };

    let on_next = move |_| {
        let (page, total) = page_view.with_untracked(|view| (view.page, view.total_pages));
        ctx.go_to_page(next_page(page, total));
    };

    view! {
        <div class="pagination">
            <button
                disabled=move || !page_view.with(|view| view.has_previous())
                on:click=on_previous
            >
                {labels.previous.clone()}
            </button>
            <span>{move || page_view.with(|view| view.label(&prefix))}</span>
            <button
                disabled=move || !page_view.with(|view| view.has_next())
                on:click=on_next
            >
                {labels.next.clone()}
            </button>
        </div>
    }
}
