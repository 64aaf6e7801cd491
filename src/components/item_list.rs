//! Item List Component
//!
//! Rows of the current page with per-row delete and edit actions.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_dispatch, store_item_at, use_app_store, Command};
use crate::view::{PageRow, PageView};

/// List of rows for the current page
#[component]
pub fn ItemList(page_view: Memo<PageView>) -> impl IntoView {
    view! {
        <ul class="item-list">
            <For
                each=move || page_view.get().rows
                key=|row| (row.position, row.item.clone())
                children=move |row| view! { <ItemRow row=row /> }
            />
        </ul>
    }
}

/// A single item row
#[component]
pub fn ItemRow(row: PageRow) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let labels = ctx.labels();
    let position = row.position;

    let on_delete = move |_| {
        if store_dispatch(&store, Command::Remove(position)) {
            ctx.item_removed(position);
        }
    };

    let on_edit = move |_| match store_item_at(&store, position) {
        Some(item) => ctx.begin_edit(position, &item),
        None => log::warn!("[APP] edit on missing position {}", position),
    };

    view! {
        <li class="item">
            {row.item.row_text(&labels.currency)}
            <button class="delete-button" on:click=on_delete>
                {labels.delete_button.clone()}
            </button>
            <button class="edit-button" on:click=on_edit>
                {labels.edit_button.clone()}
            </button>
        </li>
    }
}
