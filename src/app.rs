//! Inventory App
//!
//! Top-level component. Owns the store and view parameters and provides
//! them to the rest of the tree.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemEntryForm, ItemList, Pagination, SearchBar};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, AppStore};
use crate::view::project;

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    let ctx = AppContext::new(UiConfig::default());
    provide_context(store);
    provide_context(ctx);

    let page_size = ctx.page_size();
    let page_view = Memo::new(move |_| {
        let search = ctx.search.get();
        let page = ctx.page.get();
        store
            .inventory()
            .with(|inventory| project(inventory, &search, page, page_size))
    });

    let labels = ctx.labels();
    log::info!("[APP] mounted, page size {}", page_size);

    view! {
        <div class="app-container">
            <div class="sidebar">
                <h2>{labels.title.clone()}</h2>
            </div>
            <div class="main-content">
                <ItemEntryForm />
                <SearchBar />
                <h3>{labels.list_heading.clone()}</h3>
                <ItemList page_view=page_view />
                <Pagination page_view=page_view />
            </div>
        </div>
    }
}
