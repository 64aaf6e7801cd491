//! Search Bar Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Filters the list by item name
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let placeholder = ctx.labels().search_placeholder;

    view! {
        <div class="search-group">
            <input
                type="text"
                class="input-field"
                placeholder=placeholder
                prop:value=move || ctx.search.get()
                on:input=move |ev| ctx.set_search(event_target_value(&ev))
            />
        </div>
    }
}
