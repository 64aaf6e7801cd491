//! Item Entry Form Component
//!
//! Name and price fields with an add/update button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_dispatch, use_app_store};

/// Form for adding a new item or updating the one being edited
#[component]
pub fn ItemEntryForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let labels = ctx.labels();
    let add_label = labels.add_button.clone();
    let update_label = labels.update_button.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(command) = ctx.submit_form() {
            store_dispatch(&store, command);
        }
    };

    view! {
        <form class="input-group" on:submit=on_submit>
            <input
                type="text"
                class="input-field"
                placeholder=labels.name_placeholder.clone()
                prop:value=move || ctx.form.with(|form| form.name.clone())
                on:input=move |ev| ctx.set_name(event_target_value(&ev))
            />
            <input
                type="number"
                class="input-field"
                placeholder=labels.price_placeholder.clone()
                prop:value=move || ctx.form.with(|form| form.price.clone())
                on:input=move |ev| ctx.set_price(event_target_value(&ev))
            />
            <button type="submit" class="add-button">
                {move || {
                    if ctx.form.with(|form| form.is_editing()) {
                        update_label.clone()
                    } else {
                        add_label.clone()
                    }
                }}
            </button>
        </form>
    }
}
