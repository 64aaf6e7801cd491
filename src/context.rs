//! Application Context
//!
//! View parameters and form state shared via Leptos Context API.

use leptos::prelude::*;

use crate::config::{Labels, UiConfig};
use crate::form::ItemForm;
use crate::models::Item;
use crate::store::Command;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Search text - read
    pub search: ReadSignal<String>,
    /// Search text - write
    set_search: WriteSignal<String>,
    /// Requested page (1-based) - read
    pub page: ReadSignal<usize>,
    /// Requested page (1-based) - write
    set_page: WriteSignal<usize>,
    /// Name/price fields and edit mode - read
    pub form: ReadSignal<ItemForm>,
    /// Name/price fields and edit mode - write
    set_form: WriteSignal<ItemForm>,
    config: StoredValue<UiConfig>,
}

impl AppContext {
    pub fn new(config: UiConfig) -> Self {
        let (search, set_search) = signal(String::new());
        let (page, set_page) = signal(1usize);
        let (form, set_form) = signal(ItemForm::new());
        Self {
            search,
            set_search,
            page,
            set_page,
            form,
            set_form,
            config: StoredValue::new(config),
        }
    }

    pub fn page_size(&self) -> usize {
        self.config.with_value(|config| config.page_size())
    }

    pub fn labels(&self) -> Labels {
        self.config.with_value(|config| config.labels.clone())
    }

    pub fn set_search(&self, text: String) {
        self.set_search.set(text);
    }

    pub fn go_to_page(&self, page: usize) {
        self.set_page.set(page);
    }

    pub fn set_name(&self, name: String) {
        self.set_form.update(|form| form.name = name);
    }

    pub fn set_price(&self, price: String) {
        self.set_form.update(|form| form.price = price);
    }

    /// Load an item into the form for editing
    pub fn begin_edit(&self, position: usize, item: &Item) {
        self.set_form.update(|form| form.begin_edit(position, item));
    }

    /// Take the form contents as a command, if both fields are filled
    pub fn submit_form(&self) -> Option<Command> {
        let mut command = None;
        self.set_form.update(|form| command = form.submit());
        if command.is_none() {
            log::debug!("[FORM] submit skipped, empty field");
        }
        command
    }

    pub fn item_removed(&self, position: usize) {
        self.set_form.update(|form| form.item_removed(position));
    }
}
