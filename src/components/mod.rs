//! UI Components
//!
//! Leptos components for the inventory screen.

mod item_entry_form;
mod item_list;
mod pagination;
mod search_bar;

pub use item_entry_form::ItemEntryForm;
pub use item_list::{ItemList, ItemRow};
pub use pagination::Pagination;
pub use search_bar::SearchBar;
