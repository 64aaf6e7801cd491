//! Application State Store
//!
//! `Inventory` is an immutable snapshot of the item list. Every command
//! produces a new snapshot; the reactive `AppStore` holds the current one.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::error::{ItemField, StoreError, StoreResult};
use crate::models::Item;

/// Mutation commands accepted by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append an item
    Add(Item),
    /// Remove the item at a position
    Remove(usize),
    /// Replace the item at a position
    Edit(usize, Item),
}

/// Ordered item list. Insertion order is the only ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    /// Snapshot with `item` appended
    pub fn add(&self, item: Item) -> StoreResult<Self> {
        validate_item(&item)?;
        let mut items = self.items.clone();
        items.push(item);
        Ok(Self { items })
    }

    /// Snapshot without the item at `position`; later items shift down by one
    pub fn remove(&self, position: usize) -> StoreResult<Self> {
        self.check_position(position)?;
        let mut items = self.items.clone();
        items.remove(position);
        Ok(Self { items })
    }

    /// Snapshot with the item at `position` replaced
    pub fn edit(&self, position: usize, item: Item) -> StoreResult<Self> {
        self.check_position(position)?;
        validate_item(&item)?;
        let mut items = self.items.clone();
        items[position] = item;
        Ok(Self { items })
    }

    pub fn try_apply(&self, command: Command) -> StoreResult<Self> {
        match command {
            Command::Add(item) => self.add(item),
            Command::Remove(position) => self.remove(position),
            Command::Edit(position, item) => self.edit(position, item),
        }
    }

    /// Apply a command, keeping the current snapshot if it is rejected
    pub fn apply(&self, command: Command) -> Self {
        log::debug!("[STORE] apply {:?}", command);
        match self.try_apply(command) {
            Ok(next) => next,
            Err(err) => {
                log::warn!("[STORE] command rejected: {}", err);
                self.clone()
            }
        }
    }

    fn check_position(&self, position: usize) -> StoreResult<()> {
        if position < self.items.len() {
            Ok(())
        } else {
            Err(StoreError::OutOfRange {
                position,
                len: self.items.len(),
            })
        }
    }
}

/// Both fields must be non-empty
pub fn validate_item(item: &Item) -> StoreResult<()> {
    if item.name.is_empty() {
        return Err(StoreError::InvalidItem { field: ItemField::Name });
    }
    if item.price.is_empty() {
        return Err(StoreError::InvalidItem { field: ItemField::Price });
    }
    Ok(())
}

// ========================
// Reactive Store
// ========================

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current inventory snapshot
    pub inventory: Inventory,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply a command to the store. Returns false if it was rejected.
pub fn store_dispatch(store: &AppStore, command: Command) -> bool {
    let current = store.inventory().get_untracked();
    log::debug!("[STORE] dispatch {:?}", command);
    match current.try_apply(command) {
        Ok(next) => {
            store.inventory().set(next);
            true
        }
        Err(err) => {
            log::warn!("[STORE] command rejected: {}", err);
            false
        }
    }
}

/// Item at `position` in the current snapshot
pub fn store_item_at(store: &AppStore, position: usize) -> Option<Item> {
    store
        .inventory()
        .with_untracked(|inventory| inventory.get(position).cloned())
}
