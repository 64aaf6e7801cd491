//! Frontend Models
//!
//! Data structures for the inventory list.

use serde::{Deserialize, Serialize};

/// A named item with a price.
///
/// Items carry no identifier; an item is addressed by its position in the
/// [`Inventory`](crate::store::Inventory).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Price as entered in the numeric input
    pub price: String,
}

impl Item {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    /// Display text for a list row, e.g. `Apple - 10 VND`
    pub fn row_text(&self, currency: &str) -> String {
        format!("{} - {} {}", self.name, self.price, currency)
    }
}
