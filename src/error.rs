//! Store Errors
//!
//! Reasons a command can be rejected by the inventory store.

use thiserror::Error;

/// Common result type for store commands
pub type StoreResult<T> = Result<T, StoreError>;

/// Item field checked before an add or edit is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Price,
}

impl std::fmt::Display for ItemField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemField::Name => write!(f, "name"),
            ItemField::Price => write!(f, "price"),
        }
    }
}

/// A rejected store command. The store is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A required item field was empty.
    #[error("Invalid item: {field} is empty")]
    InvalidItem { field: ItemField },

    /// Remove or edit addressed a position past the end of the list.
    ///
    /// Happens when a row action refers to a stale position.
    #[error("Position {position} out of range (len {len})")]
    OutOfRange { position: usize, len: usize },
}
