//! Item Form State
//!
//! The name/price fields and the add/update toggle behind them.
//!
//! The form is either `Idle` (submitting adds a new item) or
//! `Editing(position)` (submitting replaces the item at `position`).

use crate::models::Item;
use crate::store::Command;

/// Whether the form adds a new item or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    /// Position of the item being edited
    Editing(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemForm {
    pub name: String,
    pub price: String,
    mode: EditMode,
}

impl ItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing(_))
    }

    /// Switch to editing `position`, pre-filling the fields from `item`
    pub fn begin_edit(&mut self, position: usize, item: &Item) {
        log::debug!("[FORM] editing position {}", position);
        self.name = item.name.clone();
        self.price = item.price.clone();
        self.mode = EditMode::Editing(position);
    }

    /// Turn the fields into a command and reset the form.
    ///
    /// Returns `None` and leaves the form untouched if a field is empty.
    pub fn submit(&mut self) -> Option<Command> {
        if self.name.is_empty() || self.price.is_empty() {
            return None;
        }
        let item = Item::new(self.name.clone(), self.price.clone());
        let command = match self.mode {
            EditMode::Idle => Command::Add(item),
            EditMode::Editing(position) => Command::Edit(position, item),
        };
        self.reset();
        Some(command)
    }

    /// Keep the edit target pointing at the same item after a removal
    pub fn item_removed(&mut self, position: usize) {
        if let EditMode::Editing(target) = self.mode {
            if target == position {
                self.reset();
            } else if target > position {
                self.mode = EditMode::Editing(target - 1);
            }
        }
    }

    fn reset(&mut self) {
        self.name.clear();
        self.price.clear();
        self.mode = EditMode::Idle;
    }
}
