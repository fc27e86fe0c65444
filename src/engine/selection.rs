//! Bulk-delete selection mode.
//!
//! `Normal ⇄ Selecting`. Entering or cancelling clears the selection;
//! [`Selection::finish`] hands the selected ids to the caller for deletion
//! and returns to `Normal`.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Normal,
    Selecting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    mode: SelectionMode,
    selected: BTreeSet<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn is_selecting(&self) -> bool {
        self.mode == SelectionMode::Selecting
    }

    pub fn enter(&mut self) {
        self.selected.clear();
        self.mode = SelectionMode::Selecting;
    }

    pub fn cancel(&mut self) {
        self.selected.clear();
        self.mode = SelectionMode::Normal;
    }

    /// Add or remove `id`. Ignored outside selection mode.
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        if !self.is_selecting() {
            return false;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
        true
    }

    /// Replace the selection with every visible id
    pub fn select_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a ItemId>) {
        if !self.is_selecting() {
            return;
        }
        self.selected = visible.into_iter().cloned().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.selected.contains(id)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Leave selection mode, returning the ids to delete
    pub fn finish(&mut self) -> Vec<ItemId> {
        self.mode = SelectionMode::Normal;
        std::mem::take(&mut self.selected).into_iter().collect()
    }

    /// Edit Mode is unavailable while selecting
    pub fn allows_edit_mode(&self) -> bool {
        !self.is_selecting()
    }

    /// Reset is unavailable while selecting
    pub fn allows_reset(&self) -> bool {
        !self.is_selecting()
    }

    pub fn label(&self) -> String {
        match self.count() {
            1 => "1 item selected".to_string(),
            n => format!("{} items selected", n),
        }
    }
}
