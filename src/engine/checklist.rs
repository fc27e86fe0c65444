//! Checklist Engine
//!
//! Ordered item collection and its state transitions. Stored order is the
//! order the user arranged; grouping checked items at the bottom is left to
//! the [`Checklist::active`] / [`Checklist::completed`] views.
//!
//! Operations given an id that is not present are no-ops, so a stale UI
//! reference never turns into an error.

use std::collections::HashSet;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::template::DEFAULT_ITEMS;
use crate::domain::{position_of, AddItemError, ChecklistItem, ItemId, ItemTimer, StoredTimer};
use crate::icon::{ensure_icon, icon_for_item};

/// Id prefix for items added to a standalone checklist
pub const CUSTOM_ID_PREFIX: &str = "custom";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
}

/// Checked vs total, for the progress bar. Serializes as
/// `{ checked, total, percent }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub checked: usize,
    pub total: usize,
}

impl Progress {
    /// 0.0 ..= 100.0; an empty list is 0.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.checked as f64 * 100.0 / self.total as f64
    }
}

impl Serialize for Progress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Progress", 3)?;
        state.serialize_field("checked", &self.checked)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("percent", &self.percent())?;
        state.end()
    }
}

impl Checklist {
    pub fn new(items: Vec<ChecklistItem>) -> Self {
        Self { items }
    }

    /// The travel template: `default-0` .. `default-6`, unchecked, icons resolved
    pub fn default_template() -> Self {
        Self::from_template("default", DEFAULT_ITEMS)
    }

    pub(crate) fn from_template(prefix: &str, texts: &[&str]) -> Self {
        let items = texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let mut item = ChecklistItem::new_default(ItemId::new(format!("{}-{}", prefix, index)), *text);
                ensure_icon(&mut item);
                item
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    fn get_mut(&mut self, id: &ItemId) -> Option<&mut ChecklistItem> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.items.iter().any(|item| item.same_text(text))
    }

    pub fn add(&mut self, text: &str) -> Result<ChecklistItem, AddItemError> {
        self.add_with_timer(text, None)
    }

    pub fn add_with_timer(&mut self, text: &str, timer: Option<ItemTimer>) -> Result<ChecklistItem, AddItemError> {
        self.add_prefixed(CUSTOM_ID_PREFIX, text, timer)
    }

    /// Validate and append a new item whose id starts with `prefix`.
    pub(crate) fn add_prefixed(
        &mut self,
        prefix: &str,
        text: &str,
        timer: Option<ItemTimer>,
    ) -> Result<ChecklistItem, AddItemError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AddItemError::Empty);
        }
        if self.contains_text(text) {
            log::debug!("rejected duplicate item {:?}", text);
            return Err(AddItemError::Duplicate(text.to_string()));
        }

        let id = ItemId::generate(prefix, |candidate| self.items.iter().any(|i| i.id.as_str() == candidate));
        let mut item = ChecklistItem::new(id, text);
        item.icon = Some(icon_for_item(text).to_string());
        item.timer = timer.map(StoredTimer::from);

        self.items.push(item.clone());
        Ok(item)
    }

    pub fn toggle(&mut self, id: &ItemId) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Replace the text of an item. Blank or unchanged text is ignored.
    ///
    /// Duplicates are not re-checked here: an edit may produce two items
    /// with the same text, unlike [`Checklist::add`].
    pub fn update_text(&mut self, id: &ItemId, new_text: &str) -> bool {
        let new_text = new_text.trim();
        match self.get_mut(id) {
            Some(item) if !new_text.is_empty() && item.text != new_text => {
                item.text = new_text.to_string();
                true
            }
            _ => false,
        }
    }

    /// Attach, replace or (with `None`) remove an item's timer
    pub fn set_timer(&mut self, id: &ItemId, timer: Option<ItemTimer>) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.timer = timer.map(StoredTimer::from);
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Remove every item in `ids`; returns how many were removed
    pub fn bulk_delete<'a>(&mut self, ids: impl IntoIterator<Item = &'a ItemId>) -> usize {
        let ids: HashSet<&ItemId> = ids.into_iter().collect();
        let before = self.items.len();
        self.items.retain(|item| !ids.contains(&item.id));
        before - self.items.len()
    }

    pub fn delete_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.checked);
        before - self.items.len()
    }

    /// Drag-and-drop move: take `dragged` out, then insert it at the index
    /// `target` had before the removal.
    pub fn reorder(&mut self, dragged: &ItemId, target: &ItemId) -> bool {
        if dragged == target {
            return false;
        }
        let (Some(from), Some(to)) = (position_of(&self.items, dragged), position_of(&self.items, target)) else {
            return false;
        };

        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default_template();
    }

    /// Backfill icons missing from loaded data; returns how many were filled
    pub fn hydrate_icons(&mut self) -> usize {
        self.items.iter_mut().map(ensure_icon).filter(|filled| *filled).count()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            checked: self.items.iter().filter(|item| item.checked).count(),
            total: self.items.len(),
        }
    }

    /// Unchecked items in stored order
    pub fn active(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.items.iter().filter(|item| !item.checked)
    }

    /// Checked items in stored order
    pub fn completed(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.items.iter().filter(|item| item.checked)
    }
}
