//! Board: the collection of named lists (multi-list build).
//!
//! Item operations run against one list at a time through
//! [`Board::list_mut`]; items added that way get the list id as id prefix.

use serde::{Deserialize, Serialize};

use super::checklist::Checklist;
use super::template::{DEFAULT_LISTS, NEW_LIST_COLOR, NEW_LIST_ICON};
use crate::domain::{position_of, AddItemError, AddListError, ChecklistItem, Entity, ItemTimer, ListId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: ListId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub items: Checklist,
}

impl TodoList {
    pub fn add_item(&mut self, text: &str, timer: Option<ItemTimer>) -> Result<ChecklistItem, AddItemError> {
        self.items.add_prefixed(self.id.as_str(), text, timer)
    }

    pub fn summary(&self) -> ListSummary {
        ListSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            color: self.color.clone(),
            icon: self.icon.clone(),
            active: self.items.active().count(),
            total: self.items.len(),
        }
    }
}

impl Entity for TodoList {
    type Id = ListId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Dashboard row: "{active} of {total} items"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    pub id: ListId,
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub active: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    lists: Vec<TodoList>,
}

impl Board {
    pub fn default_template() -> Self {
        let lists = DEFAULT_LISTS
            .iter()
            .map(|template| TodoList {
                id: ListId::from(template.id),
                name: template.name.to_string(),
                color: Some(template.color.to_string()),
                icon: Some(template.icon.to_string()),
                items: Checklist::from_template(template.id, template.items),
            })
            .collect();
        Self { lists }
    }

    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn list(&self, id: &ListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| &list.id == id)
    }

    pub fn list_mut(&mut self, id: &ListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|list| &list.id == id)
    }

    /// Append a list. Missing icon/color fall back to the new-list defaults.
    pub fn add_list(&mut self, name: &str, icon: Option<&str>, color: Option<&str>) -> Result<ListId, AddListError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AddListError::EmptyName);
        }

        let id = ListId::generate("list", |candidate| self.lists.iter().any(|l| l.id.as_str() == candidate));
        self.lists.push(TodoList {
            id: id.clone(),
            name: name.to_string(),
            color: Some(color.unwrap_or(NEW_LIST_COLOR).to_string()),
            icon: Some(icon.unwrap_or(NEW_LIST_ICON).to_string()),
            items: Checklist::default(),
        });
        Ok(id)
    }

    pub fn delete_list(&mut self, id: &ListId) -> bool {
        match position_of(&self.lists, id) {
            Some(index) => {
                self.lists.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default_template();
    }

    pub fn hydrate_icons(&mut self) -> usize {
        self.lists.iter_mut().map(|list| list.items.hydrate_icons()).sum()
    }

    pub fn summaries(&self) -> Vec<ListSummary> {
        self.lists.iter().map(TodoList::summary).collect()
    }
}
