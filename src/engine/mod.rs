//! List State Engine
//!
//! Synchronous state transitions over checklists, boards of lists and the
//! bulk-delete selection. Nothing here touches storage.

mod board;
mod checklist;
mod selection;
mod template;

pub use board::{Board, ListSummary, TodoList};
pub use checklist::{Checklist, Progress, CUSTOM_ID_PREFIX};
pub use selection::{Selection, SelectionMode};
pub use template::{ListTemplate, DEFAULT_ITEMS, DEFAULT_LISTS, NEW_LIST_COLOR, NEW_LIST_ICON};
