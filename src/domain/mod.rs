//! Domain Layer
//!
//! Entities and the errors shared by the engine, the store and the commands.

mod entity;
mod id;
mod item;
mod timer;

pub use entity::{position_of, AddItemError, AddListError, DomainError, Entity, TimerError};
pub use id::{ItemId, ListId};
pub use item::ChecklistItem;
pub use timer::{ItemTimer, StoredTimer, TimerKind, TimerStatus, TimerValue, MAX_COUNTDOWN_MINUTES};
