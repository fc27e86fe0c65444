//! Domain Layer - Core Entity Trait
//!
//! Every persisted record (items, lists) has a stable identifier. The
//! validation errors reported back to the user also live here.

use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Index of the entity with `id`, if present.
pub fn position_of<E: Entity>(entities: &[E], id: &E::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

/// Why an item could not be added. The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddItemError {
    #[error("Please enter an item name")]
    Empty,
    #[error("This item already exists in your checklist")]
    Duplicate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddListError {
    #[error("Please enter a list name")]
    EmptyName,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("Please enter a timer description")]
    EmptyLabel,
    #[error("Countdown must be between 1 and {max} minutes (got {0})", max = super::timer::MAX_COUNTDOWN_MINUTES)]
    CountdownOutOfRange(i64),
    #[error("Unrecognized deadline: {0}")]
    InvalidDeadline(String),
}

/// Everything a command can fail with, as seen by the host page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error(transparent)]
    AddItem(#[from] AddItemError),
    #[error(transparent)]
    AddList(#[from] AddListError),
    #[error(transparent)]
    Timer(#[from] TimerError),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
