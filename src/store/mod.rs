//! Application State Store
//!
//! Owns the current snapshot (a [`Checklist`] or a [`Board`]) together with
//! the repository it is persisted to. Every mutation goes through
//! [`Store::update`], which writes the snapshot back afterwards.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::engine::{Board, Checklist};
use crate::repository::{KeyValueStore, LoadOutcome, SnapshotRepository};

mod session;


pub use session::ChecklistSession;

pub const CHECKLIST_STORAGE_KEY: &str = "travel-checklist-items";
pub const BOARD_STORAGE_KEY: &str = "todo-lists";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub storage_key: String,
    /// Also write empty collections. Off by default, so deleting the last
    /// item leaves the previous snapshot in storage.
    #[serde(default)]
    pub persist_empty: bool,
}

impl StoreConfig {
    pub fn checklist() -> Self {
        Self {
            storage_key: CHECKLIST_STORAGE_KEY.to_string(),
            persist_empty: false,
        }
    }

    pub fn board() -> Self {
        Self {
            storage_key: BOARD_STORAGE_KEY.to_string(),
            persist_empty: false,
        }
    }
}

/// A state value that is persisted as one unit
pub trait Snapshot: Serialize + DeserializeOwned {
    /// State used on first run, after corruption and on reset
    fn default_template() -> Self;

    /// Fill in fields older snapshots lack. Returns how many records changed.
    fn hydrate(&mut self) -> usize;

    fn is_empty(&self) -> bool;
}

impl Snapshot for Checklist {
    fn default_template() -> Self {
        Checklist::default_template()
    }

    fn hydrate(&mut self) -> usize {
        self.hydrate_icons()
    }

    fn is_empty(&self) -> bool {
        Checklist::is_empty(self)
    }
}

impl Snapshot for Board {
    fn default_template() -> Self {
        Board::default_template()
    }

    fn hydrate(&mut self) -> usize {
        self.hydrate_icons()
    }

    fn is_empty(&self) -> bool {
        Board::is_empty(self)
    }
}

pub struct Store<S, T> {
    repo: SnapshotRepository<S>,
    state: T,
    config: StoreConfig,
}

impl<S: KeyValueStore, T: Snapshot> Store<S, T> {
    /// Load the saved snapshot, or start from the template when there is
    /// none. Nothing is written until the first mutation.
    pub fn open(backend: S, config: StoreConfig) -> Self {
        let mut repo = SnapshotRepository::new(backend, config.storage_key.clone());
        let state = match repo.load::<T>() {
            LoadOutcome::Loaded(mut state) => {
                let filled = state.hydrate();
                if filled > 0 {
                    log::debug!("Filled in {} missing icons", filled);
                }
                state
            }
            LoadOutcome::Missing => {
                log::info!("No saved data under {}, using defaults", config.storage_key);
                T::default_template()
            }
            LoadOutcome::Corrupt => T::default_template(),
        };
        Self { repo, state, config }
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn backend(&self) -> &S {
        self.repo.backend()
    }

    /// Apply one operation and persist the result
    pub fn update<R>(&mut self, op: impl FnOnce(&mut T) -> R) -> R {
        let result = op(&mut self.state);
        self.persist();
        result
    }

    /// Drop the saved snapshot and go back to the template. The key stays
    /// absent until the next mutation.
    pub fn reset(&mut self) {
        log::info!("Resetting {} to defaults", self.config.storage_key);
        // a failed clear is already logged; the in-memory reset still applies
        let _ = self.repo.clear();
        self.state = T::default_template();
    }

    fn persist(&mut self) {
        if self.state.is_empty() && !self.config.persist_empty {
            return;
        }
        // failures are logged by the repository; the state stays usable
        let _ = self.repo.save(&self.state);
    }
}
