//! Repository Layer
//!
//! Storage abstractions and implementations.

mod memory;
mod snapshot;
mod traits;

#[cfg(target_arch = "wasm32")]
mod browser;

pub use memory::MemoryStore;
pub use snapshot::{LoadOutcome, SnapshotRepository};
pub use traits::{KeyValueStore, StorageError, StorageResult};

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;
