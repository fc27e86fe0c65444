//! `window.localStorage` backend

use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::traits::{KeyValueStore, StorageError, StorageResult};

pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    /// Attach to the page's localStorage. Fails in private mode or outside
    /// a window context.
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: describe(e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: describe(e),
        })
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.storage.remove_item(key).map_err(|e| StorageError::Remove {
            key: key.to_string(),
            reason: describe(e),
        })
    }
}
