//! Checklist Session
//!
//! A checklist store paired with its bulk-delete selection. Keeps the rules
//! that tie the two together: Reset is refused while selecting, and
//! finishing a selection deletes exactly the selected items.

use super::{Store, StoreConfig};
use crate::domain::ItemId;
use crate::engine::{Checklist, Selection};
use crate::repository::KeyValueStore;

pub struct ChecklistSession<S> {
    store: Store<S, Checklist>,
    selection: Selection,
}

impl<S: KeyValueStore> ChecklistSession<S> {
    pub fn open(backend: S, config: StoreConfig) -> Self {
        Self {
            store: Store::open(backend, config),
            selection: Selection::new(),
        }
    }

    pub fn store(&self) -> &Store<S, Checklist> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store<S, Checklist> {
        &mut self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Back to the template, unless selection mode is active
    pub fn reset(&mut self) -> bool {
        if !self.selection.allows_reset() {
            log::debug!("Reset ignored while selecting");
            return false;
        }
        self.store.reset();
        true
    }

    /// Select every item currently in the list
    pub fn select_all(&mut self) {
        let ids = self.store.state().ids();
        self.selection.select_all(&ids);
    }

    pub fn toggle_selected(&mut self, id: &ItemId) -> bool {
        self.selection.toggle(id)
    }

    /// Delete the selected items and leave selection mode
    pub fn delete_selected(&mut self) -> usize {
        if !self.selection.is_selecting() {
            return 0;
        }
        let ids = self.selection.finish();
        self.store.update(|list| list.bulk_delete(&ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use crate::store::CHECKLIST_STORAGE_KEY;

    fn session(backend: &mut MemoryStore) -> ChecklistSession<&mut MemoryStore> {
        ChecklistSession::open(backend, StoreConfig::checklist())
    }

    #[test]
    fn test_reset_refused_while_selecting() {
        let mut backend = MemoryStore::new();
        let mut session = session(&mut backend);
        session.store_mut().update(|list| list.add("Camera")).unwrap();

        session.selection_mut().enter();
        assert!(!session.reset());
        assert_eq!(session.store().state().len(), 8);
        assert!(session.store().backend().contains_key(CHECKLIST_STORAGE_KEY));

        session.selection_mut().cancel();
        assert!(session.reset());
        assert_eq!(session.store().state(), &Checklist::default_template());
        assert!(!session.store().backend().contains_key(CHECKLIST_STORAGE_KEY));
    }

    #[test]
    fn test_delete_selected_persists_and_exits_selection() {
        let mut backend = MemoryStore::new();
        let mut session = session(&mut backend);
        let ids = session.store().state().ids();

        session.selection_mut().enter();
        session.toggle_selected(&ids[0]);
        session.toggle_selected(&ids[3]);
        assert_eq!(session.selection().label(), "2 items selected");

        assert_eq!(session.delete_selected(), 2);
        assert!(!session.selection().is_selecting());
        assert_eq!(session.selection().count(), 0);

        let saved: Checklist =
            serde_json::from_str(session.store().backend().raw(CHECKLIST_STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(saved.len(), 5);
        assert!(saved.get(&ids[0]).is_none());
        assert!(saved.get(&ids[3]).is_none());
    }

    #[test]
    fn test_select_all_deletes_everything() {
        let mut backend = MemoryStore::new();
        let mut session = session(&mut backend);

        session.select_all();
        assert_eq!(session.selection().count(), 0);

        session.selection_mut().enter();
        session.select_all();
        assert_eq!(session.selection().label(), "7 items selected");
        assert_eq!(session.delete_selected(), 7);
        assert!(session.store().state().is_empty());
    }

    #[test]
    fn test_delete_selected_outside_selection_is_noop() {
        let mut backend = MemoryStore::new();
        let mut session = session(&mut backend);
        assert_eq!(session.delete_selected(), 0);
        assert_eq!(session.store().state().len(), 7);
    }
}
