//! Browser Command Wrappers
//!
//! `#[wasm_bindgen]` classes the host page drives. Values cross the
//! boundary as plain JS objects via `serde-wasm-bindgen`; validation
//! failures are thrown as `Error`s carrying the user-facing message.

use chrono::Utc;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::domain::{DomainError, ItemId, ItemTimer, ListId};
use crate::engine::{Board, Checklist};
use crate::icon::icon_for_item;
use crate::repository::BrowserStorage;
use crate::store::{ChecklistSession, Store, StoreConfig};

// ========================
// Helpers
// ========================

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn throw(err: impl Into<DomainError>) -> JsValue {
    let err = err.into();
    log::debug!("Command rejected: {}", err);
    js_sys::Error::new(&err.to_string()).into()
}

fn read_config(config: JsValue, fallback: StoreConfig) -> Result<StoreConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(fallback);
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| throw(DomainError::InvalidInput(e.to_string())))
}

fn open_store<T: crate::store::Snapshot>(config: StoreConfig) -> Result<Store<BrowserStorage, T>, JsValue> {
    let backend = BrowserStorage::open().map_err(throw)?;
    Ok(Store::open(backend, config))
}

fn countdown(minutes: i32, label: &str) -> Result<ItemTimer, JsValue> {
    ItemTimer::countdown(i64::from(minutes), label, Utc::now()).map_err(throw)
}

fn deadline(input: &str, label: &str) -> Result<ItemTimer, JsValue> {
    ItemTimer::deadline_from_input(input, label, Utc::now()).map_err(throw)
}

// ========================
// Entry Points
// ========================

/// Install the panic hook and the in-memory logger. Safe to call twice.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    if rolling_logger::init_memory_logger(rolling_logger::DEFAULT_BUFFER_LINES).is_ok() {
        log::info!("Checklist engine started");
    }
}

#[wasm_bindgen(js_name = recentLogs)]
pub fn recent_logs() -> Result<JsValue, JsValue> {
    to_js(&rolling_logger::recent_lines())
}

#[wasm_bindgen(js_name = iconForItem)]
pub fn icon_for_item_js(text: &str) -> String {
    icon_for_item(text).to_string()
}

// ========================
// Single Checklist
// ========================

#[wasm_bindgen]
pub struct ChecklistApp {
    session: ChecklistSession<BrowserStorage>,
}

#[wasm_bindgen]
impl ChecklistApp {
    /// `config` is optional: `{ storageKey, persistEmpty }`
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ChecklistApp, JsValue> {
        let config = read_config(config, StoreConfig::checklist())?;
        let backend = BrowserStorage::open().map_err(throw)?;
        Ok(Self {
            session: ChecklistSession::open(backend, config),
        })
    }

    pub fn items(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.store().state())
    }

    /// Unchecked items in stored order
    #[wasm_bindgen(js_name = activeItems)]
    pub fn active_items(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.store().state().active().collect::<Vec<_>>())
    }

    #[wasm_bindgen(js_name = completedItems)]
    pub fn completed_items(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.store().state().completed().collect::<Vec<_>>())
    }

    pub fn progress(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.store().state().progress())
    }

    pub fn add(&mut self, text: &str) -> Result<JsValue, JsValue> {
        let item = self.session.store_mut().update(|list| list.add(text)).map_err(throw)?;
        to_js(&item)
    }

    #[wasm_bindgen(js_name = addWithCountdown)]
    pub fn add_with_countdown(&mut self, text: &str, minutes: i32, label: &str) -> Result<JsValue, JsValue> {
        let timer = countdown(minutes, label)?;
        let item = self
            .session
            .store_mut()
            .update(|list| list.add_with_timer(text, Some(timer)))
            .map_err(throw)?;
        to_js(&item)
    }

    #[wasm_bindgen(js_name = addWithDeadline)]
    pub fn add_with_deadline(&mut self, text: &str, at: &str, label: &str) -> Result<JsValue, JsValue> {
        let timer = deadline(at, label)?;
        let item = self
            .session
            .store_mut()
            .update(|list| list.add_with_timer(text, Some(timer)))
            .map_err(throw)?;
        to_js(&item)
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        self.session.store_mut().update(|list| list.toggle(&ItemId::from(id)))
    }

    #[wasm_bindgen(js_name = updateText)]
    pub fn update_text(&mut self, id: &str, text: &str) -> bool {
        self.session.store_mut().update(|list| list.update_text(&ItemId::from(id), text))
    }

    #[wasm_bindgen(js_name = setCountdown)]
    pub fn set_countdown(&mut self, id: &str, minutes: i32, label: &str) -> Result<bool, JsValue> {
        let timer = countdown(minutes, label)?;
        Ok(self.session.store_mut().update(|list| list.set_timer(&ItemId::from(id), Some(timer))))
    }

    #[wasm_bindgen(js_name = setDeadline)]
    pub fn set_deadline(&mut self, id: &str, at: &str, label: &str) -> Result<bool, JsValue> {
        let timer = deadline(at, label)?;
        Ok(self.session.store_mut().update(|list| list.set_timer(&ItemId::from(id), Some(timer))))
    }

    #[wasm_bindgen(js_name = clearTimer)]
    pub fn clear_timer(&mut self, id: &str) -> bool {
        self.session.store_mut().update(|list| list.set_timer(&ItemId::from(id), None))
    }

    /// "2d 3h 5m", "Expired", or undefined when the item has no timer
    #[wasm_bindgen(js_name = timerStatus)]
    pub fn timer_status(&self, id: &str) -> Option<String> {
        let item = self.session.store().state().get(&ItemId::from(id))?;
        let status = item.timer.as_ref()?.status(Utc::now())?;
        Some(status.to_string())
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.session.store_mut().update(|list| list.delete(&ItemId::from(id)))
    }

    #[wasm_bindgen(js_name = deleteCompleted)]
    pub fn delete_completed(&mut self) -> usize {
        self.session.store_mut().update(|list| list.delete_completed())
    }

    pub fn reorder(&mut self, dragged: &str, target: &str) -> bool {
        self.session
            .store_mut()
            .update(|list| list.reorder(&ItemId::from(dragged), &ItemId::from(target)))
    }

    /// Returns false (and does nothing) while selecting
    pub fn reset(&mut self) -> bool {
        self.session.reset()
    }

    // Selection mode

    #[wasm_bindgen(js_name = enterSelection)]
    pub fn enter_selection(&mut self) {
        self.session.selection_mut().enter();
    }

    #[wasm_bindgen(js_name = cancelSelection)]
    pub fn cancel_selection(&mut self) {
        self.session.selection_mut().cancel();
    }

    #[wasm_bindgen(js_name = isSelecting)]
    pub fn is_selecting(&self) -> bool {
        self.session.selection().is_selecting()
    }

    #[wasm_bindgen(js_name = toggleSelected)]
    pub fn toggle_selected(&mut self, id: &str) -> bool {
        self.session.toggle_selected(&ItemId::from(id))
    }

    #[wasm_bindgen(js_name = isSelected)]
    pub fn is_selected(&self, id: &str) -> bool {
        self.session.selection().contains(&ItemId::from(id))
    }

    #[wasm_bindgen(js_name = selectAll)]
    pub fn select_all(&mut self) {
        self.session.select_all();
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.session.selection_mut().clear();
    }

    #[wasm_bindgen(js_name = selectionLabel)]
    pub fn selection_label(&self) -> String {
        self.session.selection().label()
    }

    /// Delete the selected items and leave selection mode
    #[wasm_bindgen(js_name = deleteSelected)]
    pub fn delete_selected(&mut self) -> usize {
        self.session.delete_selected()
    }
}

// ========================
// Board of Lists
// ========================

#[wasm_bindgen]
pub struct BoardApp {
    store: Store<BrowserStorage, Board>,
}

#[wasm_bindgen]
impl BoardApp {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<BoardApp, JsValue> {
        let config = read_config(config, StoreConfig::board())?;
        Ok(Self {
            store: open_store(config)?,
        })
    }

    /// Dashboard rows with active/total counts
    pub fn lists(&self) -> Result<JsValue, JsValue> {
        to_js(&self.store.state().summaries())
    }

    pub fn list(&self, id: &str) -> Result<JsValue, JsValue> {
        match self.store.state().list(&ListId::from(id)) {
            Some(list) => to_js(list),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Returns the new list id
    #[wasm_bindgen(js_name = addList)]
    pub fn add_list(&mut self, name: &str, icon: Option<String>, color: Option<String>) -> Result<String, JsValue> {
        let id = self
            .store
            .update(|board| board.add_list(name, icon.as_deref(), color.as_deref()))
            .map_err(throw)?;
        Ok(id.to_string())
    }

    #[wasm_bindgen(js_name = deleteList)]
    pub fn delete_list(&mut self, id: &str) -> bool {
        self.store.update(|board| board.delete_list(&ListId::from(id)))
    }

    #[wasm_bindgen(js_name = addItem)]
    pub fn add_item(&mut self, list_id: &str, text: &str) -> Result<JsValue, JsValue> {
        let list_id = ListId::from(list_id);
        let item = self
            .store
            .update(|board| {
                let list = board
                    .list_mut(&list_id)
                    .ok_or_else(|| DomainError::NotFound(list_id.to_string()))?;
                list.add_item(text, None).map_err(DomainError::from)
            })
            .map_err(throw)?;
        to_js(&item)
    }

    #[wasm_bindgen(js_name = toggleItem)]
    pub fn toggle_item(&mut self, list_id: &str, item_id: &str) -> bool {
        self.with_list(list_id, |list| list.toggle(&ItemId::from(item_id)))
    }

    #[wasm_bindgen(js_name = updateItemText)]
    pub fn update_item_text(&mut self, list_id: &str, item_id: &str, text: &str) -> bool {
        self.with_list(list_id, |list| list.update_text(&ItemId::from(item_id), text))
    }

    #[wasm_bindgen(js_name = deleteItem)]
    pub fn delete_item(&mut self, list_id: &str, item_id: &str) -> bool {
        self.with_list(list_id, |list| list.delete(&ItemId::from(item_id)))
    }

    #[wasm_bindgen(js_name = deleteCompleted)]
    pub fn delete_completed(&mut self, list_id: &str) -> usize {
        self.store.update(|board| {
            board
                .list_mut(&ListId::from(list_id))
                .map_or(0, |list| list.items.delete_completed())
        })
    }

    #[wasm_bindgen(js_name = reorderItem)]
    pub fn reorder_item(&mut self, list_id: &str, dragged: &str, target: &str) -> bool {
        self.with_list(list_id, |list| list.reorder(&ItemId::from(dragged), &ItemId::from(target)))
    }

    pub fn reset(&mut self) {
        self.store.reset();
    }
}

impl BoardApp {
    /// Run `op` on one list's items; an unknown list is a no-op.
    fn with_list(&mut self, list_id: &str, op: impl FnOnce(&mut Checklist) -> bool) -> bool {
        self.store.update(|board| {
            board
                .list_mut(&ListId::from(list_id))
                .is_some_and(|list| op(&mut list.items))
        })
    }
}
