//! Checklist Item Entity
//!
//! One entry of a checklist. The JSON shape matches what the browser build
//! keeps in local storage (`isDefault`, `icon`, `timer` in camelCase).

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::id::ItemId;
use super::timer::StoredTimer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Unique within the owning list, never reused
    pub id: ItemId,
    /// Trimmed, non-empty label
    pub text: String,
    /// Completion status
    #[serde(default)]
    pub checked: bool,
    /// Came from the built-in template
    #[serde(default)]
    pub is_default: bool,
    /// Display emoji. Older builds stored it as `emoji`.
    #[serde(default, alias = "emoji", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Carried through as stored; see [`StoredTimer`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer: Option<StoredTimer>,
}

impl ChecklistItem {
    /// Create an unchecked, user-added item without an icon
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            checked: false,
            is_default: false,
            icon: None,
            timer: None,
        }
    }

    /// Create a template item
    pub fn new_default(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            is_default: true,
            ..Self::new(id, text)
        }
    }

    /// Case-insensitive comparison on trimmed text, as used for duplicate checks
    pub fn same_text(&self, other: &str) -> bool {
        self.text.trim().to_lowercase() == other.trim().to_lowercase()
    }
}

impl Entity for ChecklistItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = ChecklistItem::new(ItemId::from("custom-1"), "Camera");
        assert_eq!(item.id().as_str(), "custom-1");
        assert!(!item.checked);
        assert!(!item.is_default);
        assert!(item.icon.is_none());

        let template = ChecklistItem::new_default(ItemId::from("default-0"), "Passport");
        assert!(template.is_default);
    }

    #[test]
    fn test_same_text_ignores_case_and_whitespace() {
        let item = ChecklistItem::new(ItemId::from("a"), "Phone charger");
        assert!(item.same_text("  PHONE CHARGER "));
        assert!(!item.same_text("Phone"));
    }

    #[test]
    fn test_reads_legacy_emoji_field() {
        let json = r#"{"id":"travel-1","text":"Passport","checked":false,"isDefault":true,"emoji":"📘"}"#;
        let item: ChecklistItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.icon.as_deref(), Some("📘"));
        assert!(item.timer.is_none());
    }

    #[test]
    fn test_unreadable_timer_does_not_reject_item() {
        let json = r#"{"id":"custom-1","text":"Camera","checked":true,"timer":{"type":"countdown","value":30,"label":"x","createdAt":1714564800000}}"#;
        let item: ChecklistItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.text, "Camera");
        assert!(item.checked);
        assert!(matches!(item.timer, Some(StoredTimer::Raw(_))));

        let back: serde_json::Value = serde_json::to_value(&item).unwrap();
        assert_eq!(back["timer"]["createdAt"], 1714564800000u64);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let item: ChecklistItem = serde_json::from_str(r#"{"id":"x","text":"Snacks","checked":true}"#).unwrap();
        assert!(item.checked);
        assert!(!item.is_default);
        assert!(item.icon.is_none());

        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"x","text":"Snacks","checked":true,"isDefault":false}"#);
    }
}
