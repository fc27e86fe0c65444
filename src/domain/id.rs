//! Opaque string identifiers for items and lists.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// `<prefix>-<unix-millis>-<seq>`, re-drawn until `taken` rejects it.
fn fresh_id(prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let millis = chrono::Utc::now().timestamp_millis();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let candidate = format!("{}-{}-{}", prefix, millis, seq);
        if !taken(&candidate) {
            return candidate;
        }
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Generate an id with `prefix` that `taken` does not already claim.
            pub fn generate(prefix: &str, taken: impl Fn(&str) -> bool) -> Self {
                Self(fresh_id(prefix, taken))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a checklist item, unique within its list
    ItemId
);

string_id!(
    /// Identifier of a named list
    ListId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_prefix() {
        let id = ItemId::generate("custom", |_| false);
        assert!(id.as_str().starts_with("custom-"));
        assert_eq!(id.as_str().split('-').count(), 3);
    }

    #[test]
    fn test_generate_skips_taken_ids() {
        let first = ItemId::generate("custom", |_| false);
        let second = ItemId::generate("custom", |candidate| candidate == first.as_str());
        assert_ne!(first, second);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ListId::from("shopping");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"shopping\"");
        assert_eq!(id.to_string(), "shopping");
    }
}
