use crate::constants::{CELEBRATED_KEY, COMPLETE_PERCENT, THEME_KEY};
use std::collections::HashMap;

/// Minimal string key-value store for persisted page flags.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory store; used off-browser and when `localStorage` is unavailable.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

// ---------------- Theme ----------------

pub const LIGHT: &str = "light";
pub const DARK: &str = "dark";

/// Stored theme, defaulting to light. Unknown stored values are kept as-is.
pub fn load_theme(store: &dyn KvStore) -> String {
    store.get(THEME_KEY).unwrap_or_else(|| LIGHT.to_string())
}

/// Light becomes dark; anything else becomes light.
#[inline]
pub fn next_theme(current: &str) -> &'static str {
    if current == LIGHT {
        DARK
    } else {
        LIGHT
    }
}

/// Flip `current`, persist and return the new theme.
pub fn toggle_theme(store: &mut dyn KvStore, current: &str) -> &'static str {
    let next = next_theme(current);
    store.set(THEME_KEY, next);
    next
}

// ---------------- Celebration gate ----------------

/// Celebrate only a fully complete profile, and only once per store.
pub fn should_celebrate(store: &dyn KvStore, completeness: i64) -> bool {
    completeness == COMPLETE_PERCENT && !store.has(CELEBRATED_KEY)
}

pub fn mark_celebrated(store: &mut dyn KvStore) {
    store.set(CELEBRATED_KEY, "true");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_follows_set() {
        let mut s = MemoryStore::new();
        assert!(!s.has("k"));
        s.set("k", "v");
        assert!(s.has("k"));
        assert_eq!(s.get("k").as_deref(), Some("v"));
    }
}
