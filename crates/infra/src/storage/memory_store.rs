//! Volatile key-value store

use std::collections::HashMap;

use boardcount_core::KeyValueStore;
use boardcount_domain::Result;
use parking_lot::RwLock;

/// Process-local store; contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_the_value() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("roster", "[]").unwrap();
        store.set("roster", "[1]").unwrap();

        assert_eq!(store.get("roster").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.get("other").unwrap(), None);
        assert_eq!(store.len(), 1);
    }
}
