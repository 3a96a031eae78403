use std::collections::HashMap;

use crate::error::Result;

/// Cache key of the generated recipe list.
pub const RECIPES_KEY: &str = "aiGeneratedRecipes";

/// Key of a replacement waiting to be applied on the next load.
pub const REPLACE_KEY: &str = "replaceRecipe";

pub const CONFIG_KEY: &str = "userConfig";
pub const SELECTION_KEY: &str = "selectedIngredients";
pub const CART_KEY: &str = "cart";

/// String key-value storage, in the manner of browser local storage.
///
/// Reads are served from memory; a write either fully lands or returns an
/// error.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Remove a key, returning its previous value.
    fn remove(&mut self, key: &str) -> Result<Option<String>>;
}

/// Non-persistent store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.remove(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basic_operations() {
        let mut store = MemoryStore::new().with_entry("a", "1");
        assert_eq!(store.get("a").as_deref(), Some("1"));

        store.set("a", "2".to_string()).unwrap();
        assert_eq!(store.get("a").as_deref(), Some("2"));

        assert_eq!(store.remove("a").unwrap().as_deref(), Some("2"));
        assert!(store.get("a").is_none());
        assert!(store.remove("a").unwrap().is_none());
    }
}
