use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Recipe;

/// Shared selection state keyed by ingredient id.
///
/// One entry per id, no matter how many recipes use it, so a toggle is seen
/// by every recipe that lists the ingredient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionStore {
    selected: HashMap<String, bool>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every ingredient of `recipes` not seen before.
    ///
    /// New entries take the ingredient's own `selected` default; the first
    /// occurrence of an id wins. Existing entries are left as the user set them.
    /// Returns the number of entries added.
    pub fn initialize(&mut self, recipes: &[Recipe]) -> usize {
        let mut added = 0;
        for ingredient in recipes.iter().flat_map(|r| r.ingredients.iter()) {
            if !self.selected.contains_key(&ingredient.id) {
                self.selected.insert(ingredient.id.clone(), ingredient.selected);
                added += 1;
            }
        }
        if added > 0 {
            debug!(added, total = self.selected.len(), "registered new ingredients");
        }
        added
    }

    /// Flip the selection of an ingredient.
    ///
    /// Returns the new state, or `None` when the id was never initialized
    /// (nothing changes in that case).
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let entry = self.selected.get_mut(id)?;
        *entry = !*entry;
        Some(*entry)
    }

    /// Unknown ids read as not selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.get(id).copied().unwrap_or(false)
    }

    /// Set a known ingredient to `value`. Unknown ids are ignored.
    pub fn set(&mut self, id: &str, value: bool) -> bool {
        match self.selected.get_mut(id) {
            Some(entry) => {
                *entry = value;
                true
            }
            None => false,
        }
    }

    /// Select or clear every known ingredient of `recipes`.
    pub fn set_all(&mut self, recipes: &[Recipe], value: bool) {
        for id in recipes.iter().flat_map(|r| r.ingredient_ids()) {
            self.set(id, value);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
