use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::Recipe;

/// A recipe saved to the cart together with the ingredients the user kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub recipe_id: String,
    pub title: String,
    pub servings: u32,
    pub ingredient_ids: BTreeSet<String>,
}

/// Recipes the user has added for later shopping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub entries: Vec<CartEntry>,
}

impl Cart {
    /// Add a recipe, replacing any earlier entry for the same recipe.
    ///
    /// Returns `true` if the recipe was not in the cart before.
    pub fn add(&mut self, recipe: &Recipe, servings: u32, ingredient_ids: BTreeSet<String>) -> bool {
        let entry = CartEntry {
            recipe_id: recipe.id.clone(),
            title: recipe.title.clone(),
            servings,
            ingredient_ids,
        };

        match self.entries.iter_mut().find(|e| e.recipe_id == recipe.id) {
            Some(existing) => {
                *existing = entry;
                false
            }
            None => {
                self.entries.push(entry);
                true
            }
        }
    }

    pub fn contains(&self, recipe_id: &str) -> bool {
        self.entries.iter().any(|e| e.recipe_id == recipe_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
