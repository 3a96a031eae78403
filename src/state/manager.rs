use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, info};

use crate::error::{PlannerError, Result};
use crate::estimate::{price_lines, Estimate, PricedLine};
use crate::models::{Cart, Recipe, UserConfig};
use crate::selection::{self, SelectionStore};
use crate::state::catalog::{catalog, find_list, pick_replacement, retailer_products};
use crate::state::{
    load_or_default, save_json, KeyValueStore, RecipeSource, CART_KEY, CONFIG_KEY, SELECTION_KEY,
};

/// Everything one user session works with: the active recipes, the shared
/// ingredient selection, preferences and the cart.
///
/// Count and price are derived on demand from the current state, so a read
/// after any mutation sees that mutation.
pub struct PlannerSession<S: KeyValueStore> {
    store: S,
    source: RecipeSource,
    selection: SelectionStore,
    config: UserConfig,
    cart: Cart,
}

impl<S: KeyValueStore> PlannerSession<S> {
    /// Load the session from `store`.
    ///
    /// Applies a parked recipe replacement, then registers the active
    /// recipes' ingredients in the selection.
    pub fn open(mut store: S) -> Self {
        let mut source = RecipeSource::load(&store);
        if let Some(replaced) = source.apply_pending(&mut store) {
            debug!(replaced, "applied pending replacement");
        }

        let mut selection: SelectionStore = load_or_default(&store, SELECTION_KEY);
        selection.initialize(source.recipes());

        let config = load_or_default(&store, CONFIG_KEY);
        let cart = load_or_default(&store, CART_KEY);

        Self {
            store,
            source,
            selection,
            config,
            cart,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.source.recipes()
    }

    pub fn source(&self) -> &RecipeSource {
        &self.source
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn config(&self) -> &UserConfig {
        &self.config
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Look up an active recipe, failing with `RecipeNotFound`.
    pub fn recipe(&self, id: &str) -> Result<&Recipe> {
        self.source
            .find(id)
            .ok_or_else(|| PlannerError::RecipeNotFound(id.to_string()))
    }

    /// Flip one ingredient. `None` if the id is not part of the session.
    pub fn toggle(&mut self, ingredient_id: &str) -> Option<bool> {
        self.selection.toggle(ingredient_id)
    }

    /// Make `selected` the exact selection over the active recipes.
    pub fn select_only(&mut self, selected: &BTreeSet<String>) {
        self.selection.set_all(self.source.recipes(), false);
        for id in selected {
            self.selection.set(id, true);
        }
    }

    pub fn select_all(&mut self, value: bool) {
        self.selection.set_all(self.source.recipes(), value);
    }

    /// Selected count, recipe count and price for the active recipes.
    pub fn estimate(&self) -> Estimate {
        let count = selection::selected_count(&self.selection, self.recipes());
        Estimate::new(count, self.recipes().len(), &self.config)
    }

    pub fn update_config(&mut self, update: impl FnOnce(&mut UserConfig)) {
        update(&mut self.config);
    }

    /// Replace an active recipe and register the newcomer's ingredients.
    pub fn replace(&mut self, original_id: &str, new_recipe: Recipe) -> bool {
        let replaced = self.source.replace(&mut self.store, original_id, new_recipe);
        if replaced {
            self.selection.initialize(self.source.recipes());
        }
        replaced
    }

    /// Swap a recipe for a random catalog recipe of the same category.
    ///
    /// Returns the recipe swapped in.
    pub fn swap<R: Rng + ?Sized>(&mut self, recipe_id: &str, rng: &mut R) -> Result<Recipe> {
        let category = self.recipe(recipe_id)?.category;
        let replacement = pick_replacement(&catalog(), self.recipes(), category, rng)
            .ok_or_else(|| {
                PlannerError::InvalidInput(format!("no other {} recipes to swap in", category))
            })?;

        self.replace(recipe_id, replacement.clone());
        Ok(replacement)
    }

    /// Add a recipe to the cart with its currently selected ingredients.
    ///
    /// Returns `true` when the recipe was not in the cart yet.
    pub fn add_to_cart(&mut self, recipe_id: &str) -> Result<bool> {
        let recipe = self.recipe(recipe_id)?;
        let ingredient_ids = selection::selected_identities(&self.selection, recipe);
        let servings = recipe.servings;
        let recipe = recipe.clone();

        let added = self.cart.add(&recipe, servings, ingredient_ids);
        info!(recipe_id, added, "recipe saved to cart");
        Ok(added)
    }

    /// Active recipes belonging to the curated list `list_id`.
    pub fn recipes_in_list(&self, list_id: &str) -> Result<Vec<&Recipe>> {
        let list =
            find_list(list_id).ok_or_else(|| PlannerError::ListNotFound(list_id.to_string()))?;
        Ok(list.filter(self.recipes()))
    }

    /// Selected ingredients as shopping lines, matched to retailer products.
    pub fn priced_shopping_list(&self) -> Vec<PricedLine> {
        let lines = selection::shopping_list(&self.selection, self.recipes());
        price_lines(&lines, &retailer_products())
    }

    /// Persist selection, preferences and cart.
    pub fn save(&mut self) -> Result<()> {
        save_json(&mut self.store, SELECTION_KEY, &self.selection)?;
        save_json(&mut self.store, CONFIG_KEY, &self.config)?;
        save_json(&mut self.store, CART_KEY, &self.cart)?;
        Ok(())
    }
}
