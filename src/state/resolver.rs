use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::RecipeSourceError;
use crate::models::Recipe;
use crate::state::catalog::example_recipes;
use crate::state::{KeyValueStore, RECIPES_KEY, REPLACE_KEY};

/// Where the active recipe set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeOrigin {
    /// Generated recipes read from the store.
    Cached,
    /// The built-in example set.
    Examples,
}

/// Request to swap one recipe for another, parked in the store until the
/// next load picks it up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceInstruction {
    pub original_id: String,
    pub new_recipe: Recipe,
}

impl ReplaceInstruction {
    pub fn new(original_id: &str, new_recipe: Recipe) -> Self {
        Self {
            original_id: original_id.to_string(),
            new_recipe,
        }
    }

    /// Park this instruction in the store.
    pub fn stage<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> crate::Result<()> {
        crate::state::save_json(store, REPLACE_KEY, self)
    }
}

/// Read the cached recipe list.
///
/// An empty list counts as unusable, same as a missing or malformed one.
pub fn load_cached<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<Recipe>, RecipeSourceError> {
    let raw = store.get(RECIPES_KEY).ok_or(RecipeSourceError::Missing)?;
    debug!(bytes = raw.len(), "found cached recipes");

    let recipes: Vec<Recipe> = serde_json::from_str(&raw)?;
    if recipes.is_empty() {
        return Err(RecipeSourceError::Empty);
    }
    Ok(recipes)
}

/// The active recipe set: cached recipes when usable, examples otherwise.
#[derive(Debug, Clone)]
pub struct RecipeSource {
    recipes: Vec<Recipe>,
    origin: RecipeOrigin,
}

impl RecipeSource {
    /// Resolve the active set. Never fails; problems fall back to examples.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match load_cached(store) {
            Ok(recipes) => {
                info!(count = recipes.len(), "using cached recipes");
                Self {
                    recipes,
                    origin: RecipeOrigin::Cached,
                }
            }
            Err(e) => {
                match &e {
                    RecipeSourceError::Malformed(_) => {
                        warn!(error = %e, "cached recipes unreadable, using examples")
                    }
                    _ => debug!(reason = %e, "using example recipes"),
                }
                Self::examples()
            }
        }
    }

    pub fn examples() -> Self {
        Self {
            recipes: example_recipes(),
            origin: RecipeOrigin::Examples,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn origin(&self) -> RecipeOrigin {
        self.origin
    }

    pub fn is_cached(&self) -> bool {
        self.origin == RecipeOrigin::Cached
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Replace the recipe with `original_id` in place and persist the set.
    ///
    /// Returns `false` without touching anything if no recipe matches. A
    /// failed write is logged; the in-memory set keeps the replacement.
    pub fn replace<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        original_id: &str,
        new_recipe: Recipe,
    ) -> bool {
        let Some(slot) = self.recipes.iter_mut().find(|r| r.id == original_id) else {
            debug!(original_id, "no recipe to replace");
            return false;
        };

        info!(original_id, new_id = %new_recipe.id, "replacing recipe");
        *slot = new_recipe;
        self.origin = RecipeOrigin::Cached;

        if let Err(e) = crate::state::save_json(store, RECIPES_KEY, &self.recipes) {
            error!(error = %e, "failed to persist replaced recipe");
        }
        true
    }

    /// Apply a parked [`ReplaceInstruction`], then clear it.
    ///
    /// Returns `None` when nothing was parked, otherwise whether a recipe was
    /// replaced. The instruction is removed either way so it runs once.
    pub fn apply_pending<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Option<bool> {
        let raw = store.get(REPLACE_KEY)?;

        if let Err(e) = store.remove(REPLACE_KEY) {
            error!(error = %e, "failed to clear replacement instruction");
        }

        match serde_json::from_str::<ReplaceInstruction>(&raw) {
            Ok(instruction) => {
                Some(self.replace(store, &instruction.original_id, instruction.new_recipe))
            }
            Err(e) => {
                warn!(error = %e, "dropping malformed replacement instruction");
                Some(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Ingredient};
    use crate::state::MemoryStore;

    fn generated(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Generated {}", id),
            image: String::new(),
            calories: 300.0,
            time: 20,
            category: Category::Dinner,
            servings: 2,
            macros: Default::default(),
            ingredients: vec![Ingredient::new(&format!("{}-ing", id), "Arroz", "200", "g")],
            instructions: vec!["Cocer".to_string()],
            nutrition: None,
        }
    }

    fn cached_store(recipes: &[Recipe]) -> MemoryStore {
        let json = serde_json::to_string(recipes).unwrap();
        MemoryStore::new().with_entry(RECIPES_KEY, &json)
    }

    #[test]
    fn test_load_cached_errors() {
        assert!(matches!(load_cached(&MemoryStore::new()), Err(RecipeSourceError::Missing)));
        assert!(matches!(
            load_cached(&MemoryStore::new().with_entry(RECIPES_KEY, "[]")),
            Err(RecipeSourceError::Empty)
        ));
        assert!(matches!(
            load_cached(&MemoryStore::new().with_entry(RECIPES_KEY, "{\"broken\"")),
            Err(RecipeSourceError::Malformed(_))
        ));
    }

    #[test]
    fn test_load_prefers_cached() {
        let store = cached_store(&[generated("ai-1"), generated("ai-2")]);
        let source = RecipeSource::load(&store);

        assert!(source.is_cached());
        assert_eq!(source.recipes().len(), 2);
        assert_eq!(source.recipes()[1].id, "ai-2");
    }

    #[test]
    fn test_load_falls_back_on_bad_data() {
        for raw in ["[]", "not json", "[{\"id\": 1}]"] {
            let store = MemoryStore::new().with_entry(RECIPES_KEY, raw);
            let source = RecipeSource::load(&store);
            assert_eq!(source.origin(), RecipeOrigin::Examples, "input {}", raw);
            assert_eq!(source.recipes().len(), 6);
        }
    }

    #[test]
    fn test_replace_keeps_position_and_persists() {
        let mut store = cached_store(&[generated("ai-1"), generated("ai-2"), generated("ai-3")]);
        let mut source = RecipeSource::load(&store);

        assert!(source.replace(&mut store, "ai-2", generated("ai-9")));

        let ids: Vec<&str> = source.recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["ai-1", "ai-9", "ai-3"]);

        let persisted = load_cached(&store).unwrap();
        assert_eq!(persisted, source.recipes());
    }

    #[test]
    fn test_replace_unknown_is_noop() {
        let mut store = MemoryStore::new();
        let mut source = RecipeSource::load(&store);

        assert!(!source.replace(&mut store, "missing", generated("ai-9")));
        assert_eq!(source.recipes(), example_recipes().as_slice());
        assert!(!source.is_cached());
        assert!(!store.contains(RECIPES_KEY));
    }

    #[test]
    fn test_apply_pending_runs_once() {
        let mut store = MemoryStore::new();
        ReplaceInstruction::new("example-3", generated("ai-9"))
            .stage(&mut store)
            .unwrap();

        let mut source = RecipeSource::load(&store);
        assert_eq!(source.apply_pending(&mut store), Some(true));
        assert!(!store.contains(REPLACE_KEY));
        assert_eq!(source.recipes()[2].id, "ai-9");

        assert_eq!(source.apply_pending(&mut store), None);
        assert_eq!(source.recipes()[2].id, "ai-9");
    }

    #[test]
    fn test_apply_pending_drops_malformed_instruction() {
        let mut store = MemoryStore::new().with_entry(REPLACE_KEY, "{\"originalId\": 3}");
        let mut source = RecipeSource::load(&store);

        assert_eq!(source.apply_pending(&mut store), Some(false));
        assert!(!store.contains(REPLACE_KEY));
        assert_eq!(source.recipes(), example_recipes().as_slice());
    }
}
