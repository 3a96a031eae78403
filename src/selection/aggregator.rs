use std::collections::{BTreeSet, HashMap, HashSet};

use crate::models::{format_quantity, Category, Recipe};
use crate::selection::SelectionStore;

/// One deduplicated line of the shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingLine {
    pub ingredient_id: String,
    pub name: String,
    pub amount: String,
    pub unit: String,
    /// Titles of every recipe using this ingredient, in list order.
    pub recipes: Vec<String>,
}

impl ShoppingLine {
    /// Amount and unit joined for display.
    pub fn quantity(&self) -> String {
        format_quantity(&self.amount, &self.unit)
    }
}

/// Number of distinct selected ingredients across `recipes`.
///
/// An id listed by several recipes is counted once.
pub fn selected_count(store: &SelectionStore, recipes: &[Recipe]) -> usize {
    recipes
        .iter()
        .flat_map(|r| r.ingredient_ids())
        .filter(|id| store.is_selected(id))
        .collect::<HashSet<_>>()
        .len()
}

/// Number of distinct ingredient ids across `recipes`, selected or not.
pub fn distinct_count(recipes: &[Recipe]) -> usize {
    recipes
        .iter()
        .flat_map(|r| r.ingredient_ids())
        .collect::<HashSet<_>>()
        .len()
}

/// Selected ingredient ids of a single recipe.
pub fn selected_identities(store: &SelectionStore, recipe: &Recipe) -> BTreeSet<String> {
    recipe
        .ingredient_ids()
        .filter(|id| store.is_selected(id))
        .map(str::to_string)
        .collect()
}

/// Selected ingredient ids across a whole recipe list.
pub fn selected_identities_in(store: &SelectionStore, recipes: &[Recipe]) -> BTreeSet<String> {
    recipes
        .iter()
        .flat_map(|r| selected_identities(store, r))
        .collect()
}

/// Selected ingredients merged into shopping lines.
///
/// Lines keep first-seen order; name, amount and unit come from the first
/// recipe that lists the ingredient.
pub fn shopping_list(store: &SelectionStore, recipes: &[Recipe]) -> Vec<ShoppingLine> {
    let mut lines: Vec<ShoppingLine> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            if !store.is_selected(&ingredient.id) {
                continue;
            }
            match index.get(ingredient.id.as_str()) {
                Some(&pos) => {
                    let line = &mut lines[pos];
                    if !line.recipes.contains(&recipe.title) {
                        line.recipes.push(recipe.title.clone());
                    }
                }
                None => {
                    index.insert(&ingredient.id, lines.len());
                    lines.push(ShoppingLine {
                        ingredient_id: ingredient.id.clone(),
                        name: ingredient.name.clone(),
                        amount: ingredient.amount.clone(),
                        unit: ingredient.unit.clone(),
                        recipes: vec![recipe.title.clone()],
                    });
                }
            }
        }
    }

    lines
}

/// Recipes filed under `category`, in list order.
pub fn recipes_by_category(recipes: &[Recipe], category: Category) -> Vec<&Recipe> {
    recipes.iter().filter(|r| r.category == category).collect()
}
