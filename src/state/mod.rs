pub mod catalog;
mod manager;
mod persistence;
mod resolver;
mod storage;

pub use catalog::{
    alternate_recipes, catalog, example_recipes, find_list, pick_replacement, recipe_lists,
    retailer_products,
};
pub use manager::PlannerSession;
pub use persistence::{load_or_default, save_json, FileStore};
pub use resolver::{load_cached, RecipeOrigin, RecipeSource, ReplaceInstruction};
pub use storage::{
    KeyValueStore, MemoryStore, CART_KEY, CONFIG_KEY, RECIPES_KEY, REPLACE_KEY, SELECTION_KEY,
};
