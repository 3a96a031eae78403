mod cart;
mod config;
mod list;
mod product;
mod recipe;

pub use cart::{Cart, CartEntry};
pub use config::UserConfig;
pub use list::{ListRule, RecipeList};
pub use product::Product;
pub use recipe::{format_quantity, Category, Ingredient, Macros, Nutrition, Recipe};
