pub mod cli;
pub mod error;
pub mod estimate;
pub mod interface;
pub mod models;
pub mod selection;
pub mod state;

pub use error::{PlannerError, RecipeSourceError, Result};
pub use estimate::{estimate, Estimate};
pub use models::{Category, Ingredient, Recipe, UserConfig};
pub use selection::SelectionStore;
pub use state::{PlannerSession, RecipeSource};
