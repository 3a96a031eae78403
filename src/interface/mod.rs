pub mod export;
pub mod prompts;
pub mod render;

pub use export::{export_shopping_list, write_shopping_list};
pub use prompts::{
    ingredient_options, match_ingredient, prompt_selection, prompt_yes_no, resolve_ingredient,
    IngredientMatch, IngredientOption,
};
pub use render::{
    display_cart, display_checkout, display_config, display_lists, display_recipes,
    display_shopping_list, display_summary,
};
