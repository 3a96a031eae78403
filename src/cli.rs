use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::models::Category;

/// Basket planner — pick recipe ingredients and estimate the shopping basket.
#[derive(Parser, Debug)]
#[command(name = "basket")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the state file (recipes, selection, preferences, cart).
    #[arg(short, long, default_value = "basket_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the recommended recipes with the current basket estimate.
    List {
        /// Only show recipes of this category.
        #[arg(short, long)]
        category: Option<Category>,

        /// Only show recipes of this curated list (see `lists`).
        #[arg(short, long)]
        list: Option<String>,
    },

    /// Show the curated recipe lists.
    Lists,

    /// Toggle ingredients by id or name.
    Toggle {
        /// Ingredient ids (e.g. ing-3) or names; names are fuzzy-matched.
        #[arg(required = true)]
        ingredients: Vec<String>,
    },

    /// Choose the ingredients to buy interactively.
    Pick,

    /// Select every ingredient, or clear them all.
    SelectAll {
        /// Deselect everything instead.
        #[arg(long)]
        clear: bool,
    },

    /// Show or change preferences.
    Config {
        /// Servings per recipe.
        #[arg(long)]
        servings: Option<u32>,

        /// Dates to plan for (YYYY-MM-DD, comma-separated).
        #[arg(long, value_delimiter = ',')]
        dates: Vec<NaiveDate>,

        /// Remove all planned dates before adding new ones.
        #[arg(long)]
        clear_dates: bool,

        /// Meal types to plan (repeatable).
        #[arg(long = "meal-type")]
        meal_types: Vec<Category>,

        /// Diet, e.g. "vegetarian".
        #[arg(long)]
        diet: Option<String>,

        /// Goals (repeatable).
        #[arg(long = "goal")]
        goals: Vec<String>,

        /// Allergies (repeatable).
        #[arg(long = "allergy")]
        allergies: Vec<String>,
    },

    /// Replace a recipe with one read from a JSON file.
    Replace {
        /// Id of the recipe to replace.
        recipe_id: String,

        /// JSON file holding the new recipe.
        #[arg(long)]
        with: PathBuf,

        /// Only record the replacement; it is applied on the next load.
        #[arg(long)]
        defer: bool,
    },

    /// Swap a recipe for a random catalog recipe of the same category.
    Swap {
        /// Id of the recipe to swap out.
        recipe_id: String,

        /// Random seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Add a recipe and its selected ingredients to the cart.
    Add {
        /// Id of the recipe to add.
        recipe_id: String,
    },

    /// Show the cart.
    Cart,

    /// Write the shopping list to a CSV file.
    Export {
        /// Output CSV path.
        #[arg(short, long, default_value = "shopping_list.csv")]
        out: PathBuf,
    },

    /// Show the priced shopping list and the retailer links.
    Checkout,
}

impl Command {
    /// Whether running the command changes what the session saves.
    pub fn modifies_state(&self) -> bool {
        match self {
            Command::List { .. }
            | Command::Lists
            | Command::Cart
            | Command::Export { .. }
            | Command::Checkout => false,
            Command::Toggle { .. }
            | Command::Pick
            | Command::SelectAll { .. }
            | Command::Swap { .. }
            | Command::Add { .. } => true,
            Command::Config {
                servings,
                dates,
                clear_dates,
                meal_types,
                diet,
                goals,
                allergies,
            } => {
                servings.is_some()
                    || !dates.is_empty()
                    || *clear_dates
                    || !meal_types.is_empty()
                    || diet.is_some()
                    || !goals.is_empty()
                    || !allergies.is_empty()
            }
            // a deferred replacement is written to the store directly
            Command::Replace { defer, .. } => !*defer,
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::List {
            category: None,
            list: None,
        }
    }
}
