use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use basket_planner::cli::{Cli, Command};
use basket_planner::error::Result;
use basket_planner::interface::{
    display_cart, display_checkout, display_config, display_lists, display_recipes,
    display_shopping_list, display_summary, export_shopping_list, prompt_selection, prompt_yes_no,
    resolve_ingredient,
};
use basket_planner::models::{Category, Recipe, UserConfig};
use basket_planner::selection::{recipes_by_category, shopping_list};
use basket_planner::state::{recipe_lists, FileStore, PlannerSession, ReplaceInstruction};

type Session = PlannerSession<FileStore>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("basket_planner=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let mut session = PlannerSession::open(FileStore::open(&cli.file)?);
    let modifies_state = command.modifies_state();

    match command {
        Command::List { category, list } => cmd_list(&session, category, list.as_deref())?,
        Command::Lists => display_lists(recipe_lists(), session.recipes()),
        Command::Toggle { ingredients } => cmd_toggle(&mut session, &ingredients)?,
        Command::Pick => cmd_pick(&mut session)?,
        Command::SelectAll { clear } => {
            if !clear || prompt_yes_no("Deselect every ingredient?", true)? {
                session.select_all(!clear);
            }
            print_summary(&session);
        }
        Command::Config {
            servings,
            dates,
            clear_dates,
            meal_types,
            diet,
            goals,
            allergies,
        } => {
            session.update_config(|config| {
                apply_config(config, servings, dates, clear_dates, meal_types, diet, goals, allergies)
            });
            display_config(session.config());
            println!();
            print_summary(&session);
        }
        Command::Replace {
            recipe_id,
            with,
            defer,
        } => cmd_replace(&mut session, &recipe_id, &with, defer)?,
        Command::Swap { recipe_id, seed } => cmd_swap(&mut session, &recipe_id, seed)?,
        Command::Add { recipe_id } => {
            session.add_to_cart(&recipe_id)?;
            let title = &session.recipe(&recipe_id)?.title;
            println!("Recipe added: {} saved to favorites.", title);
        }
        Command::Cart => display_cart(session.cart()),
        Command::Export { out } => {
            let lines = session.priced_shopping_list();
            export_shopping_list(&out, &lines)?;
            println!("Wrote {} items to {}", lines.len(), out.display());
        }
        Command::Checkout => {
            display_checkout(&session.priced_shopping_list(), &session.estimate());
        }
    }

    if modifies_state {
        session.save()?;
    }
    Ok(())
}

fn print_summary(session: &Session) {
    display_summary(&session.estimate(), session.config(), session.source().origin());
}

/// Show recipes, optionally limited to one category and/or curated list.
fn cmd_list(session: &Session, category: Option<Category>, list: Option<&str>) -> Result<()> {
    let (recipes, title): (Vec<&Recipe>, String) = match (list, category) {
        (None, None) => (
            session.recipes().iter().collect(),
            "Recommended recipes".to_string(),
        ),
        (None, Some(c)) => (
            recipes_by_category(session.recipes(), c),
            format!("Recipes: {}", c),
        ),
        (Some(id), category) => {
            let mut recipes = session.recipes_in_list(id)?;
            if let Some(c) = category {
                recipes.retain(|r| r.category == c);
            }
            (recipes, format!("List: {}", id))
        }
    };
    display_recipes(&recipes, session.selection(), &title);
    print_summary(session);
    Ok(())
}

/// Toggle each ingredient the user named.
fn cmd_toggle(session: &mut Session, queries: &[String]) -> Result<()> {
    for query in queries {
        let Some(id) = resolve_ingredient(query, session.recipes())? else {
            continue;
        };

        if let Some(selected) = session.toggle(&id) {
            let state = if selected { "selected" } else { "deselected" };
            println!("{}: {}", id, state);
        }
    }

    println!();
    print_summary(session);
    Ok(())
}

/// Interactive multi-select over every ingredient.
fn cmd_pick(session: &mut Session) -> Result<()> {
    let picked = prompt_selection(session.recipes(), session.selection())?;
    session.select_only(&picked);

    let lines = shopping_list(session.selection(), session.recipes());
    display_shopping_list(&lines);
    print_summary(session);
    Ok(())
}

fn cmd_replace(session: &mut Session, recipe_id: &str, path: &Path, defer: bool) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let recipe: Recipe = serde_json::from_str(&content)?;

    if defer {
        ReplaceInstruction::new(recipe_id, recipe).stage(session.store_mut())?;
        println!("Replacement recorded; it will be applied on the next run.");
        return Ok(());
    }

    let title = recipe.title.clone();
    if session.replace(recipe_id, recipe) {
        println!("Replaced {} with {}.", recipe_id, title);
        print_summary(session);
    } else {
        println!("No recipe with id '{}'; nothing replaced.", recipe_id);
    }
    Ok(())
}

fn cmd_swap(session: &mut Session, recipe_id: &str, seed: Option<u64>) -> Result<()> {
    let original = session.recipe(recipe_id)?.title.clone();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let replacement = session.swap(recipe_id, &mut rng)?;
    println!(
        "Swapped {} for {} [{}].",
        original, replacement.title, replacement.id
    );

    print_summary(session);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn apply_config(
    config: &mut UserConfig,
    servings: Option<u32>,
    dates: Vec<NaiveDate>,
    clear_dates: bool,
    meal_types: Vec<Category>,
    diet: Option<String>,
    goals: Vec<String>,
    allergies: Vec<String>,
) {
    if let Some(servings) = servings {
        config.servings_per_recipe = servings;
    }
    if clear_dates {
        config.selected_dates.clear();
    }
    config.add_dates(dates);
    if !meal_types.is_empty() {
        config.meal_types = meal_types;
    }
    if diet.is_some() {
        config.diet = diet;
    }
    if !goals.is_empty() {
        config.goals = goals;
    }
    if !allergies.is_empty() {
        config.allergies = allergies;
    }
}
