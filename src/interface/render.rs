use crate::estimate::{format_price, priced_total, product_ids, Estimate, PricedLine, RETAILER_URL};
use crate::models::{Cart, Category, Recipe, RecipeList, UserConfig};
use crate::selection::{self, SelectionStore, ShoppingLine};
use crate::state::RecipeOrigin;

/// Display recipes with the selection state of each ingredient.
pub fn display_recipes(recipes: &[&Recipe], store: &SelectionStore, title: &str) {
    if recipes.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} recipes) ===", title, recipes.len());

    for recipe in recipes {
        let picked = selection::selected_identities(store, recipe).len();
        println!();
        println!(
            "[{}] {} - {}, {} min, {} servings, {:.0} kcal ({}/{} ingredients)",
            recipe.id,
            recipe.title,
            recipe.category,
            recipe.time,
            recipe.servings,
            recipe.calories,
            picked,
            recipe.ingredients.len()
        );

        for ingredient in &recipe.ingredients {
            let mark = if store.is_selected(&ingredient.id) { "x" } else { " " };
            println!(
                "    [{}] {:<8} {} {}",
                mark,
                ingredient.id,
                ingredient.name,
                ingredient.quantity()
            );
        }
    }

    println!();
}

/// Display the count/price summary line.
pub fn display_summary(estimate: &Estimate, config: &UserConfig, origin: RecipeOrigin) {
    let source = match origin {
        RecipeOrigin::Cached => "generated recipes",
        RecipeOrigin::Examples => "example recipes",
    };

    println!("--- Summary ({}) ---", source);
    println!(
        "{} ingredients selected from {} recipes",
        estimate.selected_count, estimate.recipe_count
    );
    println!("Plan: {}, {}", config.days_text(), config.servings_text());
    println!("Estimated total: {}", format_price(estimate.price));
    println!();
}

/// Display the stored preferences.
pub fn display_config(config: &UserConfig) {
    let join = |items: &[String]| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        }
    };
    let dates: Vec<String> = config
        .selected_dates
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect();
    let meal_types: Vec<String> = config.meal_types.iter().map(Category::to_string).collect();

    println!("Servings per recipe: {}", config.servings_per_recipe);
    println!("Dates ({}): {}", config.day_count(), join(dates.as_slice()));
    println!("Meal types: {}", join(meal_types.as_slice()));
    println!("Diet: {}", config.diet.as_deref().unwrap_or("-"));
    println!("Goals: {}", join(config.goals.as_slice()));
    println!("Allergies: {}", join(config.allergies.as_slice()));
}

/// Display the deduplicated shopping list.
pub fn display_shopping_list(lines: &[ShoppingLine]) {
    if lines.is_empty() {
        println!("Shopping list is empty (no ingredients selected).");
        return;
    }

    println!();
    println!("=== Shopping List ({} items) ===", lines.len());
    println!();

    let max_name_len = lines.iter().map(|l| l.name.chars().count()).max().unwrap_or(10);

    for line in lines {
        println!(
            "  {:<width$}  {:<14} {}",
            line.name,
            line.quantity(),
            line.recipes.join(", "),
            width = max_name_len
        );
    }

    println!();
}

/// Display saved recipes.
pub fn display_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Cart is empty.");
        return;
    }

    println!("=== Cart ({} recipes) ===", cart.len());
    for entry in &cart.entries {
        println!(
            "  [{}] {} - {} servings, {} ingredients",
            entry.recipe_id,
            entry.title,
            entry.servings,
            entry.ingredient_ids.len()
        );
    }
}

/// Display the curated lists with how many active recipes each one holds.
pub fn display_lists(lists: &[RecipeList], recipes: &[Recipe]) {
    println!();
    println!("=== Recipe lists ===");
    for list in lists {
        println!(
            "  [{}] {} - {} ({} recipes, {} in your plan)",
            list.id,
            list.title,
            list.description,
            list.recipe_count,
            list.filter(recipes).len()
        );
    }
    println!();
}

/// Display the priced shopping list and the hand-off to the retailer.
pub fn display_checkout(lines: &[PricedLine], estimate: &Estimate) {
    if lines.is_empty() {
        println!("Shopping list is empty (no ingredients selected).");
        return;
    }

    println!();
    println!("=== Checkout ({} items) ===", lines.len());
    println!();

    let max_name_len = lines
        .iter()
        .map(|l| l.line.name.chars().count())
        .max()
        .unwrap_or(10);

    for PricedLine { line, product } in lines {
        match product {
            Some(p) => println!(
                "  {:<width$}  {:<14} {:>8}  {}",
                line.name,
                p.quantity,
                format_price(p.price),
                p.url,
                width = max_name_len
            ),
            None => println!(
                "  {:<width$}  {:<14} {:>8}",
                line.name,
                line.quantity(),
                "-",
                width = max_name_len
            ),
        }
    }

    let ids = product_ids(lines);
    println!();
    println!(
        "Products found: {} of {} ({})",
        ids.len(),
        lines.len(),
        format_price(priced_total(lines))
    );
    if !ids.is_empty() {
        println!("Product ids: {}", ids.join(", "));
    }
    println!("Estimated total: {}", format_price(estimate.price));
    println!("Continue your purchase at: {}", RETAILER_URL);
}
