use std::collections::{BTreeSet, HashSet};

use dialoguer::{Confirm, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{Ingredient, Recipe};
use crate::selection::SelectionStore;

/// Minimum similarity for a name to count as a fuzzy match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// An ingredient offered to the user, labelled with the recipe it comes from.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientOption {
    pub id: String,
    pub label: String,
}

/// Outcome of looking up an ingredient typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientMatch {
    Exact(String),
    /// Candidates ordered from best to worst.
    Candidates(Vec<IngredientOption>),
    NoMatch,
}

/// Distinct ingredients of `recipes`, first occurrence wins.
pub fn ingredient_options(recipes: &[Recipe]) -> Vec<IngredientOption> {
    let mut seen = HashSet::new();
    let mut options = Vec::new();
    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            if seen.insert(ingredient.id.as_str()) {
                options.push(IngredientOption {
                    id: ingredient.id.clone(),
                    label: format!("{} ({})", ingredient.name, recipe.title),
                });
            }
        }
    }
    options
}

/// Resolve `query` against ingredient ids, then names.
///
/// An id match is exact. A name match is exact only when one ingredient has
/// that name; otherwise every same-named ingredient is a candidate. Failing
/// both, names are compared with Jaro-Winkler similarity.
pub fn match_ingredient(query: &str, recipes: &[Recipe]) -> IngredientMatch {
    let query = query.trim();
    let ingredients: Vec<_> = recipes
        .iter()
        .flat_map(|r| r.ingredients.iter().map(move |i| (i, r)))
        .collect();

    if ingredients.iter().any(|(i, _)| i.id == query) {
        return IngredientMatch::Exact(query.to_string());
    }

    let wanted = query.to_lowercase();
    let option = |i: &Ingredient, r: &Recipe| IngredientOption {
        id: i.id.clone(),
        label: format!("{} ({})", i.name, r.title),
    };

    let mut seen = HashSet::new();
    let same_name: Vec<IngredientOption> = ingredients
        .iter()
        .filter(|(i, _)| i.name.to_lowercase() == wanted)
        .filter(|(i, _)| seen.insert(i.id.as_str()))
        .map(|(i, r)| option(*i, *r))
        .collect();

    match same_name.len() {
        0 => {}
        1 => return IngredientMatch::Exact(same_name[0].id.clone()),
        _ => return IngredientMatch::Candidates(same_name),
    }

    let mut seen = HashSet::new();
    let mut scored: Vec<(IngredientOption, f64)> = ingredients
        .iter()
        .filter(|(i, _)| seen.insert(i.id.as_str()))
        .map(|(i, r)| (option(*i, *r), jaro_winkler(&i.name.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    if scored.is_empty() {
        return IngredientMatch::NoMatch;
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    IngredientMatch::Candidates(scored.into_iter().map(|(o, _)| o).collect())
}

/// Resolve `query` to an ingredient id, asking the user when ambiguous.
pub fn resolve_ingredient(query: &str, recipes: &[Recipe]) -> Result<Option<String>> {
    match match_ingredient(query, recipes) {
        IngredientMatch::Exact(id) => Ok(Some(id)),
        IngredientMatch::NoMatch => {
            println!("No matching ingredient found for '{}'", query);
            Ok(None)
        }
        IngredientMatch::Candidates(candidates) if candidates.len() == 1 => {
            let candidate = &candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", candidate.label))
                .default(true)
                .interact()?;
            Ok(confirm.then(|| candidate.id.clone()))
        }
        IngredientMatch::Candidates(candidates) => {
            let mut labels: Vec<String> =
                candidates.iter().take(5).map(|c| c.label.clone()).collect();
            let shown = labels.len();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            Ok((selection < shown).then(|| candidates[selection].id.clone()))
        }
    }
}

/// Let the user tick the ingredients to buy. Returns the ticked ids.
pub fn prompt_selection(recipes: &[Recipe], store: &SelectionStore) -> Result<BTreeSet<String>> {
    let options = ingredient_options(recipes);
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    let defaults: Vec<bool> = options.iter().map(|o| store.is_selected(&o.id)).collect();

    let picked = MultiSelect::new()
        .with_prompt("Select the ingredients to buy (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    Ok(picked.into_iter().map(|i| options[i].id.clone()).collect())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::example_recipes;

    #[test]
    fn test_match_by_id() {
        let recipes = example_recipes();
        assert_eq!(
            match_ingredient("ing-7", &recipes),
            IngredientMatch::Exact("ing-7".to_string())
        );
    }

    #[test]
    fn test_match_unique_name_case_insensitive() {
        let recipes = example_recipes();
        assert_eq!(
            match_ingredient("patatas", &recipes),
            IngredientMatch::Exact("ing-1".to_string())
        );
    }

    #[test]
    fn test_match_shared_name_lists_every_recipe() {
        let recipes = example_recipes();
        let IngredientMatch::Candidates(candidates) = match_ingredient("Aceite de oliva", &recipes)
        else {
            panic!("expected candidates");
        };
        let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["ing-4", "ing-25", "ing-30"]);
    }

    #[test]
    fn test_fuzzy_match() {
        let recipes = example_recipes();
        let IngredientMatch::Candidates(candidates) = match_ingredient("aguacat", &recipes) else {
            panic!("expected candidates");
        };
        assert_eq!(candidates[0].id, "ing-17");
        assert_eq!(match_ingredient("zzzzzz", &recipes), IngredientMatch::NoMatch);
    }

    #[test]
    fn test_ingredient_options_deduplicate() {
        let mut recipes = example_recipes();
        recipes.push(recipes[0].clone());
        assert_eq!(ingredient_options(&recipes).len(), 30);
    }
}
