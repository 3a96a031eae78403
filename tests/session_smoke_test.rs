use std::collections::HashSet;

use basket_planner::estimate::{priced_total, product_ids};
use basket_planner::models::{Category, Ingredient, Recipe};
use basket_planner::selection::{distinct_count, selected_count, SelectionStore};
use basket_planner::state::{
    example_recipes, load_cached, FileStore, KeyValueStore, MemoryStore, PlannerSession,
    RecipeOrigin, RecipeSource, ReplaceInstruction, RECIPES_KEY, REPLACE_KEY,
};

fn make_recipe(id: &str, category: Category, ingredients: &[(&str, bool)]) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: format!("Recipe {}", id),
        image: String::new(),
        calories: 400.0,
        time: 25,
        category,
        servings: 2,
        macros: Default::default(),
        ingredients: ingredients
            .iter()
            .map(|(iid, selected)| {
                let mut ingredient = Ingredient::new(iid, iid, "1", "unidad");
                ingredient.selected = *selected;
                ingredient
            })
            .collect(),
        instructions: vec!["Cocinar".to_string()],
        nutrition: None,
    }
}

#[test]
fn test_fresh_state_file_uses_examples() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("state.json")).unwrap();
    let session = PlannerSession::open(store);

    assert_eq!(session.source().origin(), RecipeOrigin::Examples);
    assert_eq!(session.recipes(), example_recipes().as_slice());

    let categories: HashSet<Category> = session.recipes().iter().map(|r| r.category).collect();
    for c in [Category::Breakfast, Category::Lunch, Category::Dinner, Category::Appetizer] {
        assert!(categories.contains(&c));
    }
}

#[test]
fn test_empty_cache_falls_back_to_examples() {
    let store = MemoryStore::new().with_entry(RECIPES_KEY, "[]");
    let source = RecipeSource::load(&store);

    assert_eq!(source.origin(), RecipeOrigin::Examples);
    assert_eq!(source.recipes().len(), 6);
}

#[test]
fn test_malformed_cache_is_not_fatal() {
    let store = MemoryStore::new().with_entry(RECIPES_KEY, "[{\"title\": ");
    let session = PlannerSession::open(store);
    assert_eq!(session.recipes().len(), 6);
    assert!(session.estimate().price > 0.0);
}

#[test]
fn test_count_matches_default_flags() {
    let recipes = vec![
        make_recipe("a", Category::Lunch, &[("rice", true), ("salt", false), ("oil", true)]),
        make_recipe("b", Category::Dinner, &[("oil", true), ("fish", true), ("salt", false)]),
    ];
    let mut store = SelectionStore::new();
    store.initialize(&recipes);

    // rice, oil, fish
    assert_eq!(selected_count(&store, &recipes), 3);
    assert_eq!(distinct_count(&recipes), 4);
}

#[test]
fn test_toggle_shared_ingredient_affects_both_recipes() {
    let recipes = vec![
        make_recipe("a", Category::Lunch, &[("rice", true), ("oil", true)]),
        make_recipe("b", Category::Dinner, &[("oil", true), ("fish", true)]),
    ];
    let mut store = SelectionStore::new();
    store.initialize(&recipes);

    store.toggle("oil");
    assert_eq!(selected_count(&store, &recipes[..1]), 1);
    assert_eq!(selected_count(&store, &recipes[1..]), 1);
    assert_eq!(selected_count(&store, &recipes), 2);

    store.toggle("oil");
    assert_eq!(selected_count(&store, &recipes), 3);
}

#[test]
fn test_pending_replacement_of_example_three() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let replacement = make_recipe("ai-42", Category::Dinner, &[("tofu", true)]);
    {
        let mut store = FileStore::open(&path).unwrap();
        ReplaceInstruction::new("example-3", replacement.clone())
            .stage(&mut store)
            .unwrap();
    }

    let mut session = PlannerSession::open(FileStore::open(&path).unwrap());
    session.save().unwrap();

    assert_eq!(session.recipes().len(), 6);
    assert_eq!(session.recipes()[2], replacement);
    assert_eq!(session.recipes()[1].id, "example-2");
    assert!(session.selection().is_selected("tofu"));

    let reopened = FileStore::open(&path).unwrap();
    assert!(reopened.get(REPLACE_KEY).is_none());
    let cached = load_cached(&reopened).unwrap();
    assert_eq!(cached[2], replacement);
    assert_eq!(cached, session.recipes());

    // a second load must not replace anything again
    let again = PlannerSession::open(reopened);
    assert_eq!(again.recipes()[2], replacement);
    assert_eq!(again.source().origin(), RecipeOrigin::Cached);
}

#[test]
fn test_replace_keeps_user_toggles() {
    let mut session = PlannerSession::open(MemoryStore::new());
    session.toggle("ing-1");

    let replacement = make_recipe("ai-1", Category::Dinner, &[("ing-1", true), ("tofu", true)]);
    assert!(session.replace("example-6", replacement));

    // ing-1 was already known; its explicit toggle survives
    assert!(!session.selection().is_selected("ing-1"));
    assert!(session.selection().is_selected("tofu"));
    assert!(!session.replace("example-99", make_recipe("x", Category::Snacks, &[])));
}

#[test]
fn test_interrupted_write_does_not_lock_out_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut session = PlannerSession::open(FileStore::open(&path).unwrap());
    session.toggle("ing-1");
    session.update_config(|c| c.servings_per_recipe = 3);
    session.save().unwrap();

    let full = std::fs::read_to_string(&path).unwrap();
    let mut cut = full.len() / 2;
    while !full.is_char_boundary(cut) {
        cut -= 1;
    }
    std::fs::write(&path, &full[..cut]).unwrap();

    let mut session = PlannerSession::open(FileStore::open(&path).unwrap());
    assert_eq!(session.source().origin(), RecipeOrigin::Examples);
    assert_eq!(session.recipes().len(), 6);
    assert!(session.selection().is_selected("ing-1"));
    assert!(session.estimate().price > 0.0);

    session.toggle("ing-2");
    session.save().unwrap();
    let reopened = PlannerSession::open(FileStore::open(&path).unwrap());
    assert!(!reopened.selection().is_selected("ing-2"));
}

#[test]
fn test_curated_list_and_priced_checkout() {
    let session = PlannerSession::open(MemoryStore::new());

    let quick: Vec<&str> = session
        .recipes_in_list("rapidas")
        .unwrap()
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(quick, vec!["example-2", "example-3", "example-4", "example-5"]);

    let priced = session.priced_shopping_list();
    assert_eq!(product_ids(&priced), vec!["69099"]);
    assert_eq!(priced_total(&priced), 1.5);
}
