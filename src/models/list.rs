use crate::models::{Category, Recipe};

/// Which recipes a curated list picks out of the active set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListRule {
    /// Every recipe.
    All,
    /// Ready in strictly fewer minutes than this.
    QuickerThan(u32),
    /// At most this many calories per serving.
    MaxCalories(f64),
    Category(Category),
}

impl ListRule {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match *self {
            ListRule::All => true,
            ListRule::QuickerThan(minutes) => recipe.time < minutes,
            ListRule::MaxCalories(limit) => recipe.calories <= limit,
            ListRule::Category(category) => recipe.category == category,
        }
    }
}

/// A curated recipe list offered on the home screen.
///
/// `recipe_count` is the size the list advertises, not how many of the
/// active recipes match it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeList {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub recipe_count: usize,
    pub rule: ListRule,
}

impl RecipeList {
    /// Recipes of `recipes` belonging to this list, in list order.
    pub fn filter<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|r| self.rule.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn recipe(time: u32, calories: f64, category: Category) -> Recipe {
        Recipe {
            id: format!("r-{}-{}", time, calories),
            title: "R".to_string(),
            image: String::new(),
            calories,
            time,
            category,
            servings: 2,
            macros: Default::default(),
            ingredients: vec![Ingredient::new("i", "Sal", "1", "pizca")],
            instructions: Vec::new(),
            nutrition: None,
        }
    }

    #[test]
    fn test_quick_rule_is_strict() {
        let rule = ListRule::QuickerThan(30);
        assert!(rule.matches(&recipe(29, 100.0, Category::Lunch)));
        assert!(!rule.matches(&recipe(30, 100.0, Category::Lunch)));
    }

    #[test]
    fn test_calorie_and_category_rules() {
        let light = recipe(10, 250.0, Category::Breakfast);
        let heavy = recipe(10, 450.0, Category::Dinner);

        assert!(ListRule::MaxCalories(250.0).matches(&light));
        assert!(!ListRule::MaxCalories(250.0).matches(&heavy));
        assert!(ListRule::Category(Category::Breakfast).matches(&light));
        assert!(!ListRule::Category(Category::Breakfast).matches(&heavy));
        assert!(ListRule::All.matches(&heavy));
    }
}
