use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Meal category a recipe is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Appetizer,
    Snacks,
    Desserts,
    Favorites,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Appetizer,
        Category::Snacks,
        Category::Desserts,
        Category::Favorites,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Dinner => "dinner",
            Category::Appetizer => "appetizer",
            Category::Snacks => "snacks",
            Category::Desserts => "desserts",
            Category::Favorites => "favorites",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
                format!("unknown category '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// A single ingredient line of a recipe.
///
/// `selected` is only the default used when the ingredient is first seen;
/// the live state is kept by [`crate::selection::SelectionStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default = "default_selected")]
    pub selected: bool,
}

fn default_selected() -> bool {
    true
}

impl Ingredient {
    pub fn new(id: &str, name: &str, amount: &str, unit: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            amount: amount.to_string(),
            unit: unit.to_string(),
            selected: true,
        }
    }

    /// Amount and unit joined for display, e.g. `500 g`.
    pub fn quantity(&self) -> String {
        format_quantity(&self.amount, &self.unit)
    }
}

/// Join an amount and a unit, skipping whichever is empty.
pub fn format_quantity(amount: &str, unit: &str) -> String {
    match (amount.is_empty(), unit.is_empty()) {
        (true, _) => unit.to_string(),
        (false, true) => amount.to_string(),
        (false, false) => format!("{} {}", amount, unit),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub sugar: f64,
}

/// A recipe as cached by the recipe generator or shipped in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub calories: f64,
    /// Preparation time in minutes.
    #[serde(default)]
    pub time: u32,
    pub category: Category,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub macros: Macros,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

fn default_servings() -> u32 {
    1
}

impl Recipe {
    /// Identities of every ingredient, in recipe order.
    pub fn ingredient_ids(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.id.as_str())
    }

    pub fn find_ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!("Dinner".parse::<Category>(), Ok(Category::Dinner));
        assert_eq!(" snacks ".parse::<Category>(), Ok(Category::Snacks));
        assert!("brunch".parse::<Category>().is_err());
    }

    #[test]
    fn test_recipe_deserialize_with_defaults() {
        let json = r#"{
            "id": "ai-1",
            "title": "Lentejas",
            "category": "lunch",
            "ingredients": [
                {"id": "ing-a", "name": "Lentejas", "amount": "300", "unit": "g"},
                {"id": "ing-b", "name": "Chorizo", "selected": false}
            ]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.category, Category::Lunch);
        assert_eq!(recipe.servings, 1);
        assert!(recipe.nutrition.is_none());
        assert!(recipe.ingredients[0].selected);
        assert!(!recipe.ingredients[1].selected);
        assert_eq!(recipe.ingredients[1].amount, "");
    }

    #[test]
    fn test_recipe_rejects_unknown_category() {
        let json = r#"{"id": "x", "title": "X", "category": "brunch"}"#;
        assert!(serde_json::from_str::<Recipe>(json).is_err());
    }

    #[test]
    fn test_ingredient_quantity() {
        assert_eq!(Ingredient::new("a", "Sal", "1", "pizca").quantity(), "1 pizca");
        assert_eq!(Ingredient::new("b", "Ajo", "2", "").quantity(), "2");
        assert_eq!(Ingredient::new("c", "Agua", "", "").quantity(), "");
        assert_eq!(format_quantity("", "al gusto"), "al gusto");
    }
}
