use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::estimate::DEFAULT_SERVINGS_PER_RECIPE;
use crate::models::Category;

/// User preferences collected during onboarding.
///
/// Only `servings_per_recipe` and the number of `selected_dates` feed the
/// price estimate; the rest is carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserConfig {
    pub servings_per_recipe: u32,
    pub selected_dates: Vec<NaiveDate>,
    pub meal_types: Vec<Category>,
    pub diet: Option<String>,
    pub goals: Vec<String>,
    pub allergies: Vec<String>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            servings_per_recipe: DEFAULT_SERVINGS_PER_RECIPE,
            selected_dates: Vec::new(),
            meal_types: Vec::new(),
            diet: None,
            goals: Vec::new(),
            allergies: Vec::new(),
        }
    }
}

impl UserConfig {
    /// Number of planned days.
    pub fn day_count(&self) -> usize {
        self.selected_dates.len()
    }

    /// Add dates, keeping the list sorted and free of duplicates.
    pub fn add_dates(&mut self, dates: impl IntoIterator<Item = NaiveDate>) {
        self.selected_dates.extend(dates);
        self.selected_dates.sort();
        self.selected_dates.dedup();
    }

    pub fn days_text(&self) -> String {
        match self.day_count() {
            1 => "1 day".to_string(),
            n => format!("{} days", n),
        }
    }

    pub fn servings_text(&self) -> String {
        match self.servings_per_recipe.max(1) {
            1 => "1 serving".to_string(),
            n => format!("{} servings", n),
        }
    }
}
