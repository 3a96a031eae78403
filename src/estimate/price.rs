use crate::estimate::constants::*;
use crate::models::UserConfig;

/// Round half-up to two decimal places.
///
/// Callers only pass non-negative values, where `f64::round` (half away
/// from zero) is half-up.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimated basket price.
///
/// `count * UNIT_COST * servings * days`, with servings and days clamped to
/// at least one so an unset configuration never zeroes the estimate.
pub fn estimate(selected_count: usize, servings_per_recipe: u32, day_count: usize) -> f64 {
    let servings = servings_per_recipe.max(MIN_MULTIPLIER) as f64;
    let days = day_count.max(MIN_MULTIPLIER as usize) as f64;
    round2(selected_count as f64 * UNIT_COST * servings * days)
}

/// Price formatted for display, e.g. `168.00€`.
pub fn format_price(price: f64) -> String {
    format!("{:.2}{}", price, CURRENCY_SYMBOL)
}

/// Figures shown next to the "find best offer" action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub selected_count: usize,
    pub recipe_count: usize,
    pub price: f64,
}

impl Estimate {
    pub fn new(selected_count: usize, recipe_count: usize, config: &UserConfig) -> Self {
        Self {
            selected_count,
            recipe_count,
            price: estimate(selected_count, config.servings_per_recipe, config.day_count()),
        }
    }
}
