/// Average estimated cost of one ingredient, in euros.
///
/// Placeholder figure; there is no pricing source behind it.
pub const UNIT_COST: f64 = 1.2;

/// Servings per recipe when the user never set one.
pub const DEFAULT_SERVINGS_PER_RECIPE: u32 = 2;

/// Lower bound applied to the servings and day multipliers.
pub const MIN_MULTIPLIER: u32 = 1;

/// Currency symbol appended to displayed prices.
pub const CURRENCY_SYMBOL: &str = "€";

/// Storefront the shopping list is handed to.
pub const RETAILER_URL: &str = "https://tienda.mercadona.es/categories";
