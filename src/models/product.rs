use serde::{Deserialize, Serialize};

/// A retailer product that can stand in for a shopping-list ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Retailer's own product id.
    pub retailer_id: String,
    /// Ingredient name the product is sold for.
    pub name: String,
    /// Pack size, e.g. `1 kg`.
    pub quantity: String,
    /// Price in euros.
    pub price: f64,
    pub url: String,
}

impl Product {
    /// Whether this product is sold for an ingredient called `ingredient_name`.
    ///
    /// Names are compared trimmed and case-insensitively.
    pub fn sold_for(&self, ingredient_name: &str) -> bool {
        self.name.trim().to_lowercase() == ingredient_name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sold_for_ignores_case_and_whitespace() {
        let product = Product {
            retailer_id: "1".to_string(),
            name: "Salmón ahumado".to_string(),
            quantity: "200 g".to_string(),
            price: 4.2,
            url: String::new(),
        };
        assert!(product.sold_for("  salmón AHUMADO "));
        assert!(!product.sold_for("Salmón"));
    }
}
