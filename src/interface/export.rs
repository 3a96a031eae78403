use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::estimate::PricedLine;

#[derive(Debug, Serialize)]
struct ShoppingRow<'a> {
    ingredient_id: &'a str,
    name: &'a str,
    amount: &'a str,
    unit: &'a str,
    recipes: String,
    price: Option<f64>,
    product_url: Option<&'a str>,
}

/// Write the shopping list as CSV with a header row.
///
/// Lines without a known product leave `price` and `product_url` empty.
pub fn write_shopping_list<W: Write>(writer: W, lines: &[PricedLine]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for PricedLine { line, product } in lines {
        out.serialize(ShoppingRow {
            ingredient_id: &line.ingredient_id,
            name: &line.name,
            amount: &line.amount,
            unit: &line.unit,
            recipes: line.recipes.join("; "),
            price: product.as_ref().map(|p| p.price),
            product_url: product.as_ref().map(|p| p.url.as_str()),
        })?;
    }
    out.flush()?;
    Ok(())
}

/// Write the shopping list to a CSV file.
pub fn export_shopping_list<P: AsRef<Path>>(path: P, lines: &[PricedLine]) -> Result<()> {
    let file = File::create(path)?;
    write_shopping_list(file, lines)
}
