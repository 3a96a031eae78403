use crate::estimate::round2;
use crate::models::Product;
use crate::selection::ShoppingLine;

/// A shopping line with the retailer product bought for it, if one is known.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    pub line: ShoppingLine,
    pub product: Option<Product>,
}

impl PricedLine {
    pub fn price(&self) -> Option<f64> {
        self.product.as_ref().map(|p| p.price)
    }
}

/// Match every shopping line to the first product sold under its name.
pub fn price_lines(lines: &[ShoppingLine], products: &[Product]) -> Vec<PricedLine> {
    lines
        .iter()
        .map(|line| PricedLine {
            line: line.clone(),
            product: products.iter().find(|p| p.sold_for(&line.name)).cloned(),
        })
        .collect()
}

/// Sum of the matched product prices, rounded to cents.
pub fn priced_total(lines: &[PricedLine]) -> f64 {
    round2(lines.iter().filter_map(PricedLine::price).sum())
}

/// Retailer ids of the matched products, in list order.
pub fn product_ids(lines: &[PricedLine]) -> Vec<&str> {
    lines
        .iter()
        .filter_map(|l| l.product.as_ref())
        .map(|p| p.retailer_id.as_str())
        .collect()
}
