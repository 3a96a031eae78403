pub mod constants;
pub mod price;
pub mod products;

pub use constants::*;
pub use price::{estimate, format_price, round2, Estimate};
pub use products::{price_lines, priced_total, product_ids, PricedLine};
