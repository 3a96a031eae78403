pub mod aggregator;
mod store;

pub use aggregator::{
    distinct_count, recipes_by_category, selected_count, selected_identities,
    selected_identities_in, shopping_list, ShoppingLine,
};
pub use store::SelectionStore;
