//! Product catalog: the seed list and the filtering read path.

mod filter;
mod seed;

pub use filter::{filter_products, CatalogQuery, CategoryFilter, SortOption};
pub use seed::seed_products;
