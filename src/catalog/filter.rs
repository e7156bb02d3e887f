use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Category, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = crate::domain::UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Catalog ordering.
///
/// `Newest` is an approximation: products carry no creation time, so it only
/// moves items flagged new ahead of the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    Newest,
    PriceLowHigh,
    PriceHighLow,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceLowHigh => "price_low_high",
            Self::PriceHighLow => "price_high_low",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "" | "newest" => Ok(Self::Newest),
            "price_low_high" | "price_asc" => Ok(Self::PriceLowHigh),
            "price_high_low" | "price_desc" => Ok(Self::PriceHighLow),
            other => Err(format!("unknown sort option '{}'", other)),
        }
    }
}

/// Everything the catalog page filters on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub sort: SortOption,
    /// Case-insensitive substring of the product name. Blank means no search.
    pub search: Option<String>,
}

/// Filters and orders `products` for display.
///
/// Pure: the same inputs always produce the same list, and running it again
/// on its own output changes nothing. Both sorts are stable.
pub fn filter_products(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut items: Vec<Product> = products
        .iter()
        .filter(|p| query.category.matches(p))
        .filter(|p| match &needle {
            Some(needle) => p.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .cloned()
        .collect();

    match query.sort {
        SortOption::Newest => items.sort_by_key(|p| !p.is_new()),
        SortOption::PriceLowHigh => items.sort_by_key(|p| p.price),
        SortOption::PriceHighLow => items.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_products;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn newest_moves_flagged_items_first_and_keeps_order() {
        let mut products = seed_products();
        products[3].is_new = Some(true);
        let sorted = filter_products(&products, &CatalogQuery::default());
        assert_eq!(ids(&sorted), vec!["1", "4", "2", "3", "5", "6"]);
    }

    #[test]
    fn search_matches_name_substring() {
        let query = CatalogQuery {
            search: Some("  T500 ".to_string()),
            ..CatalogQuery::default()
        };
        let found = filter_products(&seed_products(), &query);
        assert_eq!(ids(&found), vec!["3"]);
    }

    #[test]
    fn blank_search_is_ignored() {
        let query = CatalogQuery {
            search: Some("   ".to_string()),
            ..CatalogQuery::default()
        };
        assert_eq!(filter_products(&seed_products(), &query).len(), 6);
    }

    #[test]
    fn category_filter_parses_all() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "beauty".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Beauty))
        );
    }

    #[test]
    fn sort_option_accepts_aliases() {
        assert_eq!("price-asc".parse::<SortOption>(), Ok(SortOption::PriceLowHigh));
        assert_eq!("price_desc".parse::<SortOption>(), Ok(SortOption::PriceHighLow));
        assert!("popular".parse::<SortOption>().is_err());
    }
}
