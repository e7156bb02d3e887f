use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product category.
///
/// Serialized as the Bengali display label so persisted carts and orders
/// stay readable by the storefront. `FromStr` also accepts the ASCII slug,
/// which is what query strings and the CLI use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "পাঞ্জাবি")]
    Panjabi,
    #[serde(rename = "শাড়ি")]
    Saree,
    #[serde(rename = "ইলেকট্রনিক্স")]
    Electronics,
    #[serde(rename = "মোবাইল")]
    Mobile,
    #[serde(rename = "ঘড়ি")]
    Watch,
    #[serde(rename = "সৌন্দর্য চর্চা")]
    Beauty,
}

impl Category {
    /// All variants in display order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Panjabi,
            Self::Saree,
            Self::Electronics,
            Self::Mobile,
            Self::Watch,
            Self::Beauty,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Panjabi => "পাঞ্জাবি",
            Self::Saree => "শাড়ি",
            Self::Electronics => "ইলেকট্রনিক্স",
            Self::Mobile => "মোবাইল",
            Self::Watch => "ঘড়ি",
            Self::Beauty => "সৌন্দর্য চর্চা",
        }
    }

    /// Stable ASCII key. Once published, do not rename.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Panjabi => "panjabi",
            Self::Saree => "saree",
            Self::Electronics => "electronics",
            Self::Mobile => "mobile",
            Self::Watch => "watch",
            Self::Beauty => "beauty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.slug().eq_ignore_ascii_case(trimmed) || c.label() == trimmed)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Price in whole taka.
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    pub category: Category,
    pub image: String,
    pub description: String,
    pub stock: u32,
    pub rating: f32,
    pub reviews: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl Product {
    pub fn is_new(&self) -> bool {
        self.is_new.unwrap_or(false)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Rounded discount against `original_price`, if there is one.
    pub fn discount_percent(&self) -> Option<u8> {
        let original = self.original_price?;
        if original == 0 || original <= self.price {
            return None;
        }
        let pct = ((original - self.price) as f64 / original as f64 * 100.0).round();
        Some(pct as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: u64, original: Option<u64>) -> Product {
        Product {
            id: "p".to_string(),
            name: "Panjabi".to_string(),
            price,
            original_price: original,
            category: Category::Panjabi,
            image: String::new(),
            description: String::new(),
            stock: 1,
            rating: 4.0,
            reviews: 0,
            is_new: None,
        }
    }

    #[test]
    fn discount_is_rounded() {
        assert_eq!(product(1250, Some(1800)).discount_percent(), Some(31));
        assert_eq!(product(850, Some(1200)).discount_percent(), Some(29));
    }

    #[test]
    fn no_discount_without_higher_original() {
        assert_eq!(product(1250, None).discount_percent(), None);
        assert_eq!(product(1250, Some(1000)).discount_percent(), None);
    }

    #[test]
    fn category_parses_slug_and_label() {
        assert_eq!("watch".parse::<Category>(), Ok(Category::Watch));
        assert_eq!("Saree".parse::<Category>(), Ok(Category::Saree));
        assert_eq!("মোবাইল".parse::<Category>(), Ok(Category::Mobile));
        assert!("furniture".parse::<Category>().is_err());
    }

    #[test]
    fn serializes_with_camel_case_and_label() {
        let json = serde_json::to_value(product(1250, Some(1800))).unwrap();
        assert_eq!(json["originalPrice"], 1800);
        assert_eq!(json["category"], "পাঞ্জাবি");
        assert!(json.get("isNew").is_none());
    }
}
