//! Admin panel: dashboard numbers and the new-product form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Category, Order, Product};

/// Stock given to a new product when the form leaves it out.
pub const DEFAULT_NEW_STOCK: u32 = 10;

/// Highest price, in taka, the product form accepts.
pub const MAX_PRICE: u64 = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_sales: u64,
    pub total_orders: usize,
    pub product_count: usize,
}

impl DashboardStats {
    pub fn compute(products: &[Product], orders: &[Order]) -> Self {
        Self {
            total_sales: orders
                .iter()
                .fold(0u64, |sum, o| sum.saturating_add(o.total)),
            total_orders: orders.len(),
            product_count: products.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductFormError {
    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Price must be greater than zero")]
    InvalidPrice,

    #[error("Price must be at most {max} (got {price})")]
    PriceTooHigh { price: u64, max: u64 },
}

/// Admin "add product" form. Name, price and image are required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductForm {
    pub name: String,
    pub price: u64,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub category: Option<Category>,
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewProductForm {
    /// Builds the product. New products start with no rating and no reviews.
    pub fn into_product(self, id: String) -> Result<Product, ProductFormError> {
        if self.name.trim().is_empty() {
            return Err(ProductFormError::MissingField { field: "name" });
        }
        if self.price == 0 {
            return Err(ProductFormError::InvalidPrice);
        }
        if self.price > MAX_PRICE {
            return Err(ProductFormError::PriceTooHigh {
                price: self.price,
                max: MAX_PRICE,
            });
        }
        if self.image.trim().is_empty() {
            return Err(ProductFormError::MissingField { field: "image" });
        }

        Ok(Product {
            id,
            name: self.name.trim().to_string(),
            price: self.price,
            original_price: None,
            category: self.category.unwrap_or(Category::Panjabi),
            image: self.image.trim().to_string(),
            description: self.description.unwrap_or_default(),
            stock: self.stock.unwrap_or(DEFAULT_NEW_STOCK),
            rating: 0.0,
            reviews: 0,
            is_new: None,
        })
    }
}
