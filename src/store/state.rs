use crate::catalog::seed_products;
use crate::domain::{CartItem, Order, Product, Theme, User};
use crate::mvi::Model;

/// Everything the storefront knows, in one value.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    pub products: Vec<Product>,
    pub cart: Vec<CartItem>,
    pub user: Option<User>,
    pub orders: Vec<Order>,
    pub theme: Theme,
}

impl Default for StoreState {
    /// Seed catalog, nobody logged in, empty cart.
    fn default() -> Self {
        Self {
            products: seed_products(),
            cart: Vec::new(),
            user: None,
            orders: Vec::new(),
            theme: Theme::default(),
        }
    }
}

impl Model for StoreState {}

impl StoreState {
    /// State with no products at all. Mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            ..Self::default()
        }
    }

    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}
