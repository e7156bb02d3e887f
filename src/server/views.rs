//! JSON view-models, one per storefront page.

use serde::Serialize;

use crate::admin::DashboardStats;
use crate::catalog::SortOption;
use crate::checkout::CheckoutForm;
use crate::domain::{
    item_count, CartItem, CartSummary, Category, Order, OrderStatus, Product, Theme, User,
};
use crate::store::{Outcome, StoreState};

/// Navigation bar data shown on every page except the admin panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavChrome {
    pub cart_count: u32,
    pub user_name: Option<String>,
    pub is_admin: bool,
    pub theme: Theme,
}

impl NavChrome {
    pub fn of(state: &StoreState) -> Self {
        Self {
            cart_count: item_count(&state.cart),
            user_name: state.user.as_ref().map(|u| u.name.clone()),
            is_admin: state.is_admin(),
            theme: state.theme,
        }
    }
}

/// A page: route name, optional chrome, and the page body flattened in.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub route: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome: Option<NavChrome>,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Page<T> {
    pub fn with_chrome(route: &'static str, state: &StoreState, body: T) -> Self {
        Self {
            route,
            chrome: Some(NavChrome::of(state)),
            body,
        }
    }

    /// The admin panel renders without the storefront navigation.
    pub fn bare(route: &'static str, body: T) -> Self {
        Self {
            route,
            chrome: None,
            body,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    #[serde(flatten)]
    pub product: Product,
    pub discount_percent: Option<u8>,
    pub in_stock: bool,
}

impl From<Product> for ProductCard {
    fn from(product: Product) -> Self {
        Self {
            discount_percent: product.discount_percent(),
            in_stock: product.in_stock(),
            product,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub slug: &'static str,
    pub label: &'static str,
}

pub fn category_options() -> Vec<CategoryOption> {
    Category::all()
        .iter()
        .map(|c| CategoryOption {
            slug: c.slug(),
            label: c.label(),
        })
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub categories: Vec<CategoryOption>,
    /// `None` means all categories.
    pub selected_category: Option<&'static str>,
    pub sort: SortOption,
    pub search: Option<String>,
    pub count: usize,
    pub products: Vec<ProductCard>,
}

#[derive(Debug, Serialize)]
pub struct ProductDetailView {
    pub product: ProductCard,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CartItem,
    pub line_total: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub item_count: u32,
    pub summary: CartSummary,
}

impl CartView {
    pub fn of(cart: &[CartItem], shipping_fee: u64) -> Self {
        Self {
            items: cart
                .iter()
                .cloned()
                .map(|item| CartLine {
                    line_total: item.line_total(),
                    item,
                })
                .collect(),
            item_count: item_count(cart),
            summary: CartSummary::of(cart, shipping_fee),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutView {
    pub form: CheckoutForm,
    pub cart: CartView,
}

#[derive(Debug, Serialize)]
pub struct LoginView {
    pub user: Option<User>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminView {
    pub stats: DashboardStats,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_statuses: &'static [OrderStatus],
}

/// Body of every successful mutation.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub outcome: &'static str,
    pub chrome: NavChrome,
}

impl MutationResponse {
    pub fn new(outcome: &Outcome, state: &StoreState) -> Self {
        Self {
            outcome: outcome.as_str(),
            chrome: NavChrome::of(state),
        }
    }
}
