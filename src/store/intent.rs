use crate::domain::{Order, OrderStatus, Product, User};
use crate::mvi::Intent;

/// A requested store mutation.
///
/// Values that need the clock (order ids, timestamps, user ids) are already
/// resolved here, so the reducer stays pure.
#[derive(Debug, Clone)]
pub enum StoreIntent {
    AddToCart { product: Product },
    RemoveFromCart { product_id: String },
    /// Signed so callers can pass whatever the user typed; below 1 is rejected.
    UpdateQuantity { product_id: String, quantity: i64 },
    ClearCart,
    Login { user: User },
    Logout,
    PlaceOrder { order: Order },
    UpdateOrderStatus { order_id: String, status: OrderStatus },
    AddProduct { product: Product },
    DeleteProduct { product_id: String },
    ToggleTheme,
}

impl Intent for StoreIntent {}

impl StoreIntent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddToCart { .. } => "add_to_cart",
            Self::RemoveFromCart { .. } => "remove_from_cart",
            Self::UpdateQuantity { .. } => "update_quantity",
            Self::ClearCart => "clear_cart",
            Self::Login { .. } => "login",
            Self::Logout => "logout",
            Self::PlaceOrder { .. } => "place_order",
            Self::UpdateOrderStatus { .. } => "update_order_status",
            Self::AddProduct { .. } => "add_product",
            Self::DeleteProduct { .. } => "delete_product",
            Self::ToggleTheme => "toggle_theme",
        }
    }
}
