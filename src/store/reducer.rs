//! Reducer for storefront state.

use crate::domain::CartItem;
use crate::mvi::Reducer;

use super::intent::StoreIntent;
use super::outcome::{Outcome, Rejection};
use super::state::StoreState;

/// Substring an admin-panel identifier must contain. A label check, not auth.
const ADMIN_MARKER: &str = "admin";

/// Reducer for every store mutation.
///
/// Pure function: persistence and logging are handled by the caller around
/// the dispatch call. A rejected intent returns the state untouched.
pub struct StoreReducer;

impl Reducer for StoreReducer {
    type Model = StoreState;
    type Intent = StoreIntent;
    type Outcome = Outcome;

    fn reduce(mut state: Self::Model, intent: Self::Intent) -> (Self::Model, Self::Outcome) {
        let outcome = match intent {
            StoreIntent::AddToCart { product } => {
                match state.cart.iter_mut().find(|item| item.id() == product.id) {
                    Some(item) => item.quantity = item.quantity.saturating_add(1),
                    None => state.cart.push(CartItem::new(product)),
                }
                Outcome::Applied
            }

            StoreIntent::RemoveFromCart { product_id } => {
                let before = state.cart.len();
                state.cart.retain(|item| item.id() != product_id);
                changed(state.cart.len() != before)
            }

            StoreIntent::UpdateQuantity {
                product_id,
                quantity,
            } => {
                if quantity < 1 {
                    Outcome::Rejected(Rejection::QuantityBelowMinimum { quantity })
                } else {
                    match u32::try_from(quantity) {
                        Err(_) => Outcome::Rejected(Rejection::QuantityAboveMaximum {
                            quantity,
                            max: u32::MAX,
                        }),
                        Ok(quantity) => {
                            match state.cart.iter_mut().find(|item| item.id() == product_id) {
                                Some(item) if item.quantity != quantity => {
                                    item.quantity = quantity;
                                    Outcome::Applied
                                }
                                _ => Outcome::Unchanged,
                            }
                        }
                    }
                }
            }

            StoreIntent::ClearCart => {
                let had_items = !state.cart.is_empty();
                state.cart.clear();
                changed(had_items)
            }

            StoreIntent::Login { user } => {
                if user.is_admin() && !user.email.contains(ADMIN_MARKER) {
                    Outcome::Rejected(Rejection::AdminAccessDenied {
                        identifier: user.email,
                    })
                } else {
                    state.user = Some(user);
                    Outcome::Applied
                }
            }

            StoreIntent::Logout => changed(state.user.take().is_some()),

            StoreIntent::PlaceOrder { order } => {
                state.orders.insert(0, order);
                state.cart.clear();
                Outcome::Applied
            }

            StoreIntent::UpdateOrderStatus { order_id, status } => {
                if !state.is_admin() {
                    Outcome::Rejected(Rejection::Unauthorized {
                        operation: "update_order_status",
                    })
                } else {
                    match state.orders.iter_mut().find(|o| o.id == order_id) {
                        Some(order) if order.status != status => {
                            order.status = status;
                            Outcome::Applied
                        }
                        _ => Outcome::Unchanged,
                    }
                }
            }

            StoreIntent::AddProduct { product } => {
                if !state.is_admin() {
                    Outcome::Rejected(Rejection::Unauthorized {
                        operation: "add_product",
                    })
                } else {
                    state.products.insert(0, product);
                    Outcome::Applied
                }
            }

            StoreIntent::DeleteProduct { product_id } => {
                if !state.is_admin() {
                    Outcome::Rejected(Rejection::Unauthorized {
                        operation: "delete_product",
                    })
                } else {
                    let before = state.products.len();
                    state.products.retain(|p| p.id != product_id);
                    changed(state.products.len() != before)
                }
            }

            StoreIntent::ToggleTheme => {
                state.theme = state.theme.toggled();
                Outcome::Applied
            }
        };

        (state, outcome)
    }
}

fn changed(did_change: bool) -> Outcome {
    if did_change {
        Outcome::Applied
    } else {
        Outcome::Unchanged
    }
}
