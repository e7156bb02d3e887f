//! The store service handed to every consumer.

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use super::clock::{Clock, SystemClock};
use super::intent::StoreIntent;
use super::outcome::{Outcome, Rejection};
use super::reducer::StoreReducer;
use super::state::StoreState;
use crate::domain::{
    CartItem, Order, OrderDraft, OrderStatus, Product, Role, Theme, User,
};
use crate::mvi::Reducer;
use crate::storage::{KeyValueStorage, Persistence, StorageError};

/// Errors that can occur when opening a store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to restore persisted state: {0}")]
    Hydrate(#[from] StorageError),
}

/// Shared handle to the storefront state.
///
/// Cloning is cheap and every clone sees the same state. All mutations go
/// through [`Store::dispatch`], which reduces and mirrors to storage under a
/// single write lock, so there is exactly one writer at a time.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<StoreState>>,
    persistence: Persistence,
    clock: Arc<dyn Clock>,
}

impl Store {
    /// Opens a store over `storage` with the system clock, restoring any
    /// persisted cart, orders, user and theme.
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Result<Self, StoreError> {
        Self::open_with_clock(storage, Arc::new(SystemClock::new()))
    }

    pub fn open_with_clock(
        storage: Arc<dyn KeyValueStorage>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StoreError> {
        Self::from_state(StoreState::default(), storage, clock)
    }

    /// Opens with a caller-provided starting state (persisted slices still
    /// override it).
    pub fn from_state(
        mut state: StoreState,
        storage: Arc<dyn KeyValueStorage>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StoreError> {
        let persistence = Persistence::new(storage);
        persistence.hydrate(&mut state)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(state)),
            persistence,
            clock,
        })
    }

    /// Runs `intent` through the reducer and mirrors whatever changed.
    pub fn dispatch(&self, intent: StoreIntent) -> Outcome {
        let name = intent.name();
        let mut guard = self.inner.write();
        let before = guard.clone();
        let (after, outcome) = StoreReducer::reduce(before.clone(), intent);

        if outcome.is_applied() {
            self.persistence.mirror(&before, &after);
            *guard = after;
        }
        drop(guard);

        match &outcome {
            Outcome::Rejected(reason) => {
                tracing::info!(intent = name, reason = %reason, "Store mutation rejected")
            }
            other => tracing::debug!(intent = name, outcome = other.as_str(), "Store mutation"),
        }
        outcome
    }

    /// Consistent copy of the whole state.
    pub fn snapshot(&self) -> StoreState {
        self.inner.read().clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.inner.read().products.clone()
    }

    pub fn product(&self, product_id: &str) -> Option<Product> {
        self.inner.read().product(product_id).cloned()
    }

    pub fn cart(&self) -> Vec<CartItem> {
        self.inner.read().cart.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.read().user.clone()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.inner.read().orders.clone()
    }

    pub fn theme(&self) -> Theme {
        self.inner.read().theme
    }

    /// Fails with [`Rejection::Unauthorized`] unless the current user is an
    /// admin. For admin reads, and for checks that must come before any
    /// other validation.
    pub fn require_admin(&self, operation: &'static str) -> Result<(), Rejection> {
        if self.inner.read().is_admin() {
            Ok(())
        } else {
            Err(Rejection::Unauthorized { operation })
        }
    }

    /// Next unique tick from the store's clock, for ids minted outside the
    /// store (transaction ids).
    pub fn tick(&self) -> i64 {
        self.clock.tick()
    }

    pub fn add_to_cart(&self, product: &Product) -> Outcome {
        self.dispatch(StoreIntent::AddToCart {
            product: product.clone(),
        })
    }

    /// Looks the product up in the catalog first.
    pub fn add_to_cart_by_id(&self, product_id: &str) -> Outcome {
        match self.product(product_id) {
            Some(product) => self.dispatch(StoreIntent::AddToCart { product }),
            None => Outcome::Rejected(Rejection::ProductNotFound {
                product_id: product_id.to_string(),
            }),
        }
    }

    pub fn remove_from_cart(&self, product_id: &str) -> Outcome {
        self.dispatch(StoreIntent::RemoveFromCart {
            product_id: product_id.to_string(),
        })
    }

    pub fn update_quantity(&self, product_id: &str, quantity: i64) -> Outcome {
        self.dispatch(StoreIntent::UpdateQuantity {
            product_id: product_id.to_string(),
            quantity,
        })
    }

    pub fn clear_cart(&self) -> Outcome {
        self.dispatch(StoreIntent::ClearCart)
    }

    /// Replaces the current user with a synthesized one. No credentials are
    /// checked; the role is a label.
    pub fn login(&self, identifier: &str, role: Role) -> Outcome {
        let user = User::synthesize(self.clock.tick().to_string(), identifier, role);
        self.dispatch(StoreIntent::Login { user })
    }

    pub fn logout(&self) -> Outcome {
        self.dispatch(StoreIntent::Logout)
    }

    /// Stamps the draft with an id and timestamp, prepends it, and clears the
    /// cart. Returns the stored order.
    pub fn place_order(&self, draft: OrderDraft) -> Order {
        let tick = self.clock.tick();
        let order = Order::from_draft(draft, format!("ORD-{}", tick), self.clock.at(tick));
        self.dispatch(StoreIntent::PlaceOrder {
            order: order.clone(),
        });
        tracing::info!(
            order_id = %order.id,
            total = order.total,
            payment_method = order.payment_method.as_str(),
            items = order.items.len(),
            "Order placed"
        );
        order
    }

    pub fn update_order_status(&self, order_id: &str, status: OrderStatus) -> Outcome {
        self.dispatch(StoreIntent::UpdateOrderStatus {
            order_id: order_id.to_string(),
            status,
        })
    }

    pub fn add_product(&self, product: Product) -> Outcome {
        self.dispatch(StoreIntent::AddProduct { product })
    }

    pub fn delete_product(&self, product_id: &str) -> Outcome {
        self.dispatch(StoreIntent::DeleteProduct {
            product_id: product_id.to_string(),
        })
    }

    pub fn toggle_theme(&self) -> Theme {
        self.dispatch(StoreIntent::ToggleTheme);
        self.theme()
    }
}
