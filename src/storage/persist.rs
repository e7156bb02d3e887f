use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{KeyValueStorage, StorageError};
use crate::domain::Theme;
use crate::store::StoreState;

/// Storage keys. These match what the browser storefront used; do not rename.
pub mod keys {
    pub const CART: &str = "cart";
    pub const USER: &str = "user";
    pub const ORDERS: &str = "orders";
    pub const THEME: &str = "theme";
}

/// Mirrors the persisted slices of [`StoreState`] (cart, orders, user,
/// theme) to storage, and reads them back at startup. Products are not
/// persisted.
#[derive(Clone)]
pub struct Persistence {
    storage: Arc<dyn KeyValueStorage>,
}

impl Persistence {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Overlays whatever is stored onto `state`. Absent keys keep the
    /// default; malformed JSON is an error rather than a silent reset.
    pub fn hydrate(&self, state: &mut StoreState) -> Result<(), StorageError> {
        if let Some(cart) = self.read_json(keys::CART)? {
            state.cart = cart;
        }
        if let Some(orders) = self.read_json(keys::ORDERS)? {
            state.orders = orders;
        }
        if let Some(user) = self.read_json(keys::USER)? {
            state.user = Some(user);
        }
        if let Some(theme) = self.storage.get(keys::THEME)? {
            state.theme = Theme::from_stored(theme.trim());
        }

        tracing::info!(
            cart_items = state.cart.len(),
            orders = state.orders.len(),
            logged_in = state.user.is_some(),
            theme = state.theme.as_str(),
            "Store hydrated"
        );
        Ok(())
    }

    /// Writes every slice that differs between `before` and `after`.
    ///
    /// Best-effort: a failed write is logged and the in-memory state stays
    /// authoritative.
    pub fn mirror(&self, before: &StoreState, after: &StoreState) {
        if before.cart != after.cart {
            self.report(keys::CART, self.write_json(keys::CART, &after.cart));
        }
        if before.orders != after.orders {
            self.report(keys::ORDERS, self.write_json(keys::ORDERS, &after.orders));
        }
        if before.user != after.user {
            let result = match &after.user {
                Some(user) => self.write_json(keys::USER, user),
                None => self.storage.remove(keys::USER),
            };
            self.report(keys::USER, result);
        }
        if before.theme != after.theme {
            self.report(
                keys::THEME,
                self.storage.set(keys::THEME, after.theme.as_str()),
            );
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.storage.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.storage.set(key, &encoded)
    }

    fn report(&self, key: &str, result: Result<(), StorageError>) {
        if let Err(e) = result {
            tracing::warn!(key, error = %e, "Failed to persist store slice");
        }
    }
}
