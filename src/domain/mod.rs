//! Storefront data model.
//!
//! Field names serialize in camelCase so persisted slices match what the
//! browser storefront keeps in local storage.

mod cart;
mod order;
mod product;
mod user;

pub use cart::{item_count, CartItem, CartSummary};
pub use order::{Order, OrderDraft, OrderStatus, PaymentMethod, PaymentStatus};
pub use product::{Category, Product, UnknownCategory};
pub use user::{Role, User, PLACEHOLDER_ADDRESS, PLACEHOLDER_PHONE};

use serde::{Deserialize, Serialize};

/// Color scheme. Persisted as the plain strings `dark` / `light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Anything other than `dark` reads as light.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
