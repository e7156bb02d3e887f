//! Checkout: form validation, simulated payment, order placement.

mod payment;

pub use payment::SimulatedGateway;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CheckoutConfig;
use crate::domain::{CartSummary, Order, OrderDraft, PaymentMethod, PaymentStatus, User};
use crate::store::Store;

/// `userId` recorded on orders placed without a logged-in user.
pub const GUEST_USER_ID: &str = "guest";

/// Why a checkout submission was refused. The store is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("A payment PIN is required for {method}")]
    MissingPin { method: PaymentMethod },
}

impl CheckoutError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyCart => "empty_cart",
            Self::MissingField { .. } => "missing_field",
            Self::MissingPin { .. } => "missing_pin",
        }
    }
}

/// Shipping details and payment choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// Wallet PIN. Only checked for presence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

impl CheckoutForm {
    /// Form as first shown: filled from the current user where possible,
    /// bKash selected.
    pub fn prefilled(user: Option<&User>, default_city: &str) -> Self {
        Self {
            name: user.map(|u| u.name.clone()).unwrap_or_default(),
            phone: user.map(|u| u.phone.clone()).unwrap_or_default(),
            address: user.and_then(|u| u.address.clone()).unwrap_or_default(),
            city: default_city.to_string(),
            payment_method: PaymentMethod::default(),
            pin: None,
        }
    }

    pub fn shipping_address(&self) -> String {
        format!("{}, {}", self.address.trim(), self.city.trim())
    }

    fn validate(&self) -> Result<(), CheckoutError> {
        let required = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField { field });
            }
        }

        if self.payment_method.is_prepaid()
            && self.pin.as_deref().map(str::trim).unwrap_or("").is_empty()
        {
            return Err(CheckoutError::MissingPin {
                method: self.payment_method,
            });
        }
        Ok(())
    }
}

/// Places orders from the current cart.
#[derive(Clone)]
pub struct Checkout {
    store: Store,
    gateway: SimulatedGateway,
    shipping_fee: u64,
    default_city: String,
}

impl Checkout {
    pub fn new(store: Store, config: &CheckoutConfig) -> Self {
        Self {
            store,
            gateway: SimulatedGateway::new(Duration::from_millis(config.payment_delay_ms)),
            shipping_fee: config.shipping_fee,
            default_city: config.default_city.clone(),
        }
    }

    pub fn shipping_fee(&self) -> u64 {
        self.shipping_fee
    }

    /// Summary of the cart as it stands.
    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.store.cart(), self.shipping_fee)
    }

    pub fn prefilled_form(&self) -> CheckoutForm {
        CheckoutForm::prefilled(self.store.user().as_ref(), &self.default_city)
    }

    /// Validates the form, runs the simulated payment for wallet methods,
    /// and places the order.
    ///
    /// The cart is captured when this is called; the order records those
    /// items even if the cart changes during the payment delay. Placing the
    /// order clears the cart.
    pub async fn submit(&self, form: CheckoutForm) -> Result<Order, CheckoutError> {
        let snapshot = self.store.snapshot();
        if snapshot.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        form.validate()?;

        let summary = CartSummary::of(&snapshot.cart, self.shipping_fee);

        let (payment_status, transaction_id) = if form.payment_method.is_prepaid() {
            let status = self
                .gateway
                .settle(form.payment_method, summary.total)
                .await;
            (status, Some(format!("TXN-{}", self.store.tick())))
        } else {
            (PaymentStatus::Unpaid, None)
        };

        let draft = OrderDraft {
            user_id: snapshot
                .user
                .as_ref()
                .map(|u| u.id.clone())
                .unwrap_or_else(|| GUEST_USER_ID.to_string()),
            items: snapshot.cart,
            total: summary.total,
            payment_method: form.payment_method,
            payment_status,
            shipping_address: form.shipping_address(),
            transaction_id,
        };

        Ok(self.store.place_order(draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    #[test]
    fn prefilled_form_uses_user_details() {
        let user = User::synthesize("7".to_string(), "rahim@mail.test", Role::Customer);
        let form = CheckoutForm::prefilled(Some(&user), "Dhaka");
        assert_eq!(form.name, "Rahim Ahmed");
        assert_eq!(form.phone, "01700000000");
        assert_eq!(form.address, "Dhaka, Bangladesh");
        assert_eq!(form.payment_method, PaymentMethod::BKash);
    }

    #[test]
    fn anonymous_form_is_blank_except_city() {
        let form = CheckoutForm::prefilled(None, "Chattogram");
        assert!(form.name.is_empty());
        assert_eq!(form.city, "Chattogram");
    }

    #[test]
    fn wallet_without_pin_is_invalid() {
        let mut form = CheckoutForm::prefilled(None, "Dhaka");
        form.name = "Karim".to_string();
        form.phone = "01800000000".to_string();
        form.address = "House 3".to_string();
        form.pin = Some("  ".to_string());
        assert_eq!(
            form.validate(),
            Err(CheckoutError::MissingPin {
                method: PaymentMethod::BKash
            })
        );

        form.payment_method = PaymentMethod::Cod;
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn shipping_address_joins_city() {
        let mut form = CheckoutForm::prefilled(None, "Sylhet");
        form.address = "Zindabazar ".to_string();
        assert_eq!(form.shipping_address(), "Zindabazar, Sylhet");
    }
}
