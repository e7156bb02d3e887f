use serde::{Deserialize, Serialize};

use super::product::Product;

/// A product in the cart together with how many of it are wanted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Saturates instead of overflowing.
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Number of units in the cart (the navbar badge).
pub fn item_count(items: &[CartItem]) -> u32 {
    items
        .iter()
        .fold(0u32, |count, item| count.saturating_add(item.quantity))
}

/// Money breakdown for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub subtotal: u64,
    pub shipping: u64,
    pub total: u64,
}

impl CartSummary {
    /// Shipping is charged only when there is something to ship. Amounts
    /// saturate at `u64::MAX`.
    pub fn of(items: &[CartItem], shipping_fee: u64) -> Self {
        let subtotal = items
            .iter()
            .fold(0u64, |sum, item| sum.saturating_add(item.line_total()));
        let shipping = if subtotal > 0 { shipping_fee } else { 0 };
        Self {
            subtotal,
            shipping,
            total: subtotal.saturating_add(shipping),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_products;

    #[test]
    fn empty_cart_has_no_shipping() {
        let summary = CartSummary::of(&[], 60);
        assert_eq!(summary, CartSummary { subtotal: 0, shipping: 0, total: 0 });
    }

    #[test]
    fn summary_adds_flat_shipping() {
        let products = seed_products();
        let mut panjabi = CartItem::new(products[0].clone());
        panjabi.quantity = 2;
        let serum = CartItem::new(products[5].clone());

        let items = vec![panjabi, serum];
        let summary = CartSummary::of(&items, 60);
        assert_eq!(summary.subtotal, 1250 * 2 + 450);
        assert_eq!(summary.shipping, 60);
        assert_eq!(summary.total, 1250 * 2 + 450 + 60);
        assert_eq!(item_count(&items), 3);
    }

    #[test]
    fn huge_amounts_saturate_instead_of_overflowing() {
        let mut pricey = seed_products()[0].clone();
        pricey.price = u64::MAX / 2 + 1;
        let mut item = CartItem::new(pricey);
        item.quantity = 2;
        assert_eq!(item.line_total(), u64::MAX);

        let mut other = item.clone();
        other.quantity = u32::MAX;
        let items = vec![item, other];
        let summary = CartSummary::of(&items, 60);
        assert_eq!(summary.subtotal, u64::MAX);
        assert_eq!(summary.total, u64::MAX);
        assert_eq!(item_count(&items), u32::MAX);
    }

    #[test]
    fn cart_item_flattens_product_fields() {
        let item = CartItem::new(seed_products()[0].clone());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["price"], 1250);
    }
}
