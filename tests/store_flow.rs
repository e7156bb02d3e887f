mod common;

use amarshop::domain::{Category, CartSummary, OrderStatus, Role, Theme};
use amarshop::storage::{keys, KeyValueStorage};
use amarshop::store::{Outcome, Rejection};
use common::{memory_store, product, reopen_file_store};

#[test]
fn test_adding_same_product_twice_increments_quantity() {
    let (store, _) = memory_store();
    let panjabi = store.product("1").unwrap();

    assert_eq!(store.add_to_cart(&panjabi), Outcome::Applied);
    assert_eq!(store.add_to_cart(&panjabi), Outcome::Applied);

    let cart = store.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].id(), "1");
    assert_eq!(cart[0].quantity, 2);
}

#[test]
fn test_cart_keeps_insertion_order() {
    let (store, _) = memory_store();
    store.add_to_cart_by_id("3");
    store.add_to_cart_by_id("1");
    store.add_to_cart_by_id("3");

    let cart = store.cart();
    let ids: Vec<&str> = cart.iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec!["3", "1"]);
}

#[test]
fn test_quantity_below_one_is_rejected_and_leaves_cart_alone() {
    let (store, _) = memory_store();
    store.add_to_cart_by_id("1");
    store.update_quantity("1", 3);

    for bad in [0, -1] {
        let outcome = store.update_quantity("1", bad);
        assert_eq!(
            outcome,
            Outcome::Rejected(Rejection::QuantityBelowMinimum { quantity: bad })
        );
        assert_eq!(store.cart()[0].quantity, 3);
    }
}

#[test]
fn test_update_quantity_for_absent_item_is_a_noop() {
    let (store, _) = memory_store();
    assert_eq!(store.update_quantity("2", 4), Outcome::Unchanged);
    assert!(store.cart().is_empty());
}

#[test]
fn test_add_unknown_product_is_rejected() {
    let (store, _) = memory_store();
    let outcome = store.add_to_cart_by_id("999");
    assert_eq!(outcome.rejection().map(Rejection::kind), Some("product_not_found"));
    assert!(store.cart().is_empty());
}

#[test]
fn test_remove_and_clear() {
    let (store, _) = memory_store();
    store.add_to_cart_by_id("1");
    store.add_to_cart_by_id("2");

    assert_eq!(store.remove_from_cart("1"), Outcome::Applied);
    assert_eq!(store.remove_from_cart("1"), Outcome::Unchanged);
    assert_eq!(store.cart().len(), 1);

    assert_eq!(store.clear_cart(), Outcome::Applied);
    assert_eq!(store.clear_cart(), Outcome::Unchanged);
    assert!(store.cart().is_empty());
}

#[test]
fn test_login_then_logout_removes_user_key() {
    let (store, storage) = memory_store();

    assert_eq!(store.login("rahim@example.com", Role::Customer), Outcome::Applied);
    assert!(storage.get(keys::USER).unwrap().is_some());
    let user = store.user().unwrap();
    assert_eq!(user.name, "Rahim Ahmed");
    assert_eq!(user.email, "rahim@example.com");

    assert_eq!(store.logout(), Outcome::Applied);
    assert!(store.user().is_none());
    assert_eq!(storage.get(keys::USER).unwrap(), None);
}

#[test]
fn test_admin_login_requires_admin_in_identifier() {
    let (store, _) = memory_store();

    let outcome = store.login("rahim@example.com", Role::Admin);
    assert!(outcome.is_rejected());
    assert!(store.user().is_none());

    assert_eq!(store.login("admin@amarshop.com", Role::Admin), Outcome::Applied);
    assert!(store.snapshot().is_admin());
}

#[test]
fn test_privileged_operations_need_admin() {
    let (store, _) = memory_store();
    store.login("rahim@example.com", Role::Customer);

    let outcome = store.delete_product("1");
    assert_eq!(
        outcome,
        Outcome::Rejected(Rejection::Unauthorized {
            operation: "delete_product"
        })
    );
    assert!(store.product("1").is_some());
}

#[test]
fn test_delete_missing_product_is_a_noop() {
    let (store, _) = memory_store();
    store.login("admin@amarshop.com", Role::Admin);

    let before = store.products();
    assert_eq!(store.delete_product("does-not-exist"), Outcome::Unchanged);
    assert_eq!(store.products(), before);

    assert_eq!(store.delete_product("6"), Outcome::Applied);
    assert_eq!(store.products().len(), before.len() - 1);
}

#[test]
fn test_update_order_status_as_admin() {
    let (store, _) = memory_store();
    store.add_to_cart_by_id("1");
    let order = store.place_order(amarshop::domain::OrderDraft {
        user_id: "guest".to_string(),
        items: store.cart(),
        total: 1310,
        payment_method: amarshop::domain::PaymentMethod::Cod,
        payment_status: amarshop::domain::PaymentStatus::Unpaid,
        shipping_address: "Road 1, Dhaka".to_string(),
        transaction_id: None,
    });
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.id.starts_with("ORD-"));

    store.login("admin@amarshop.com", Role::Admin);
    assert_eq!(
        store.update_order_status(&order.id, OrderStatus::Shipped),
        Outcome::Applied
    );
    assert_eq!(
        store.update_order_status(&order.id, OrderStatus::Shipped),
        Outcome::Unchanged
    );
    assert_eq!(
        store.update_order_status("ORD-0", OrderStatus::Delivered),
        Outcome::Unchanged
    );
    assert_eq!(store.orders()[0].status, OrderStatus::Shipped);
}

#[test]
fn test_huge_cart_totals_saturate() {
    let (store, _) = memory_store();
    store.login("admin@amarshop.com", Role::Admin);
    let big = product("big", "Gold Bar", u64::MAX / 2 + 1, Category::Watch);
    assert_eq!(store.add_product(big), Outcome::Applied);

    store.add_to_cart_by_id("big");
    store.add_to_cart_by_id("big");
    store.add_to_cart_by_id("1");

    let summary = CartSummary::of(&store.cart(), 60);
    assert_eq!(summary.subtotal, u64::MAX);
    assert_eq!(summary.shipping, 60);
    assert_eq!(summary.total, u64::MAX);
}

#[test]
fn test_admin_reads_need_admin() {
    let (store, _) = memory_store();
    assert_eq!(
        store.require_admin("view_dashboard"),
        Err(Rejection::Unauthorized {
            operation: "view_dashboard"
        })
    );

    store.login("admin@amarshop.com", Role::Admin);
    assert_eq!(store.require_admin("view_dashboard"), Ok(()));
}

#[test]
fn test_theme_toggle_persists_across_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = reopen_file_store(&dir);
    assert_eq!(store.theme(), Theme::Light);
    assert_eq!(store.toggle_theme(), Theme::Dark);

    let reopened = reopen_file_store(&dir);
    assert_eq!(reopened.theme(), Theme::Dark);
}

#[test]
fn test_clones_share_state() {
    let (store, _) = memory_store();
    let other = store.clone();
    other.add_to_cart_by_id("4");
    assert_eq!(store.cart().len(), 1);
}
