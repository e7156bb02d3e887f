use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers;
use super::health::health;
use super::AppState;

/// Storefront routes. `/admin` renders without navigation chrome.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::catalog))
        .route("/product/{id}", get(handlers::product_detail))
        .route("/cart", get(handlers::cart).delete(handlers::clear_cart))
        .route("/cart/items", post(handlers::add_cart_item))
        .route(
            "/cart/items/{id}",
            put(handlers::update_cart_item).delete(handlers::remove_cart_item),
        )
        .route(
            "/checkout",
            get(handlers::checkout_page).post(handlers::submit_checkout),
        )
        .route("/login", get(handlers::login_page).post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/admin", get(handlers::admin_dashboard))
        .route("/admin/products", post(handlers::admin_add_product))
        .route("/admin/products/{id}", delete(handlers::admin_delete_product))
        .route(
            "/admin/orders/{id}/status",
            put(handlers::admin_update_order_status),
        )
        .route("/theme/toggle", post(handlers::toggle_theme))
        .route("/health", get(health))
        .with_state(state)
}
