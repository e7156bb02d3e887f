//! Request handlers. Each reads store state or dispatches one mutation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::views::{
    category_options, AdminView, CartView, CatalogView, CheckoutView, LoginView,
    MutationResponse, Page, ProductCard, ProductDetailView,
};
use super::AppState;
use crate::admin::{DashboardStats, NewProductForm};
use crate::catalog::{filter_products, CatalogQuery, CategoryFilter, SortOption};
use crate::checkout::CheckoutForm;
use crate::domain::{Order, OrderStatus, Role, Theme};
use crate::store::Outcome;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Turns a store outcome into a response. Rejections become errors.
fn respond(app: &AppState, outcome: Outcome) -> ApiResult<MutationResponse> {
    match outcome {
        Outcome::Rejected(reason) => Err(reason.into()),
        other => Ok(Json(MutationResponse::new(&other, &app.store.snapshot()))),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub category: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
}

impl CatalogParams {
    fn into_query(self) -> Result<CatalogQuery, ApiError> {
        let category = match self.category.as_deref() {
            Some(raw) => raw
                .parse::<CategoryFilter>()
                .map_err(|e| ApiError::InvalidQuery(e.to_string()))?,
            None => CategoryFilter::All,
        };
        let sort = match self.sort.as_deref() {
            Some(raw) => raw.parse::<SortOption>().map_err(ApiError::InvalidQuery)?,
            None => SortOption::default(),
        };
        Ok(CatalogQuery {
            category,
            sort,
            search: self.search,
        })
    }
}

pub async fn catalog(
    State(app): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> ApiResult<Page<CatalogView>> {
    let query = params.into_query()?;
    let state = app.store.snapshot();
    let products: Vec<ProductCard> = filter_products(&state.products, &query)
        .into_iter()
        .map(ProductCard::from)
        .collect();

    let selected_category = match query.category {
        CategoryFilter::All => None,
        CategoryFilter::Only(category) => Some(category.slug()),
    };

    let view = CatalogView {
        categories: category_options(),
        selected_category,
        sort: query.sort,
        search: query.search,
        count: products.len(),
        products,
    };
    Ok(Json(Page::with_chrome("catalog", &state, view)))
}

pub async fn product_detail(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Page<ProductDetailView>> {
    let state = app.store.snapshot();
    let product = state
        .product(&id)
        .cloned()
        .ok_or(ApiError::NotFound { what: "Product", id })?;
    let view = ProductDetailView {
        product: product.into(),
    };
    Ok(Json(Page::with_chrome("product", &state, view)))
}

pub async fn cart(State(app): State<AppState>) -> ApiResult<Page<CartView>> {
    let state = app.store.snapshot();
    let view = CartView::of(&state.cart, app.checkout.shipping_fee());
    Ok(Json(Page::with_chrome("cart", &state, view)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: String,
}

pub async fn add_cart_item(
    State(app): State<AppState>,
    Json(req): Json<AddItemRequest>,
) -> ApiResult<MutationResponse> {
    let outcome = app.store.add_to_cart_by_id(&req.product_id);
    respond(&app, outcome)
}

#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: i64,
}

pub async fn update_cart_item(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<QuantityRequest>,
) -> ApiResult<MutationResponse> {
    let outcome = app.store.update_quantity(&id, req.quantity);
    respond(&app, outcome)
}

pub async fn remove_cart_item(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MutationResponse> {
    let outcome = app.store.remove_from_cart(&id);
    respond(&app, outcome)
}

pub async fn clear_cart(State(app): State<AppState>) -> ApiResult<MutationResponse> {
    let outcome = app.store.clear_cart();
    respond(&app, outcome)
}

pub async fn checkout_page(State(app): State<AppState>) -> ApiResult<Page<CheckoutView>> {
    let state = app.store.snapshot();
    let view = CheckoutView {
        form: app.checkout.prefilled_form(),
        cart: CartView::of(&state.cart, app.checkout.shipping_fee()),
    };
    Ok(Json(Page::with_chrome("checkout", &state, view)))
}

pub async fn submit_checkout(
    State(app): State<AppState>,
    Json(form): Json<CheckoutForm>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = app.checkout.submit(form).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn login_page(State(app): State<AppState>) -> ApiResult<Page<LoginView>> {
    let state = app.store.snapshot();
    let view = LoginView {
        user: state.user.clone(),
    };
    Ok(Json(Page::with_chrome("login", &state, view)))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    #[serde(default)]
    pub role: Role,
}

pub async fn login(
    State(app): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<MutationResponse> {
    let outcome = app.store.login(&req.identifier, req.role);
    respond(&app, outcome)
}

pub async fn logout(State(app): State<AppState>) -> ApiResult<MutationResponse> {
    let outcome = app.store.logout();
    respond(&app, outcome)
}

pub async fn admin_dashboard(State(app): State<AppState>) -> ApiResult<Page<AdminView>> {
    app.store.require_admin("view_dashboard")?;
    let state = app.store.snapshot();
    let view = AdminView {
        stats: DashboardStats::compute(&state.products, &state.orders),
        products: state.products,
        orders: state.orders,
        order_statuses: OrderStatus::all(),
    };
    Ok(Json(Page::bare("admin", view)))
}

pub async fn admin_add_product(
    State(app): State<AppState>,
    Json(form): Json<NewProductForm>,
) -> ApiResult<MutationResponse> {
    app.store.require_admin("add_product")?;
    let product = form.into_product(app.store.tick().to_string())?;
    let outcome = app.store.add_product(product);
    respond(&app, outcome)
}

pub async fn admin_delete_product(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MutationResponse> {
    let outcome = app.store.delete_product(&id);
    respond(&app, outcome)
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: OrderStatus,
}

pub async fn admin_update_order_status(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<StatusRequest>,
) -> ApiResult<MutationResponse> {
    let outcome = app.store.update_order_status(&id, req.status);
    respond(&app, outcome)
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

pub async fn toggle_theme(State(app): State<AppState>) -> ApiResult<ThemeResponse> {
    let theme = app.store.toggle_theme();
    Ok(Json(ThemeResponse { theme }))
}
