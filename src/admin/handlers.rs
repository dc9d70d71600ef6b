//! Admin form handlers
//!
//! Mutating endpoints run one admin operation and redirect to the tab that
//! shows its outcome.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::{Deserialize, Deserializer};
use tracing::warn;

use super::{
    models::{AdminTab, Confirmation},
    render,
};
use crate::{
    api::models::{OrderStatus, ProductForm},
    state::SharedState,
};

/// Creates routes for admin operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/admin/product-form/open", post(open_create))
        .route("/admin/product-form/cancel", post(cancel_create))
        .route("/admin/editor/cancel", post(cancel_edit))
        .route("/admin/products", post(create_product))
        .route("/admin/products/:id", post(update_product))
        .route("/admin/products/:id/edit", post(edit_product))
        .route(
            "/admin/products/:id/delete",
            get(confirm_delete).post(delete_product),
        )
        .route("/admin/orders/:id/status", post(update_order_status))
        .route("/admin/sample-order", post(create_sample_order))
}

/// Product editor submission. Unchecked checkboxes are absent from the body.
#[derive(Debug, Deserialize)]
pub struct ProductFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default, deserialize_with = "checkbox")]
    pub featured: bool,
}

impl From<ProductFormInput> for ProductForm {
    fn from(input: ProductFormInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            image_url: input.image_url,
            stock: input.stock,
            featured: input.featured,
        }
    }
}

fn checkbox<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = String::deserialize(deserializer)?;
    Ok(matches!(value.as_str(), "true" | "on" | "1"))
}

/// Body of `POST /admin/products/:id/delete`
#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    #[serde(default)]
    pub confirm: String,
}

/// Body of `POST /admin/orders/:id/status`
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

fn products_tab() -> Redirect {
    Redirect::to(&AdminTab::Products.href())
}

/// Endpoint: POST /admin/product-form/open
async fn open_create(State(state): State<SharedState>) -> impl IntoResponse {
    state.admin.open_create().await;
    products_tab()
}

/// Endpoint: POST /admin/product-form/cancel
async fn cancel_create(State(state): State<SharedState>) -> impl IntoResponse {
    state.admin.cancel_create().await;
    products_tab()
}

/// Endpoint: POST /admin/editor/cancel
async fn cancel_edit(State(state): State<SharedState>) -> impl IntoResponse {
    state.admin.cancel_edit().await;
    products_tab()
}

/// Endpoint: POST /admin/products
async fn create_product(
    State(state): State<SharedState>,
    Form(input): Form<ProductFormInput>,
) -> impl IntoResponse {
    state.admin.set_form(input.into()).await;
    state.admin.create_product().await;
    products_tab()
}

/// Endpoint: POST /admin/products/:id/edit
async fn edit_product(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.admin.product_id(&id).await {
        Some(product_id) => state.admin.edit_product(&product_id).await,
        None => warn!("Cannot edit product {id}: not listed"),
    }
    products_tab()
}

/// Endpoint: POST /admin/products/:id
/// Saves the edit form. Ignored unless the path names the selected product.
async fn update_product(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(input): Form<ProductFormInput>,
) -> impl IntoResponse {
    match state.admin.product_id(&id).await {
        Some(product_id) => state.admin.update_product(&product_id, input.into()).await,
        None => warn!("Cannot save product {id}: not listed"),
    }
    products_tab()
}

/// Endpoint: GET /admin/products/:id/delete
async fn confirm_delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let snapshot = state.admin.snapshot().await;

    Html(render::delete_confirmation(&id, snapshot.find_product(&id)))
}

/// Endpoint: POST /admin/products/:id/delete
async fn delete_product(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<ConfirmForm>,
) -> impl IntoResponse {
    let confirmation = Confirmation::from_answer(&form.confirm);

    match state.admin.product_id(&id).await {
        Some(product_id) => state.admin.delete_product(&product_id, confirmation).await,
        None => warn!("Cannot delete product {id}: not listed"),
    }
    products_tab()
}

/// Endpoint: POST /admin/orders/:id/status
async fn update_order_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> impl IntoResponse {
    let Some(status) = OrderStatus::parse_selectable(&form.status) else {
        warn!("Ignoring unknown order status {:?}", form.status);
        return Redirect::to(&AdminTab::Orders.href());
    };

    match state.admin.order_id(&id).await {
        Some(order_id) => state.admin.update_order_status(&order_id, &status).await,
        None => warn!("Cannot update order {id}: not listed"),
    }
    Redirect::to(&AdminTab::Orders.href())
}

/// Endpoint: POST /admin/sample-order
async fn create_sample_order(State(state): State<SharedState>) -> impl IntoResponse {
    state.admin.create_sample_order().await;
    Redirect::to(&AdminTab::Orders.href())
}
