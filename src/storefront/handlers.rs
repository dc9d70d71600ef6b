//! Storefront form handlers
//!
//! Each handler runs one storefront operation and redirects back to the
//! screen, which then renders whatever state the operation left behind.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    routing::post,
    Form, Router,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::state::SharedState;

/// Creates routes for cart operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart/add", post(add_to_cart))
        .route("/cart/update", post(update_cart_item))
        .route("/cart/clear", post(clear_cart))
}

fn default_quantity() -> i64 {
    1
}

/// Body of `POST /cart/add`
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

/// Body of `POST /cart/update`
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Endpoint: POST /cart/add
async fn add_to_cart(
    State(state): State<SharedState>,
    Form(form): Form<AddToCartForm>,
) -> impl IntoResponse {
    match state.storefront.product_id(&form.product_id).await {
        Some(product_id) => {
            state
                .storefront
                .add_to_cart(&product_id, form.quantity)
                .await
        }
        None => debug!("add_to_cart: product {} not in catalog", form.product_id),
    }

    Redirect::to("/")
}

/// Endpoint: POST /cart/update
async fn update_cart_item(
    State(state): State<SharedState>,
    Form(form): Form<UpdateCartForm>,
) -> impl IntoResponse {
    match state.storefront.product_id(&form.product_id).await {
        Some(product_id) => {
            state
                .storefront
                .update_cart_item(&product_id, form.quantity)
                .await
        }
        None => warn!("Error updating cart: product {} not in catalog", form.product_id),
    }

    Redirect::to("/")
}

/// Endpoint: POST /cart/clear
async fn clear_cart(State(state): State<SharedState>) -> impl IntoResponse {
    state.storefront.clear_cart().await;

    Redirect::to("/")
}

