//! Screen rendering and switching
//!
//! `GET /` renders whichever screen is active, applying the storefront's
//! search and cart-panel inputs or the admin tab from the query string.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::{
    admin::{self, AdminTab},
    state::{Screen, SharedState},
    storefront::{self, CategoryFilter},
};

/// Creates routes for rendering and switching screens
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route("/screen/admin", post(show_admin))
        .route("/screen/store", post(show_storefront))
        .route("/healthz", get(healthz))
}

/// Query accepted by `GET /`. Absent fields leave the current view state
/// as it is.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub cart: Option<String>,
    pub tab: Option<String>,
}

/// Endpoint: GET /
async fn index(State(state): State<SharedState>, Query(query): Query<PageQuery>) -> impl IntoResponse {
    match state.screen().await {
        Screen::Storefront => {
            let view = &state.storefront;

            if let Some(term) = query.search {
                view.set_search_term(term).await;
            }
            if let Some(category) = query.category {
                view.set_category(CategoryFilter::parse(&category)).await;
            }
            match query.cart.as_deref() {
                Some("open") => view.set_cart_open(true).await,
                Some("closed") => view.set_cart_open(false).await,
                _ => {}
            }

            Html(storefront::render::page(&view.snapshot().await))
        }
        Screen::Admin => {
            let tab = AdminTab::parse(query.tab.as_deref());
            Html(admin::render::page(&state.admin.snapshot().await, tab))
        }
    }
}

/// Endpoint: POST /screen/admin
async fn show_admin(State(state): State<SharedState>) -> impl IntoResponse {
    state.show_admin().await;
    Redirect::to("/")
}

/// Endpoint: POST /screen/store
async fn show_storefront(State(state): State<SharedState>) -> impl IntoResponse {
    state.show_storefront().await;
    Redirect::to("/")
}

/// Endpoint: GET /healthz
async fn healthz() -> &'static str {
    "ok"
}
