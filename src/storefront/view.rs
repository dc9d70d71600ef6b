//! Storefront operations.
//!
//! Every operation follows the same pattern: call the backend, and on success
//! replace the relevant slice of state with what the backend returned. Failures
//! are logged and otherwise ignored, leaving the previous state on screen.
//! Locks are never held across a request, so overlapping operations resolve in
//! whatever order their responses arrive.

use futures_util::future::join3;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use super::models::{CategoryFilter, StorefrontState};
use crate::{
    api::{
        models::{Cart, CartItem, RecordId},
        ApiClient,
    },
    session::SessionId,
};

/// The storefront screen bound to one anonymous cart session.
#[derive(Debug)]
pub struct Storefront {
    api: ApiClient,
    session: SessionId,
    state: RwLock<StorefrontState>,
}

impl Storefront {
    pub fn new(api: ApiClient, session: SessionId) -> Self {
        Self {
            api,
            session,
            state: RwLock::new(StorefrontState::default()),
        }
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Copy of the current state for rendering.
    pub async fn snapshot(&self) -> StorefrontState {
        self.state.read().await.clone()
    }

    /// Fetches catalog, categories and cart independently.
    pub async fn load(&self) {
        join3(self.fetch_products(), self.fetch_categories(), self.fetch_cart()).await;
    }

    pub async fn fetch_products(&self) {
        let result = self.api.products().await;
        let mut state = self.state.write().await;

        match result {
            Ok(products) => state.products = products,
            Err(e) => error!("Error fetching products: {e}"),
        }

        state.loading = false;
    }

    pub async fn fetch_categories(&self) {
        match self.api.categories().await {
            Ok(categories) => self.state.write().await.categories = categories,
            Err(e) => error!("Error fetching categories: {e}"),
        }
    }

    pub async fn fetch_cart(&self) {
        match self.api.cart(&self.session).await {
            Ok(cart) => self.state.write().await.cart = cart,
            Err(e) => error!("Error fetching cart: {e}"),
        }
    }

    /// Adds `quantity` units of a catalog product at its listed price.
    ///
    /// Products missing from the local catalog are ignored without a request.
    pub async fn add_to_cart(&self, product_id: &RecordId, quantity: i64) {
        let Some(price) = self.price_of(product_id).await else {
            debug!("add_to_cart: product {product_id} not in catalog");
            return;
        };

        let item = CartItem {
            product_id: product_id.clone(),
            quantity,
            price,
        };

        match self.api.add_to_cart(&self.session, &item).await {
            Ok(cart) => self.replace_cart(cart).await,
            Err(e) => error!("Error adding to cart: {e}"),
        }
    }

    /// Sets the quantity of an existing cart line. A quantity of zero or less
    /// lets the backend drop the line.
    pub async fn update_cart_item(&self, product_id: &RecordId, quantity: i64) {
        let Some(price) = self.price_of(product_id).await else {
            warn!("Error updating cart: product {product_id} not in catalog");
            return;
        };

        let item = CartItem {
            product_id: product_id.clone(),
            quantity,
            price,
        };

        match self.api.update_cart_item(&self.session, &item).await {
            Ok(cart) => self.replace_cart(cart).await,
            Err(e) => error!("Error updating cart: {e}"),
        }
    }

    /// Empties the cart once the backend confirms.
    pub async fn clear_cart(&self) {
        match self.api.clear_cart(&self.session).await {
            Ok(()) => self.replace_cart(Cart::default()).await,
            Err(e) => error!("Error clearing cart: {e}"),
        }
    }

    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.state.write().await.search_term = term.into();
    }

    pub async fn set_category(&self, category: CategoryFilter) {
        self.state.write().await.category = category;
    }

    pub async fn set_cart_open(&self, open: bool) {
        self.state.write().await.cart_open = open;
    }

    /// Id of the catalog product whose id renders as `raw`, in the form the
    /// backend issued it.
    pub async fn product_id(&self, raw: &str) -> Option<RecordId> {
        self.state.read().await.find_product(raw).map(|p| p.id.clone())
    }

    async fn price_of(&self, product_id: &RecordId) -> Option<f64> {
        self.state.read().await.product(product_id).map(|p| p.price)
    }

    async fn replace_cart(&self, cart: Cart) {
        self.state.write().await.cart = cart;
    }
}
