//! Admin operations.
//!
//! Mutations never patch local lists. After a successful call the affected
//! lists are refetched from the backend, together with the dashboard stats.

use futures_util::future::join3;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use super::models::{AdminState, Confirmation};
use crate::api::{
    models::{OrderStatus, ProductForm, RecordId},
    ApiClient,
};

/// The admin console.
#[derive(Debug)]
pub struct AdminPanel {
    api: ApiClient,
    state: RwLock<AdminState>,
}

impl AdminPanel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: RwLock::new(AdminState::default()),
        }
    }

    /// Copy of the current state for rendering.
    pub async fn snapshot(&self) -> AdminState {
        self.state.read().await.clone()
    }

    /// Fetches stats, products and orders independently.
    pub async fn load(&self) {
        self.state.write().await.loading = true;
        join3(self.fetch_stats(), self.fetch_products(), self.fetch_orders()).await;
    }

    pub async fn fetch_stats(&self) {
        match self.api.stats().await {
            Ok(stats) => self.state.write().await.stats = stats,
            Err(e) => error!("Error fetching stats: {e}"),
        }
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

    pub async fn fetch_orders(&self) {
        match self.api.orders().await {
            Ok(orders) => self.state.write().await.orders = orders,
            Err(e) => error!("Error fetching orders: {e}"),
        }
    }

    // -------------------------------------------------------------------------
    // Product editor
    // -------------------------------------------------------------------------

    pub async fn open_create(&self) {
        self.state.write().await.creating = true;
    }

    /// Closes the create dialog and discards the form.
    pub async fn cancel_create(&self) {
        let mut state = self.state.write().await;
        state.creating = false;
        state.form = ProductForm::default();
    }

    /// Selects a listed product for editing and prefills the form from it.
    pub async fn edit_product(&self, product_id: &RecordId) {
        let mut state = self.state.write().await;

        let Some(product) = state.product(product_id).cloned() else {
            debug!("edit_product: product {product_id} not listed");
            return;
        };

        state.form = ProductForm::from_product(&product);
        state.editing = Some(product);
    }

    /// Closes the edit dialog and discards the form.
    pub async fn cancel_edit(&self) {
        let mut state = self.state.write().await;
        state.editing = None;
        state.form = ProductForm::default();
    }

    pub async fn set_form(&self, form: ProductForm) {
        self.state.write().await.form = form;
    }

    /// Sends the form as a new product.
    pub async fn create_product(&self) {
        let form = self.state.read().await.form.clone();

        match self.api.create_product(&form).await {
            Ok(()) => {
                self.refresh_catalog().await;
                let mut state = self.state.write().await;
                state.creating = false;
                state.form = ProductForm::default();
            }
            Err(e) => error!("Error creating product: {e}"),
        }
    }

    /// Sends `form` as the new contents of the selected product. Does
    /// nothing unless `product_id` is the product currently selected.
    pub async fn update_product(&self, product_id: &RecordId, form: ProductForm) {
        {
            let mut state = self.state.write().await;
            if state.editing.as_ref().map(|p| &p.id) != Some(product_id) {
                warn!("Ignoring edit of product {product_id}: it is not the selected product");
                return;
            }
            state.form = form.clone();
        }

        match self.api.update_product(product_id, &form).await {
            Ok(()) => {
                self.refresh_catalog().await;
                let mut state = self.state.write().await;
                state.editing = None;
                state.form = ProductForm::default();
            }
            Err(e) => error!("Error updating product: {e}"),
        }
    }

    /// Deletes a product once the user has confirmed. A declined
    /// confirmation sends nothing.
    pub async fn delete_product(&self, product_id: &RecordId, confirmation: Confirmation) {
        if confirmation == Confirmation::Declined {
            debug!("delete of product {product_id} declined");
            return;
        }

        match self.api.delete_product(product_id).await {
            Ok(()) => self.refresh_catalog().await,
            Err(e) => error!("Error deleting product: {e}"),
        }
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Requests a status change. Whether the transition is legal is up to
    /// the backend.
    pub async fn update_order_status(&self, order_id: &RecordId, status: &OrderStatus) {
        match self.api.update_order_status(order_id, status).await {
            Ok(()) => self.refresh_orders().await,
            Err(e) => error!("Error updating order status: {e}"),
        }
    }

    /// Asks the backend for a demo order.
    pub async fn create_sample_order(&self) {
        match self.api.create_sample_order().await {
            Ok(()) => {
                info!("Sample order created");
                self.refresh_orders().await;
            }
            Err(e) => error!("Error creating sample order: {e}"),
        }
    }

    /// Id of the listed product whose id renders as `raw`.
    pub async fn product_id(&self, raw: &str) -> Option<RecordId> {
        self.state.read().await.find_product(raw).map(|p| p.id.clone())
    }

    /// Id of the listed order whose id renders as `raw`.
    pub async fn order_id(&self, raw: &str) -> Option<RecordId> {
        self.state.read().await.find_order(raw).map(|o| o.id.clone())
    }

    async fn refresh_catalog(&self) {
        self.fetch_products().await;
        self.fetch_stats().await;
    }

    async fn refresh_orders(&self) {
        self.fetch_orders().await;
        self.fetch_stats().await;
    }
}
