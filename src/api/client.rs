//! HTTP client for the storefront backend.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{
    Cart, CartItem, CartResponse, CategoriesResponse, Order, OrderStatus, Product, ProductForm,
    RecordId, Stats, StatusUpdate,
};
use crate::{error::ApiError, session::SessionId};

/// Thin typed wrapper over the backend's JSON API.
///
/// Every call is a single request with no retry and no timeout beyond the
/// transport's own. Non-2xx answers are reported as [`ApiError::Status`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Creates a client for the backend at `base_url` (e.g.
    /// `http://localhost:8001`). A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// `GET /api/products`
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/api/products").await
    }

    /// `GET /api/categories`
    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        let body: CategoriesResponse = self.get_json("/api/categories").await?;
        Ok(body.categories)
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// `GET /api/cart/{session_id}`
    pub async fn cart(&self, session: &SessionId) -> Result<Cart, ApiError> {
        self.get_json(&format!("/api/cart/{session}")).await
    }

    /// `POST /api/cart/{session_id}/add`, returning the updated cart.
    pub async fn add_to_cart(&self, session: &SessionId, item: &CartItem) -> Result<Cart, ApiError> {
        let path = format!("/api/cart/{session}/add");
        let response = self
            .execute(self.request(Method::POST, &path).json(item), Method::POST, &path)
            .await?;

        let body: CartResponse = response.json().await?;
        Ok(body.cart)
    }

    /// `PUT /api/cart/{session_id}/update`, returning the updated cart.
    pub async fn update_cart_item(
        &self,
        session: &SessionId,
        item: &CartItem,
    ) -> Result<Cart, ApiError> {
        let path = format!("/api/cart/{session}/update");
        let response = self
            .execute(self.request(Method::PUT, &path).json(item), Method::PUT, &path)
            .await?;

        let body: CartResponse = response.json().await?;
        Ok(body.cart)
    }

    /// `DELETE /api/cart/{session_id}/clear`
    pub async fn clear_cart(&self, session: &SessionId) -> Result<(), ApiError> {
        let path = format!("/api/cart/{session}/clear");
        self.execute(self.request(Method::DELETE, &path), Method::DELETE, &path)
            .await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Admin
    // -------------------------------------------------------------------------

    /// `GET /api/admin/stats`
    pub async fn stats(&self) -> Result<Stats, ApiError> {
        self.get_json("/api/admin/stats").await
    }

    /// `GET /api/admin/orders`
    pub async fn orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_json("/api/admin/orders").await
    }

    /// `PUT /api/admin/orders/{id}/status`. The backend decides whether the
    /// transition is legal.
    pub async fn update_order_status(
        &self,
        order_id: &RecordId,
        status: &OrderStatus,
    ) -> Result<(), ApiError> {
        let path = format!("/api/admin/orders/{}/status", order_id.path_segment());
        let body = StatusUpdate { status };
        self.execute(self.request(Method::PUT, &path).json(&body), Method::PUT, &path)
            .await?;
        Ok(())
    }

    /// `POST /api/admin/products`
    pub async fn create_product(&self, form: &ProductForm) -> Result<(), ApiError> {
        let path = "/api/admin/products";
        self.execute(self.request(Method::POST, path).json(form), Method::POST, path)
            .await?;
        Ok(())
    }

    /// `PUT /api/admin/products/{id}`
    pub async fn update_product(
        &self,
        product_id: &RecordId,
        form: &ProductForm,
    ) -> Result<(), ApiError> {
        let path = format!("/api/admin/products/{}", product_id.path_segment());
        self.execute(self.request(Method::PUT, &path).json(form), Method::PUT, &path)
            .await?;
        Ok(())
    }

    /// `DELETE /api/admin/products/{id}`
    pub async fn delete_product(&self, product_id: &RecordId) -> Result<(), ApiError> {
        let path = format!("/api/admin/products/{}", product_id.path_segment());
        self.execute(self.request(Method::DELETE, &path), Method::DELETE, &path)
            .await?;
        Ok(())
    }

    /// `POST /api/create-sample-order`
    pub async fn create_sample_order(&self) -> Result<(), ApiError> {
        let path = "/api/create-sample-order";
        self.execute(self.request(Method::POST, path), Method::POST, path)
            .await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Plumbing
    // -------------------------------------------------------------------------

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{path}", self.base_url))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .execute(self.request(Method::GET, path), Method::GET, path)
            .await?;

        Ok(response.json().await?)
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        method: Method,
        path: &str,
    ) -> Result<Response, ApiError> {
        debug!("API: {method} {path}");

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                path: path.to_string(),
                status,
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8001/");
        assert_eq!(client.base_url(), "http://localhost:8001");
    }
}
