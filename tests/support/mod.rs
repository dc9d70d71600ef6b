//! In-process stand-in for the storefront backend.
//!
//! Serves the same JSON API as the real backend from memory, records every
//! request it receives, and can be switched into a failing mode where every
//! call answers 500.

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, AtomicI64, Ordering},
    Arc, Mutex,
};

use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use dashmap::DashMap;
use serde_json::{json, Value};
use storefront_ui::api::{
    models::{Cart, CartItem, Order, OrderStatus, Product, ProductForm, RecordId},
    ApiClient,
};
use tokio::net::TcpListener;

pub type Backend = Arc<FakeBackend>;

#[derive(Default)]
pub struct FakeBackend {
    pub products: Mutex<Vec<Product>>,
    pub orders: Mutex<Vec<Order>>,
    /// Carts keyed by session id.
    pub carts: DashMap<String, Cart>,
    /// Every request seen, as `"METHOD /path"`.
    pub requests: Mutex<Vec<String>>,
    /// When set, every call answers 500.
    pub failing: AtomicBool,
    next_id: AtomicI64,
}

impl FakeBackend {
    pub fn with_products(products: Vec<Product>) -> Backend {
        let backend = FakeBackend {
            next_id: AtomicI64::new(1000),
            ..FakeBackend::default()
        };
        *backend.products.lock().unwrap() = products;
        Arc::new(backend)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, request: &str) -> usize {
        self.requests().iter().filter(|r| *r == request).count()
    }

    pub fn add_order(&self, id: &str, total: f64, status: OrderStatus) {
        self.orders.lock().unwrap().push(Order {
            id: RecordId::from(id),
            total,
            status,
            created_at: Some("2024-05-01T10:00:00.000000".into()),
        });
    }

    pub fn order_status(&self, id: &str) -> Option<OrderStatus> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id.to_string() == id)
            .map(|o| o.status.clone())
    }

    fn product(&self, id: &RecordId) -> Option<Product> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }
}

pub fn product(id: i64, name: &str, category: &str, price: f64, stock: i64) -> Product {
    Product {
        id: RecordId::Number(id),
        name: name.into(),
        description: format!("{name} for professionals"),
        price,
        category: category.into(),
        image_url: format!("https://img.example/{id}.jpg"),
        stock,
        featured: false,
    }
}

pub fn desk_lamp() -> Product {
    product(1, "Desk Lamp", "Home & Design", 29.99, 5)
}

/// Starts the backend on an ephemeral port and returns a client for it.
pub async fn spawn(backend: Backend) -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(backend);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ApiClient::new(format!("http://{addr}"))
}

fn router(backend: Backend) -> Router {
    let recorder = {
        let backend = backend.clone();
        axum::middleware::from_fn(move |req: Request<Body>, next: Next| {
            let backend = backend.clone();
            async move {
                backend
                    .requests
                    .lock()
                    .unwrap()
                    .push(format!("{} {}", req.method(), req.uri().path()));

                if backend.failing.load(Ordering::SeqCst) {
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
                next.run(req).await
            }
        })
    };

    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/categories", get(list_categories))
        .route("/api/cart/:session", get(get_cart))
        .route("/api/cart/:session/add", post(add_to_cart))
        .route("/api/cart/:session/update", put(update_cart))
        .route("/api/cart/:session/clear", delete(clear_cart))
        .route("/api/admin/stats", get(stats))
        .route("/api/admin/orders", get(list_orders))
        .route("/api/admin/orders/:id/status", put(update_order_status))
        .route("/api/admin/products", post(create_product))
        .route(
            "/api/admin/products/:id",
            put(update_product).delete(delete_product),
        )
        .route("/api/create-sample-order", post(create_sample_order))
        .layer(recorder)
        .with_state(backend)
}

fn error(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

// -----------------------------------------------------------------------------
// Catalog
// -----------------------------------------------------------------------------

async fn list_products(State(backend): State<Backend>) -> Json<Vec<Product>> {
    Json(backend.products.lock().unwrap().clone())
}

async fn list_categories(State(backend): State<Backend>) -> Json<Value> {
    let mut categories: Vec<String> = Vec::new();
    for product in backend.products.lock().unwrap().iter() {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    Json(json!({ "categories": categories }))
}

// -----------------------------------------------------------------------------
// Cart
// -----------------------------------------------------------------------------

fn cart_body(session: &str, cart: &Cart) -> Value {
    json!({
        "id": format!("cart-{session}"),
        "session_id": session,
        "items": cart.items,
        "total": cart.total,
    })
}

fn recompute(cart: &mut Cart) {
    cart.total = cart
        .items
        .iter()
        .map(|i| i.price * i.quantity as f64)
        .sum();
}

async fn get_cart(State(backend): State<Backend>, Path(session): Path<String>) -> Json<Value> {
    let cart = backend.carts.entry(session.clone()).or_default().clone();
    Json(cart_body(&session, &cart))
}

async fn add_to_cart(
    State(backend): State<Backend>,
    Path(session): Path<String>,
    Json(item): Json<CartItem>,
) -> Response {
    let Some(product) = backend.product(&item.product_id) else {
        return error(StatusCode::NOT_FOUND, "Product not found");
    };
    if product.stock < item.quantity {
        return error(StatusCode::BAD_REQUEST, "Insufficient stock");
    }

    let mut cart = backend.carts.entry(session.clone()).or_default();
    if let Some(line) = cart
        .items
        .iter_mut()
        .find(|line| line.product_id == item.product_id)
    {
        line.quantity += item.quantity;
        line.price = product.price;
    } else {
        cart.items.push(CartItem {
            product_id: item.product_id,
            quantity: item.quantity,
            price: product.price,
        });
    }
    recompute(&mut cart);

    Json(json!({ "message": "Item added to cart", "cart": cart_body(&session, &cart) }))
        .into_response()
}

async fn update_cart(
    State(backend): State<Backend>,
    Path(session): Path<String>,
    Json(item): Json<CartItem>,
) -> Response {
    let Some(mut cart) = backend.carts.get_mut(&session) else {
        return error(StatusCode::NOT_FOUND, "Cart not found");
    };
    let Some(index) = cart
        .items
        .iter()
        .position(|line| line.product_id == item.product_id)
    else {
        return error(StatusCode::NOT_FOUND, "Item not found in cart");
    };

    if item.quantity <= 0 {
        cart.items.remove(index);
    } else {
        cart.items[index].quantity = item.quantity;
    }
    recompute(&mut cart);

    Json(json!({ "message": "Cart updated", "cart": cart_body(&session, &cart) })).into_response()
}

async fn clear_cart(State(backend): State<Backend>, Path(session): Path<String>) -> Json<Value> {
    if let Some(mut cart) = backend.carts.get_mut(&session) {
        *cart = Cart::default();
    }
    Json(json!({ "message": "Cart cleared" }))
}

// -----------------------------------------------------------------------------
// Admin
// -----------------------------------------------------------------------------

async fn stats(State(backend): State<Backend>) -> Json<Value> {
    let products = backend.products.lock().unwrap().clone();
    let orders = backend.orders.lock().unwrap().clone();

    let total_revenue: f64 = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Paid)
        .map(|o| o.total)
        .sum();
    let low_stock: Vec<&Product> = products.iter().filter(|p| p.stock < 10).collect();

    let mut category_stats: Vec<Value> = Vec::new();
    for product in &products {
        match category_stats
            .iter_mut()
            .find(|entry| entry["category"] == product.category.as_str())
        {
            Some(entry) => entry["count"] = json!(entry["count"].as_u64().unwrap() + 1),
            None => category_stats.push(json!({ "category": product.category, "count": 1 })),
        }
    }

    Json(json!({
        "total_products": products.len(),
        "total_orders": orders.len(),
        "total_revenue": total_revenue,
        "low_stock_products": low_stock,
        "recent_orders": orders.iter().rev().take(5).collect::<Vec<_>>(),
        "category_stats": category_stats,
    }))
}

async fn list_orders(State(backend): State<Backend>) -> Json<Vec<Order>> {
    Json(backend.orders.lock().unwrap().clone())
}

async fn update_order_status(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let Some(status) = body["status"]
        .as_str()
        .and_then(OrderStatus::parse_selectable)
    else {
        return error(StatusCode::BAD_REQUEST, "Invalid status");
    };

    let mut orders = backend.orders.lock().unwrap();
    let Some(order) = orders.iter_mut().find(|o| o.id.to_string() == id) else {
        return error(StatusCode::NOT_FOUND, "Order not found");
    };
    order.status = status;

    Json(json!({ "message": "Order status updated successfully" })).into_response()
}

fn product_from_form(id: RecordId, form: &ProductForm) -> Option<Product> {
    Some(Product {
        id,
        name: form.name.clone(),
        description: form.description.clone(),
        price: form.price.parse().ok()?,
        category: form.category.clone(),
        image_url: form.image_url.clone(),
        stock: form.stock.parse().ok()?,
        featured: form.featured,
    })
}

async fn create_product(State(backend): State<Backend>, Json(form): Json<ProductForm>) -> Response {
    let id = RecordId::Number(backend.next_id.fetch_add(1, Ordering::SeqCst));
    let Some(product) = product_from_form(id, &form) else {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Error creating product");
    };

    backend.products.lock().unwrap().push(product.clone());
    Json(product).into_response()
}

async fn update_product(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(form): Json<ProductForm>,
) -> Response {
    let mut products = backend.products.lock().unwrap();
    let Some(existing) = products.iter_mut().find(|p| p.id.to_string() == id) else {
        return error(StatusCode::NOT_FOUND, "Product not found");
    };
    let Some(updated) = product_from_form(existing.id.clone(), &form) else {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Error updating product");
    };

    *existing = updated.clone();
    Json(updated).into_response()
}

async fn delete_product(State(backend): State<Backend>, Path(id): Path<String>) -> Response {
    let mut products = backend.products.lock().unwrap();
    let before = products.len();
    products.retain(|p| p.id.to_string() != id);

    if products.len() == before {
        return error(StatusCode::NOT_FOUND, "Product not found");
    }
    Json(json!({ "message": "Product deleted successfully" })).into_response()
}

async fn create_sample_order(State(backend): State<Backend>) -> Json<Value> {
    let id = format!("demo-{}", backend.next_id.fetch_add(1, Ordering::SeqCst));
    backend.add_order(&id, 599.98, OrderStatus::Paid);

    Json(json!({ "message": "Sample order created" }))
}
