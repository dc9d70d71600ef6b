//! Backend API Wire Models
//!
//! Every entity here is owned by the backend; the UI only deserializes and
//! displays it. Fields the backend may omit fall back to neutral defaults so
//! a sparse payload still renders.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque record identifier.
///
/// The backend issues UUID strings, but numeric ids are accepted as well and
/// are always sent back in the form they were received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl RecordId {
    /// Whether this id renders as `raw`, e.g. a value echoed back by an HTML
    /// form. The variant is never guessed from the text.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            RecordId::Number(n) => n.to_string() == raw,
            RecordId::Text(s) => s == raw,
        }
    }

    /// The id percent-encoded for use as one URL path segment.
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.to_string()).into_owned()
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub stock: i64,
    /// Flagged for promotional display.
    #[serde(default)]
    pub featured: bool,
}

/// Body of `GET /api/categories`.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    pub categories: Vec<String>,
}

// =============================================================================
// Cart
// =============================================================================

/// One cart line. Also the request body of the add and update cart calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: RecordId,
    pub quantity: i64,
    /// Unit price.
    pub price: f64,
}

/// Session cart as computed by the backend. `total` is never recomputed
/// locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total: f64,
}

impl Cart {
    /// Number of units across all lines.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Body returned by the add and update cart calls.
#[derive(Debug, Deserialize)]
pub(crate) struct CartResponse {
    pub cart: Cart,
}

// =============================================================================
// Orders
// =============================================================================

/// Lifecycle status of an order.
///
/// Statuses outside the fixed set are kept verbatim in
/// [`OrderStatus::Other`] so one odd record does not break the order list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    /// The statuses an admin may pick, in display order.
    pub const SELECTABLE: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other(raw) => raw,
        }
    }

    /// Human readable label for selectors.
    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other(raw) => raw,
        }
    }

    /// Parses one of the selectable statuses. Anything else is rejected.
    pub fn parse_selectable(value: &str) -> Option<Self> {
        match OrderStatus::from(value.to_string()) {
            OrderStatus::Other(_) => None,
            status => Some(status),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => OrderStatus::Pending,
            "paid" => OrderStatus::Paid,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order as listed by the admin API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: RecordId,
    #[serde(default)]
    pub total: f64,
    pub status: OrderStatus,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Request body of the order status update.
#[derive(Debug, Serialize)]
pub(crate) struct StatusUpdate<'a> {
    pub status: &'a OrderStatus,
}

// =============================================================================
// Dashboard
// =============================================================================

/// Number of products in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    #[serde(default)]
    pub count: u64,
}

/// Dashboard aggregates, all computed server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub total_products: u64,
    pub total_orders: u64,
    pub total_revenue: f64,
    pub low_stock_products: Vec<Product>,
    pub recent_orders: Vec<Order>,
    pub category_stats: Vec<CategoryCount>,
}

// =============================================================================
// Admin product form
// =============================================================================

/// Product editor contents, sent verbatim to the create and update calls.
///
/// Price and stock stay strings exactly as typed; the backend converts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image_url: String,
    pub stock: String,
    pub featured: bool,
}

impl ProductForm {
    /// Prefills the editor from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            stock: product.stock.to_string(),
            featured: product.featured,
        }
    }
}
