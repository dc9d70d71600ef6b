//! Admin View State
//!
//! Dashboard data plus the product editor. Like the storefront, nothing here
//! outlives the process; every list is the backend's last answer.

use crate::api::models::{Order, Product, ProductForm, RecordId, Stats};

/// Categories offered by the product editor.
pub const PRODUCT_CATEGORIES: [&str; 4] = ["Electronics", "Beauty", "Home & Design", "Personal Care"];

/// Everything the admin screen renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    pub stats: Stats,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    /// True until the product fetch of the current load settles.
    pub loading: bool,
    /// Product selected in the edit dialog.
    pub editing: Option<Product>,
    /// Whether the create dialog is open.
    pub creating: bool,
    pub form: ProductForm,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            stats: Stats::default(),
            products: Vec::new(),
            orders: Vec::new(),
            loading: true,
            editing: None,
            creating: false,
            form: ProductForm::default(),
        }
    }
}

impl AdminState {
    pub fn product(&self, id: &RecordId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Listed product whose id renders as `raw`.
    pub fn find_product(&self, raw: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.matches(raw))
    }

    /// Listed order whose id renders as `raw`.
    pub fn find_order(&self, raw: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id.matches(raw))
    }
}

/// Tabs of the admin screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Products,
    Orders,
    Analytics,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Dashboard,
        AdminTab::Products,
        AdminTab::Orders,
        AdminTab::Analytics,
    ];

    /// Unknown or missing values fall back to the dashboard.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("products") => AdminTab::Products,
            Some("orders") => AdminTab::Orders,
            Some("analytics") => AdminTab::Analytics,
            _ => AdminTab::Dashboard,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "dashboard",
            AdminTab::Products => "products",
            AdminTab::Orders => "orders",
            AdminTab::Analytics => "analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Products => "Products",
            AdminTab::Orders => "Orders",
            AdminTab::Analytics => "Analytics",
        }
    }

    /// Screen URL showing this tab.
    pub fn href(self) -> String {
        format!("/?tab={}", self.as_str())
    }
}

/// Answer to the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// Only an explicit `yes` confirms.
    pub fn from_answer(answer: &str) -> Self {
        if answer.eq_ignore_ascii_case("yes") {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}
