//! Storefront View State
//!
//! Local, ephemeral state of the storefront screen. Nothing here is durable:
//! the catalog and cart are whatever the backend last returned.

use crate::api::models::{Cart, Product, RecordId};

use super::filter::filter_products;

// =============================================================================
// Category filter
// =============================================================================

/// Value of the "all categories" option.
pub const ALL_CATEGORIES: &str = "all";

/// Category selector state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Only products whose category equals this value exactly.
    Only(String),
}

impl CategoryFilter {
    /// Maps a selector value; `"all"` and the empty string mean no filter.
    pub fn parse(value: &str) -> Self {
        match value {
            "" | ALL_CATEGORIES => CategoryFilter::All,
            category => CategoryFilter::Only(category.to_string()),
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }
}

// =============================================================================
// State
// =============================================================================

/// Everything the storefront screen renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontState {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub cart: Cart,
    /// True until the first catalog fetch settles, successfully or not.
    pub loading: bool,
    pub search_term: String,
    pub category: CategoryFilter,
    pub cart_open: bool,
}

impl Default for StorefrontState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            cart: Cart::default(),
            loading: true,
            search_term: String::new(),
            category: CategoryFilter::All,
            cart_open: false,
        }
    }
}

impl StorefrontState {
    /// Products matching the current search term and category.
    pub fn filtered_products(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.search_term, &self.category)
    }

    /// Products flagged as featured, regardless of the filters.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    pub fn product(&self, id: &RecordId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Catalog product whose id renders as `raw`.
    pub fn find_product(&self, raw: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.matches(raw))
    }

    /// Units in the cart, shown on the cart badge.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }
}
