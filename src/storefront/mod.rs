//! Storefront Screen Module
//!
//! This module contains the customer-facing catalog and cart screen:
//! - View state and the category filter
//! - Catalog filtering
//! - Operations against the backend (load, cart mutations)
//! - HTML rendering and form handlers

pub mod filter;
pub mod handlers;
pub mod models;
pub mod render;
pub mod view;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{CategoryFilter, StorefrontState};
pub use view::Storefront;
