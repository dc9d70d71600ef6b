//! Admin Console Module
//!
//! This module contains the administrative screen:
//! - View state, tabs and the delete confirmation answer
//! - Display helpers for dashboard aggregates
//! - Product and order operations against the backend
//! - HTML rendering and form handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod render;
pub mod view;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{AdminState, AdminTab, Confirmation};
pub use view::AdminPanel;
