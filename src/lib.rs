//! Storefront UI Library
//!
//! This library provides the EcommercePro storefront and admin console: two
//! screens rendered as HTML whose data all comes from a remote storefront
//! backend API.

// Screens
pub mod admin;
pub mod storefront;

// Backend collaborator
pub mod api;
pub mod error;
pub mod session;

// Infrastructure
pub mod config;
pub mod html;
pub mod router;
pub mod screen;
pub mod shutdown;
pub mod state;
