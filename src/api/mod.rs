//! Backend API Module
//!
//! The storefront backend is an external collaborator; this module holds the
//! typed client for it and the wire models it speaks.

pub mod client;
pub mod models;

pub use client::ApiClient;
