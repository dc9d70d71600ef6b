//! Application State
//!
//! One UI session: the storefront, the admin console and which of the two is
//! on screen.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    admin::AdminPanel,
    api::ApiClient,
    session::SessionId,
    storefront::Storefront,
};

/// Shared application state that can be safely passed between handlers
pub type SharedState = Arc<AppState>;

/// Top-level screen currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Storefront,
    Admin,
}

/// Core application state composing both screens.
#[derive(Debug)]
pub struct AppState {
    pub storefront: Storefront,
    pub admin: AdminPanel,
    screen: RwLock<Screen>,
}

impl AppState {
    /// Creates the state for a UI session identified by `session`.
    pub fn new(api: ApiClient, session: SessionId) -> Self {
        Self {
            storefront: Storefront::new(api.clone(), session),
            admin: AdminPanel::new(api),
            screen: RwLock::new(Screen::Storefront),
        }
    }

    pub async fn screen(&self) -> Screen {
        *self.screen.read().await
    }

    /// Switches to the admin console and loads it afresh.
    pub async fn show_admin(&self) {
        *self.screen.write().await = Screen::Admin;
        self.admin.load().await;
    }

    pub async fn show_storefront(&self) {
        *self.screen.write().await = Screen::Storefront;
    }
}
