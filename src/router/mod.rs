//! Routing module for the storefront UI

use crate::state::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, Router};
use tracing::{info, warn};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        info!("REQ: {} {}", req.method(), req.uri());
        let res = next.run(req).await;
        if !res.status().is_success() && !res.status().is_redirection() {
            warn!("RES: {} (Error)", res.status());
        }
        res
    });

    // Routes
    Router::new()
        .merge(crate::screen::routes())
        .merge(crate::storefront::routes())
        .merge(crate::admin::routes())
        .layer(log_layer)
        .with_state(state)
}
