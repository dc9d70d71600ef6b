use std::sync::Arc;

use anyhow::Context;
use storefront_ui::{
    api::ApiClient, config::Config, router::create_app_router, session::SessionId,
    shutdown, state::AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    // One anonymous cart session per process lifetime
    let session = SessionId::generate();
    info!("Using backend {} with {}", config.backend_url, session);

    let state = Arc::new(AppState::new(ApiClient::new(&config.backend_url), session));

    // The loading screen is served until the initial fetch settles
    let initial = Arc::clone(&state);
    tokio::spawn(async move { initial.storefront.load().await });

    let app = create_app_router(state);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("UI running on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await
        .context("server error")?;

    info!("UI shut down");
    Ok(())
}
