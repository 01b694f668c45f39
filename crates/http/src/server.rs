//! Edge server assembly

use std::path::Path;
use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use gatehouse_core::{ProviderConfig, bootstrap};
use tokio::net::TcpListener;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::EdgeConfig;
use crate::error::{HttpError, Result};
use crate::middleware::edge_middleware;
use crate::routes::{
    health::health_check,
    provider::{PROVIDER_CONFIG_PATH, provider_config},
};

/// Build the edge router.
///
/// Unknown paths fall back to `index.html` so client-side routes such as
/// `/login` and `/editor` load the frontend, which then applies its guards.
pub fn router(static_dir: &Path, provider: ProviderConfig) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/healthz", get(health_check))
        .route(PROVIDER_CONFIG_PATH, get(provider_config))
        .with_state(Arc::new(provider))
        .fallback_service(spa)
        .layer(middleware::from_fn(edge_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Initialize the provider from the environment and serve until Ctrl-C
pub async fn serve(config: EdgeConfig) -> Result<()> {
    let provider = bootstrap::initialize_from_env()?;
    let app = router(&config.static_dir, provider.config().clone());

    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|source| HttpError::Bind {
            addr: config.listen,
            source,
        })?;

    info!(
        addr = %config.listen,
        static_dir = %config.static_dir.display(),
        "Gatehouse edge listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(HttpError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
