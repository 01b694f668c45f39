//! Provider settings for the browser
//!
//! The frontend reads its provider settings from this reserved path when they
//! were not baked in at build time.

use std::sync::Arc;

use axum::{extract::State, response::Json};
use gatehouse_core::ProviderConfig;

/// Reserved path of the provider settings document
pub const PROVIDER_CONFIG_PATH: &str = "/__/firebase/init.json";

/// Provider settings endpoint
pub async fn provider_config(State(config): State<Arc<ProviderConfig>>) -> Json<ProviderConfig> {
    Json(config.as_ref().clone())
}
