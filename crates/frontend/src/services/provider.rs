//! Provider bootstrap for the browser
//!
//! Settings are baked in at build time from the `FIREBASE_*` environment
//! variables. Builds without them fetch the settings the edge serves at
//! `/__/firebase/init.json` instead.

use gatehouse_core::{CoreResult, ProviderConfig, ProviderHandles, bootstrap};
use tracing::{debug, info};

/// Reserved path of the provider settings document
const RUNTIME_CONFIG_PATH: &str = "/__/firebase/init.json";

/// Build-time value of a provider setting
pub fn build_time_setting(name: &str) -> Option<String> {
    let value = match name {
        ProviderConfig::API_KEY_VAR => option_env!("FIREBASE_API_KEY"),
        ProviderConfig::AUTH_DOMAIN_VAR => option_env!("FIREBASE_AUTH_DOMAIN"),
        ProviderConfig::PROJECT_ID_VAR => option_env!("FIREBASE_PROJECT_ID"),
        ProviderConfig::STORAGE_BUCKET_VAR => option_env!("FIREBASE_STORAGE_BUCKET"),
        ProviderConfig::MESSAGING_SENDER_ID_VAR => option_env!("FIREBASE_MESSAGING_SENDER_ID"),
        ProviderConfig::APP_ID_VAR => option_env!("FIREBASE_APP_ID"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Get the base URL for runtime requests
fn base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

async fn fetch_runtime_config() -> CoreResult<ProviderConfig> {
    let url = format!("{}{RUNTIME_CONFIG_PATH}", base_url());
    let config = reqwest::get(url)
        .await?
        .error_for_status()?
        .json::<ProviderConfig>()
        .await?;
    Ok(config)
}

/// Initialize the provider singleton once, or return it
pub async fn load_provider() -> CoreResult<&'static ProviderHandles> {
    if let Some(handles) = bootstrap::current() {
        return Ok(handles);
    }

    let config = match ProviderConfig::from_lookup(build_time_setting) {
        Ok(config) => config,
        Err(err) => {
            debug!(%err, "No build-time provider settings, fetching from edge");
            let config = fetch_runtime_config().await?;
            info!(project = %config.project_id, "Loaded provider settings from edge");
            config
        }
    };

    Ok(bootstrap::initialize(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_setting_is_absent() {
        assert_eq!(build_time_setting("FIREBASE_SOMETHING_ELSE"), None);
    }

    #[test]
    fn test_build_time_setting_tracks_compile_env() {
        assert_eq!(
            build_time_setting(ProviderConfig::PROJECT_ID_VAR).as_deref(),
            option_env!("FIREBASE_PROJECT_ID")
        );
    }
}
