//! Identity provider configuration

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Settings of the provider project backing authentication, documents and
/// object storage. Every field is required.
///
/// Serializes with the provider's own key names (`apiKey`, `authDomain`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl ProviderConfig {
    pub const API_KEY_VAR: &'static str = "FIREBASE_API_KEY";
    pub const AUTH_DOMAIN_VAR: &'static str = "FIREBASE_AUTH_DOMAIN";
    pub const PROJECT_ID_VAR: &'static str = "FIREBASE_PROJECT_ID";
    pub const STORAGE_BUCKET_VAR: &'static str = "FIREBASE_STORAGE_BUCKET";
    pub const MESSAGING_SENDER_ID_VAR: &'static str = "FIREBASE_MESSAGING_SENDER_ID";
    pub const APP_ID_VAR: &'static str = "FIREBASE_APP_ID";

    /// Read the configuration from the process environment
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Fails on the first variable that is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(CoreError::missing_setting(name))
        };

        Ok(Self {
            api_key: require(Self::API_KEY_VAR)?,
            auth_domain: require(Self::AUTH_DOMAIN_VAR)?,
            project_id: require(Self::PROJECT_ID_VAR)?,
            storage_bucket: require(Self::STORAGE_BUCKET_VAR)?,
            messaging_sender_id: require(Self::MESSAGING_SENDER_ID_VAR)?,
            app_id: require(Self::APP_ID_VAR)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, String> {
        HashMap::from([
            (ProviderConfig::API_KEY_VAR, "key-123".to_string()),
            (ProviderConfig::AUTH_DOMAIN_VAR, "demo.firebaseapp.com".to_string()),
            (ProviderConfig::PROJECT_ID_VAR, "demo".to_string()),
            (ProviderConfig::STORAGE_BUCKET_VAR, "demo.appspot.com".to_string()),
            (ProviderConfig::MESSAGING_SENDER_ID_VAR, "1234".to_string()),
            (ProviderConfig::APP_ID_VAR, "1:1234:web:abcd".to_string()),
        ])
    }

    #[test]
    fn test_from_lookup_with_all_settings() {
        let env = full_env();
        let config = ProviderConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        assert_eq!(config.project_id, "demo");
        assert_eq!(config.storage_bucket, "demo.appspot.com");
    }

    #[test]
    fn test_missing_setting_is_named() {
        let mut env = full_env();
        env.remove(ProviderConfig::STORAGE_BUCKET_VAR);
        let err = ProviderConfig::from_lookup(|name| env.get(name).cloned()).unwrap_err();
        assert_eq!(err, CoreError::missing_setting("FIREBASE_STORAGE_BUCKET"));
    }

    #[test]
    fn test_serializes_with_provider_key_names() {
        let env = full_env();
        let config = ProviderConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["apiKey"], "key-123");
        assert_eq!(value["messagingSenderId"], "1234");
        let back: ProviderConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_blank_setting_counts_as_missing() {
        let mut env = full_env();
        env.insert(ProviderConfig::API_KEY_VAR, "  ".to_string());
        let err = ProviderConfig::from_lookup(|name| env.get(name).cloned()).unwrap_err();
        assert!(err.to_string().contains("FIREBASE_API_KEY"));
    }
}
