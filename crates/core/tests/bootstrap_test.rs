//! Tests for the process-wide provider singleton

use gatehouse_core::{ProviderConfig, bootstrap};

fn config(project_id: &str) -> ProviderConfig {
    ProviderConfig {
        api_key: "key-123".to_string(),
        auth_domain: format!("{project_id}.firebaseapp.com"),
        project_id: project_id.to_string(),
        storage_bucket: format!("{project_id}.appspot.com"),
        messaging_sender_id: "1234".to_string(),
        app_id: "1:1234:web:abcd".to_string(),
    }
}

#[test]
fn test_initialize_is_idempotent() {
    let first = bootstrap::initialize(config("first"));
    let second = bootstrap::initialize(config("second"));

    // Second configuration is ignored
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.config().project_id, "first");
    assert_eq!(second.documents().project_id(), "first");
    assert_eq!(second.objects().bucket(), "first.appspot.com");

    let current = bootstrap::current().expect("provider should be initialized");
    assert!(std::ptr::eq(first, current));

    // Environment is not consulted once initialized
    let from_env = bootstrap::initialize_from_env().expect("existing instance");
    assert!(std::ptr::eq(first, from_env));
}
