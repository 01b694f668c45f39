//! Session handling against the identity provider
//!
//! The ID token of the current session is kept in sessionStorage so that a
//! reload can resolve the same session again.

use gatehouse_core::{CoreError, CoreResult, IdentityStore, bootstrap};
use tracing::{error, warn};
use web_sys::Storage;

use super::provider::load_provider;

/// Session storage key for the ID token
pub const ID_TOKEN_KEY: &str = "gatehouse.id_token";

/// Get sessionStorage
fn get_session_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// ID token of the stored session, if any
pub fn stored_token() -> Option<String> {
    get_session_storage()
        .and_then(|storage| storage.get_item(ID_TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

/// Replace or clear the stored ID token
pub fn store_token(token: Option<&str>) {
    let Some(storage) = get_session_storage() else {
        warn!("sessionStorage unavailable, session will not survive a reload");
        return;
    };
    let result = match token {
        Some(token) => storage.set_item(ID_TOKEN_KEY, token),
        None => storage.remove_item(ID_TOKEN_KEY),
    };
    if result.is_err() {
        warn!("Failed to update stored session");
    }
}

/// Resolve the stored session and publish the result.
///
/// Any failure leaves the store unsettled.
pub async fn restore(store: IdentityStore) {
    let provider = match load_provider().await {
        Ok(provider) => provider,
        Err(err) => {
            error!(error = %err, "Identity provider unavailable");
            return;
        }
    };
    // Failures are logged by the provider and keep the state unsettled
    let _ = provider
        .auth()
        .resolve_session(&store, stored_token().as_deref())
        .await;
}

/// Sign in with email and password and publish the new session
pub async fn sign_in(store: &IdentityStore, email: &str, password: &str) -> CoreResult<()> {
    let provider = load_provider().await?;
    let session = provider.auth().sign_in_with_password(email, password).await?;
    store_token(Some(&session.id_token));
    store.settle(Some(session.user));
    Ok(())
}

/// Re-check the stored session, e.g. after the user verified their email
pub async fn refresh(store: &IdentityStore) -> CoreResult<()> {
    let provider = load_provider().await?;
    provider
        .auth()
        .resolve_session(store, stored_token().as_deref())
        .await
}

/// Mail a verification link for the stored session
pub async fn send_verification_email() -> CoreResult<()> {
    let token = stored_token().ok_or_else(|| CoreError::rejected("not signed in"))?;
    let provider = load_provider().await?;
    provider.auth().send_verification_email(&token).await
}

/// Forget the stored session and publish the signed-out state
pub fn sign_out(store: &IdentityStore) {
    store_token(None);
    match bootstrap::current() {
        Some(provider) => provider.auth().sign_out(store),
        None => {
            store.settle(None);
        }
    }
}
