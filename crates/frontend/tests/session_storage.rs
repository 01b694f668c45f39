//! Browser tests for session token storage
#![cfg(target_arch = "wasm32")]

use gatehouse_core::{IdentityState, IdentityStore, User};
use gatehouse_frontend::services::session;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_token_round_trip() {
    session::store_token(Some("token-abc"));
    assert_eq!(session::stored_token().as_deref(), Some("token-abc"));

    session::store_token(None);
    assert_eq!(session::stored_token(), None);
}

#[wasm_bindgen_test]
fn test_sign_out_clears_token_and_settles() {
    session::store_token(Some("token-abc"));
    let store = IdentityStore::with_state(IdentityState::signed_in(User::new("uid-1")));

    session::sign_out(&store);

    assert_eq!(session::stored_token(), None);
    assert_eq!(store.snapshot(), IdentityState::signed_out());
}
