//! Browser tests for the localStorage-backed session store

#![cfg(target_arch = "wasm32")]

use portal_frontend_common::{check_session, logout, BrowserSessionStore, SessionStatus, SessionStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_browser_store_round_trip() {
    let store = BrowserSessionStore;
    store.set("portal-test-key", "value").unwrap();
    assert_eq!(
        store.get("portal-test-key").unwrap().as_deref(),
        Some("value")
    );
    store.remove("portal-test-key").unwrap();
    assert_eq!(store.get("portal-test-key").unwrap(), None);
}

#[wasm_bindgen_test]
fn test_browser_logout_clears_session() {
    let store = BrowserSessionStore;
    store.set("token", "abc").unwrap();
    store.set("user", "{}").unwrap();
    assert_eq!(check_session(&store), SessionStatus::Authenticated("abc".into()));

    logout(&store);

    assert_eq!(check_session(&store), SessionStatus::Missing);
    assert_eq!(store.get("user").unwrap(), None);
}
