use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.signature")
}

const NOW: i64 = 1_750_000_000;

// =============================================================
// Session rehydration
// =============================================================

#[test]
fn no_token_is_signed_out() {
    let state = AuthState::from_token(None, NOW);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.role, None);
}

#[test]
fn valid_token_is_authenticated_with_decoded_role() {
    let token = token_with(&serde_json::json!({ "role": "admin", "exp": NOW + 3600 }));
    let state = AuthState::from_token(Some(token.clone()), NOW);
    assert!(state.is_authenticated());
    assert!(state.is_admin());
    assert_eq!(state.token, Some(token));
    assert!(!state.loading);
}

#[test]
fn expired_token_is_signed_out() {
    let token = token_with(&serde_json::json!({ "role": "admin", "exp": NOW - 1 }));
    let state = AuthState::from_token(Some(token), NOW);
    assert!(!state.is_authenticated());
    assert_eq!(state.role, None);
}

#[test]
fn malformed_token_is_signed_out_not_fatal() {
    for raw in ["", "garbage", "a.b", "a.!!!.c", "a.b.c.d"] {
        let state = AuthState::from_token(Some(raw.to_owned()), NOW);
        assert!(!state.is_authenticated(), "token {raw:?}");
    }
}

#[test]
fn rehydration_is_idempotent() {
    let token = token_with(&serde_json::json!({ "role": "cientometria", "exp": NOW + 60 }));
    let first = AuthState::from_token(Some(token.clone()), NOW);
    let second = AuthState::from_token(first.token.clone(), NOW);
    assert_eq!(first, second);
}

// =============================================================
// Role gating
// =============================================================

#[test]
fn non_admin_roles_are_not_admin() {
    let token = token_with(&serde_json::json!({ "role": "curadoria_solos", "exp": NOW + 60 }));
    let state = AuthState::from_token(Some(token), NOW);
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn token_without_role_claim_still_authenticates() {
    let token = token_with(&serde_json::json!({ "exp": NOW + 60 }));
    let state = AuthState::from_token(Some(token), NOW);
    assert!(state.is_authenticated());
    assert_eq!(state.role, None);
    assert!(!state.is_admin());
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn initial_state_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn signed_out_is_loaded() {
    let state = AuthState::signed_out();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}
