use super::*;

use base64::Engine as _;

fn token_with(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
    format!("{header}.{body}.sig")
}

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decodes_role_and_exp() {
    let token = token_with(r#"{"role":"admin","exp":1750000000,"username":"ana"}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.role.as_deref(), Some("admin"));
    assert_eq!(claims.exp, Some(1_750_000_000));
    assert_eq!(claims.username.as_deref(), Some("ana"));
}

#[test]
fn unknown_claims_are_ignored() {
    let token = token_with(r#"{"role":"cientometria","iat":1,"iss":"api"}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.role.as_deref(), Some("cientometria"));
    assert_eq!(claims.exp, None);
}

#[test]
fn accepts_padded_payload_segments() {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
    // 13-byte payload, so the padded encoding ends in "=".
    let body = base64::engine::general_purpose::URL_SAFE.encode(br#"{"role":"xy"}"#);
    assert!(body.ends_with('='));
    let claims = decode_claims(&format!("{header}.{body}.s")).unwrap();
    assert_eq!(claims.role.as_deref(), Some("xy"));
}

#[test]
fn rejects_wrong_segment_counts() {
    assert_eq!(decode_claims(""), None);
    assert_eq!(decode_claims("only"), None);
    assert_eq!(decode_claims("a.b"), None);
    assert_eq!(decode_claims("a.b.c.d"), None);
}

#[test]
fn rejects_non_json_payloads() {
    let header = URL_SAFE_NO_PAD.encode(b"{}");
    let body = URL_SAFE_NO_PAD.encode(b"not json");
    assert_eq!(decode_claims(&format!("{header}.{body}.s")), None);
    assert_eq!(decode_claims("a.!!!.c"), None);
}

// =============================================================
// validate
// =============================================================

#[test]
fn live_token_passes() {
    let token = token_with(r#"{"role":"admin","exp":2000}"#);
    assert!(validate(&token, 1999).is_some());
}

#[test]
fn expired_token_fails() {
    let token = token_with(r#"{"role":"admin","exp":2000}"#);
    assert_eq!(validate(&token, 2000), None);
    assert_eq!(validate(&token, 3000), None);
}

#[test]
fn token_without_exp_never_expires() {
    let token = token_with(r#"{"role":"admin"}"#);
    assert!(validate(&token, i64::MAX).is_some());
}
