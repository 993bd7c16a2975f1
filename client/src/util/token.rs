//! JWT payload decoding for session bootstrap.
//!
//! The token is opaque to this client except for two claims: the `role`
//! used to gate admin surfaces, and the `exp` used to discard stale
//! sessions at startup. No signature verification happens here — the
//! backend re-validates every request, so the decoded claims only drive
//! presentation.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Claims this client reads out of the token payload. Everything else in
/// the payload is ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub role: Option<String>,
    /// Expiry, seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Decode the payload segment of a JWT. Returns `None` for anything that
/// is not a three-segment token with a base64url JSON payload.
#[must_use]
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let _signature = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    // Some issuers pad the segment; base64url in JWTs is unpadded.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Decode and expiry-check a token. `now_secs` is the caller's clock so
/// the check stays deterministic under test. Tokens without an `exp`
/// claim never expire.
#[must_use]
pub fn validate(token: &str, now_secs: i64) -> Option<Claims> {
    let claims = decode_claims(token)?;
    match claims.exp {
        Some(exp) if exp <= now_secs => None,
        _ => Some(claims),
    }
}
