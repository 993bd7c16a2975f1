//! Session state: token, decoded role, and the startup loading gate.
//!
//! DESIGN
//! ======
//! The state itself is a plain value held in a context signal; every
//! transition is an explicit function here rather than ambient mutation.
//! The browser-only pieces (localStorage, wall clock) are isolated in the
//! `restore`/`login`/`logout` glue so the transitions stay testable on
//! the native target.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use records::Role;

use crate::util::storage;
use crate::util::token;

/// Authentication state shared through context.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    /// Bearer token for the current session, if any.
    pub token: Option<String>,
    /// Role decoded from the token payload.
    pub role: Option<Role>,
    /// True until the persisted session has been restored at startup.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            token: None,
            role: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Whether a session token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the session carries the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_ref().is_some_and(Role::is_admin)
    }

    /// State after attempting to adopt `token` at time `now_secs`.
    /// Expired or malformed tokens yield a signed-out state; decoding
    /// never fails hard.
    #[must_use]
    pub fn from_token(token: Option<String>, now_secs: i64) -> Self {
        let Some(token) = token else {
            return Self::signed_out();
        };
        match token::validate(&token, now_secs) {
            Some(claims) => Self {
                role: claims.role.as_deref().map(Role::parse),
                token: Some(token),
                loading: false,
            },
            None => Self::signed_out(),
        }
    }

    /// The signed-out, fully loaded state.
    #[must_use]
    pub fn signed_out() -> Self {
        Self {
            token: None,
            role: None,
            loading: false,
        }
    }
}

/// Restore the persisted session into `auth`. Invalid persisted tokens
/// are cleared from storage so the next startup is clean.
pub fn restore(auth: RwSignal<AuthState>) {
    let stored = storage::load_token();
    let had_token = stored.is_some();
    let state = AuthState::from_token(stored, now_secs());
    if had_token && !state.is_authenticated() {
        storage::clear_token();
    }
    auth.set(state);
}

/// Adopt a freshly issued token. Returns false (leaving state signed
/// out) if the token does not decode.
pub fn login(auth: RwSignal<AuthState>, token: &str) -> bool {
    let state = AuthState::from_token(Some(token.to_owned()), now_secs());
    let ok = state.is_authenticated();
    if ok {
        storage::save_token(token);
    } else {
        storage::clear_token();
    }
    auth.set(state);
    ok
}

/// Drop the session and its persisted token.
pub fn logout(auth: RwSignal<AuthState>) {
    storage::clear_token();
    auth.set(AuthState::signed_out());
}

/// Wall clock in seconds since the Unix epoch. Zero on the native target,
/// where no session restore ever runs.
#[allow(clippy::cast_possible_truncation)]
fn now_secs() -> i64 {
    #[cfg(feature = "csr")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}
