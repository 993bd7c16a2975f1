//! Route guard wrapper for protected pages.
//!
//! The single decision point of the original ProtectedRoute: a neutral
//! loading indicator while the session restores, a `/login` redirect when
//! unauthenticated, the page otherwise. Admin-only pages add a role
//! redirect on top.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{install_admin_redirect, install_unauth_redirect};

/// Wrap a protected page. With `admin_only`, non-admin sessions are sent
/// back to `/home`.
#[component]
pub fn Guard(#[prop(optional)] admin_only: bool, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    install_unauth_redirect(auth, use_navigate());
    if admin_only {
        install_admin_redirect(auth, use_navigate());
    }

    let visible = move || {
        let state = auth.get();
        !state.loading && state.is_authenticated() && (!admin_only || state.is_admin())
    };

    view! {
        <Show
            when=visible
            fallback=|| {
                view! {
                    <div class="page-loading">
                        <span class="spinner"></span>
                        "Carregando..."
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
