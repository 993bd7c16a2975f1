//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::notice::NoticeBar;
use crate::pages::batch::BatchPage;
use crate::pages::curation::CurationPage;
use crate::pages::home::HomePage;
use crate::pages::llm_logs::LlmLogsPage;
use crate::pages::login::LoginPage;
use crate::pages::manual_insert::ManualInsertPage;
use crate::pages::register::RegisterPage;
use crate::pages::search::SearchPage;
use crate::pages::users::UsersPage;
use crate::state::auth::{self, AuthState};
use crate::state::notify::NotifyState;

/// Root application component.
///
/// Provides the session and notice contexts, restores the persisted
/// session once, and sets up client-side routing. Unknown paths land on
/// `/home`, whose guard bounces unauthenticated visitors to `/login`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth_state = RwSignal::new(AuthState::default());
    let notify = RwSignal::new(NotifyState::default());

    provide_context(auth_state);
    provide_context(notify);

    // One-time session restore; flips `loading` off for the route guard.
    Effect::new(move || {
        if auth_state.get_untracked().loading {
            auth::restore(auth_state);
        }
    });

    view! {
        <Title text="Busca Cientométrica"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/home"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("search") view=SearchPage/>
                <Route path=StaticSegment("curation") view=CurationPage/>
                <Route path=StaticSegment("manual-insert") view=ManualInsertPage/>
                <Route path=StaticSegment("batch") view=BatchPage/>
                <Route path=StaticSegment("register-user") view=RegisterPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("llm-logs") view=LlmLogsPage/>
            </Routes>
        </Router>

        <NoticeBar/>
    }
}
