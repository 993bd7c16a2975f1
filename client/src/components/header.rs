//! Top application bar with navigation and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};

/// Application header. Navigation links render only for authenticated
/// sessions; the admin entries additionally require the admin role.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |(): ()| {
        auth::logout(auth);
        navigate("/login", NavigateOptions::default());
    });

    view! {
        <header class="app-header">
            <a href="/home" class="app-header__brand">
                "Busca Cientométrica"
            </a>
            <Show when=move || auth.get().is_authenticated()>
                <nav class="app-header__nav">
                    <a href="/search">"Busca"</a>
                    <a href="/manual-insert">"Inserção Manual"</a>
                    <a href="/curation">"Curadoria"</a>
                    <a href="/batch">"Lote"</a>
                    <Show when=move || auth.get().is_admin()>
                        <a href="/register-user">"Cadastrar Usuário"</a>
                        <a href="/users">"Usuários"</a>
                        <a href="/llm-logs">"Logs IA"</a>
                    </Show>
                    <button class="app-header__logout" on:click=move |_| on_logout.run(())>
                        "Sair"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
