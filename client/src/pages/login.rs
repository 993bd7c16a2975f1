//! Login page: credentials form posting to `POST /login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};

/// Login page. A successful login stores the issued token and navigates
/// home; failures render inline.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_signal = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let user = username.get().trim().to_owned();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            error.set("Informe usuário e senha.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&user, &pass).await {
                    Ok(token) => {
                        if auth::login(auth_signal, &token) {
                            navigate("/home", NavigateOptions::default());
                        } else {
                            error.set("Falha no login. Token inválido.".to_owned());
                        }
                    }
                    Err(message) => {
                        error.set(format!("Falha no login. {message}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, &pass);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Busca Cientométrica"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="field">
                        "Usuário"
                        <input
                            class="field__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Senha"
                        <div class="field__password">
                            <input
                                class="field__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="field__password-toggle"
                                title="Mostrar/ocultar senha"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Ocultar" } else { "Mostrar" }}
                            </button>
                        </div>
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary login-submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
