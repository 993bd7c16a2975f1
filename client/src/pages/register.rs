//! Admin page: register a new user account.

use leptos::prelude::*;
use records::Role;

use crate::components::guard::Guard;
use crate::components::header::Header;
use crate::state::notify::{NotifyState, Severity};

/// User registration page (admin only).
#[component]
pub fn RegisterPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let role = RwSignal::new(Role::Cientometria);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let user = username.get().trim().to_owned();
        let mail = email.get().trim().to_owned();
        let pass = password.get();
        if user.is_empty() || mail.is_empty() || pass.is_empty() {
            notify.update(|n| n.show(Severity::Error, "Preencha todos os campos."));
            return;
        }
        loading.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let selected_role = role.get_untracked();
            match crate::net::api::register_user(&user, &mail, &pass, &selected_role).await {
                Ok(message) => {
                    notify.update(|n| n.show(Severity::Success, message));
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    role.set(Role::Cientometria);
                }
                Err(message) => notify.update(|n| {
                    n.show(Severity::Error, format!("Erro ao registrar usuário. {message}"));
                }),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user, mail, pass);
            loading.set(false);
        }
    };

    view! {
        <Guard admin_only=true>
            <div class="page">
                <Header/>
                <main class="page__content page__content--narrow">
                    <div class="page__heading">
                        <h1>"Cadastrar Novo Usuário"</h1>
                    </div>
                    <form class="panel" on:submit=on_submit>
                        <label class="field">
                            "Nome de Usuário"
                            <input
                                class="field__input"
                                type="text"
                                autocomplete="username"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "Email"
                            <input
                                class="field__input"
                                type="email"
                                autocomplete="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "Senha"
                            <div class="field__password">
                                <input
                                    class="field__input"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    autocomplete="new-password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button
                                    type="button"
                                    class="field__password-toggle"
                                    on:click=move |_| show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { "Ocultar" } else { "Mostrar" }}
                                </button>
                            </div>
                        </label>
                        <label class="field">
                            "Cargo (Role)"
                            <select
                                class="field__input"
                                on:change=move |ev| role.set(Role::parse(&event_target_value(&ev)))
                            >
                                {Role::options()
                                    .into_iter()
                                    .map(|option| {
                                        let value = option.as_str().to_owned();
                                        let label = option.label().to_owned();
                                        let current = option.clone();
                                        view! {
                                            <option
                                                value=value
                                                selected=move || role.get() == current
                                            >
                                                {label}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                            {move || if loading.get() { "Registrando..." } else { "Registrar Usuário" }}
                        </button>
                    </form>
                </main>
            </div>
        </Guard>
    }
}
