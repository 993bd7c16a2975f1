//! Admin page: account list, permissions dialog, and account deletion.

use leptos::prelude::*;
use records::users::CATEGORY_OPTIONS;
use records::{Role, UserAccount};

use crate::components::guard::Guard;
use crate::components::header::Header;
use crate::state::notify::{NotifyState, Severity};
use crate::util::dialog;

/// User management page (admin only).
#[component]
pub fn UsersPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    let users = RwSignal::new(Vec::<UserAccount>::new());
    let loading = RwSignal::new(true);

    // Permissions dialog state.
    let editing = RwSignal::new(None::<UserAccount>);
    let new_role = RwSignal::new(Role::Cientometria);
    let selected_categories = RwSignal::new(Vec::<String>::new());
    let saving = RwSignal::new(false);

    let fetch = Callback::new(move |(): ()| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_users().await {
                Ok(accounts) => users.set(accounts),
                Err(message) => notify.update(|n| {
                    n.show(
                        Severity::Error,
                        format!("Erro ao carregar lista de usuários. {message}"),
                    );
                }),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        loading.set(false);
    });

    Effect::new(move || fetch.run(()));

    let open_editor = Callback::new(move |account: UserAccount| {
        new_role.set(account.role.clone());
        selected_categories.set(account.allowed_categories.clone());
        editing.set(Some(account));
    });

    let toggle_category = Callback::new(move |category: String| {
        selected_categories.update(|categories| {
            if let Some(position) = categories.iter().position(|c| c == &category) {
                categories.remove(position);
            } else {
                categories.push(category);
            }
        });
    });

    let save_permissions = Callback::new(move |(): ()| {
        let Some(account) = editing.get() else {
            return;
        };
        saving.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let role = new_role.get_untracked();
            let categories = selected_categories.get_untracked();
            match crate::net::api::update_user_permissions(&account.id, &role, &categories).await
            {
                Ok(message) => {
                    notify.update(|n| n.show(Severity::Success, message));
                    editing.set(None);
                    fetch.run(());
                }
                Err(message) => notify.update(|n| {
                    n.show(Severity::Error, format!("Falha ao atualizar permissões. {message}"));
                }),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = account;
            saving.set(false);
        }
    });

    let delete_account = Callback::new(move |account: UserAccount| {
        if !dialog::confirm(&format!(
            "Tem certeza que deseja excluir o usuário \"{}\"? Esta ação não pode ser desfeita.",
            account.username
        )) {
            return;
        }

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(&account.id).await {
                Ok(message) => {
                    notify.update(|n| n.show(Severity::Success, message));
                    fetch.run(());
                }
                Err(message) => notify.update(|n| {
                    n.show(Severity::Error, format!("Falha ao excluir usuário. {message}"));
                }),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = account;
    });

    view! {
        <Guard admin_only=true>
            <div class="page">
                <Header/>
                <main class="page__content">
                    <div class="page__heading">
                        <h1>"Gerenciamento de Usuários"</h1>
                    </div>

                    <Show when=move || loading.get()>
                        <div class="page-loading">
                            <span class="spinner"></span>
                            "Carregando usuários..."
                        </div>
                    </Show>

                    <Show when=move || !loading.get()>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Username"</th>
                                    <th>"E-mail"</th>
                                    <th>"Role"</th>
                                    <th>"Categorias Permitidas"</th>
                                    <th>"Ações"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    users
                                        .get()
                                        .into_iter()
                                        .map(|account| {
                                            let role_label = account.role.label().to_owned();
                                            let is_admin = account.role.is_admin();
                                            let categories = account.categories_label();
                                            let for_edit = account.clone();
                                            let for_delete = account.clone();
                                            view! {
                                                <tr>
                                                    <td>{account.username.clone()}</td>
                                                    <td>{account.email.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                                    <td>
                                                        <span
                                                            class="chip"
                                                            class:chip--primary=is_admin
                                                        >
                                                            {role_label}
                                                        </span>
                                                    </td>
                                                    <td>{categories}</td>
                                                    <td>
                                                        <button
                                                            class="btn"
                                                            title="Editar"
                                                            on:click=move |_| open_editor.run(for_edit.clone())
                                                        >
                                                            "Editar"
                                                        </button>
                                                        <button
                                                            class="btn btn--danger"
                                                            title="Excluir"
                                                            on:click=move |_| delete_account.run(for_delete.clone())
                                                        >
                                                            "Excluir"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </main>
            </div>

            <Show when=move || editing.get().is_some()>
                {move || {
                    editing
                        .get()
                        .map(|account| {
                            view! {
                                <div class="dialog-backdrop">
                                    <div class="dialog">
                                        <div class="dialog__header">
                                            <h2>{format!("Editar Permissões: {}", account.username)}</h2>
                                        </div>
                                        <div class="dialog__body">
                                            <label class="field">
                                                "Role"
                                                <select
                                                    class="field__input"
                                                    on:change=move |ev| {
                                                        new_role.set(Role::parse(&event_target_value(&ev)));
                                                    }
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
                                                                    selected=move || new_role.get() == current
                                                                >
                                                                    {label}
                                                                </option>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </select>
                                            </label>
                                            <fieldset class="field">
                                                <legend>"Categorias Permitidas"</legend>
                                                <p class="panel__hint">
                                                    "Se nenhuma for selecionada, o usuário terá acesso a todas (Global)."
                                                </p>
                                                {CATEGORY_OPTIONS
                                                    .into_iter()
                                                    .map(|category| {
                                                        let toggle_value = category.to_owned();
                                                        view! {
                                                            <label class="checkbox">
                                                                <input
                                                                    type="checkbox"
                                                                    prop:checked=move || {
                                                                        selected_categories
                                                                            .get()
                                                                            .iter()
                                                                            .any(|c| c == category)
                                                                    }
                                                                    on:change=move |_| {
                                                                        toggle_category.run(toggle_value.clone());
                                                                    }
                                                                />
                                                                {category}
                                                            </label>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </fieldset>
                                        </div>
                                        <div class="dialog__actions">
                                            <button class="btn" on:click=move |_| editing.set(None)>
                                                "Cancelar"
                                            </button>
                                            <button
                                                class="btn btn--primary"
                                                disabled=move || saving.get()
                                                on:click=move |_| save_permissions.run(())
                                            >
                                                "Salvar Alterações"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </Guard>
    }
}
