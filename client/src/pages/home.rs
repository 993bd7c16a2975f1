//! Home dashboard: navigation cards plus a backend health indicator.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::guard::Guard;
use crate::components::header::Header;
use crate::state::auth::AuthState;

struct MenuItem {
    title: &'static str,
    description: &'static str,
    path: &'static str,
    admin_only: bool,
}

static MENU: [MenuItem; 7] = [
    MenuItem {
        title: "Busca Cientométrica",
        description: "Pesquise artigos em múltiplas bases de dados.",
        path: "/search",
        admin_only: false,
    },
    MenuItem {
        title: "Curadoria",
        description: "Gerencie e classifique seus artigos salvos.",
        path: "/curation",
        admin_only: false,
    },
    MenuItem {
        title: "Inserção Manual",
        description: "Adicione artigos manualmente ao sistema.",
        path: "/manual-insert",
        admin_only: false,
    },
    MenuItem {
        title: "Processamento em Lote",
        description: "Processe pastas e pacotes ZIP de documentos.",
        path: "/batch",
        admin_only: false,
    },
    MenuItem {
        title: "Cadastrar Usuário",
        description: "Gerencie o acesso de novos pesquisadores.",
        path: "/register-user",
        admin_only: true,
    },
    MenuItem {
        title: "Usuários",
        description: "Edite permissões e categorias de acesso.",
        path: "/users",
        admin_only: true,
    },
    MenuItem {
        title: "Logs IA",
        description: "Acompanhe as decisões do serviço de classificação.",
        path: "/llm-logs",
        admin_only: true,
    },
];

/// Home page with one card per work area.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Probed once on entry; purely informational.
    let api_up = RwSignal::new(None::<bool>);
    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if api_up.get_untracked().is_none() {
                leptos::task::spawn_local(async move {
                    api_up.set(Some(crate::net::api::check_health().await));
                });
            }
        }
    });

    let go = Callback::new(move |path: &'static str| {
        navigate(path, NavigateOptions::default());
    });

    view! {
        <Guard>
            <div class="page">
                <Header/>
                <main class="page__content">
                    <div class="page__heading">
                        <h1>"Dashboard"</h1>
                        <span
                            class="health-dot"
                            class:health-dot--up=move || api_up.get() == Some(true)
                            class:health-dot--down=move || api_up.get() == Some(false)
                            title=move || match api_up.get() {
                                Some(true) => "API disponível",
                                Some(false) => "API indisponível",
                                None => "Verificando API...",
                            }
                        ></span>
                    </div>
                    <div class="card-grid">
                        {MENU
                            .iter()
                            .map(|item| {
                                let admin_only = item.admin_only;
                                let path = item.path;
                                view! {
                                    <Show when=move || !admin_only || auth.get().is_admin()>
                                        <button class="menu-card" on:click=move |_| go.run(path)>
                                            <h2>{item.title}</h2>
                                            <p>{item.description}</p>
                                        </button>
                                    </Show>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </main>
            </div>
        </Guard>
    }
}
