//! Search page: form, results table, and save-selected flow.

use leptos::prelude::*;
use records::search::{SearchHit, SearchParams};

use crate::components::guard::Guard;
use crate::components::header::Header;
use crate::components::results_table::ResultsTable;
use crate::components::search_form::SearchForm;
use crate::state::notify::{NotifyState, Severity};

/// Search page. An empty response keeps the previous table state and
/// surfaces a "no results" notice instead.
#[component]
pub fn SearchPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    let results = RwSignal::new(Vec::<SearchHit>::new());
    let searched = RwSignal::new(false);
    let search_loading = RwSignal::new(false);
    let save_loading = RwSignal::new(false);

    let on_search = Callback::new(move |params: SearchParams| {
        if search_loading.get() {
            return;
        }
        search_loading.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::search_articles(&params).await {
                Ok(hits) => {
                    if hits.is_empty() {
                        notify.update(|n| n.show(Severity::Info, "Nenhum resultado encontrado."));
                    }
                    results.set(hits);
                    searched.set(true);
                }
                Err(message) => {
                    notify.update(|n| {
                        n.show(Severity::Error, format!("Erro ao buscar resultados. {message}"));
                    });
                }
            }
            search_loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = params;
            search_loading.set(false);
        }
    });

    let on_save = Callback::new(move |selected: Vec<SearchHit>| {
        if save_loading.get() {
            return;
        }
        save_loading.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_articles(&selected).await {
                Ok(message) => notify.update(|n| n.show(Severity::Success, message)),
                Err(message) => notify.update(|n| {
                    n.show(Severity::Error, format!("Erro ao salvar dados. {message}"));
                }),
            }
            save_loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = selected;
            save_loading.set(false);
        }
    });

    view! {
        <Guard>
            <div class="page">
                <Header/>
                <main class="page__content">
                    <div class="page__heading">
                        <h1>"Busca de Artigos"</h1>
                    </div>
                    <SearchForm on_search=on_search loading=search_loading/>
                    <Show when=move || searched.get() && !results.get().is_empty()>
                        <ResultsTable results=results on_save=on_save saving=save_loading/>
                    </Show>
                </main>
            </div>
        </Guard>
    }
}
