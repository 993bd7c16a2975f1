//! Admin page: read-only view of the AI service's decision log.

use leptos::prelude::*;
use records::LlmLogEntry;

use crate::components::guard::Guard;
use crate::components::header::Header;
use crate::state::notify::{NotifyState, Severity};

/// AI decision log page (admin only).
#[component]
pub fn LlmLogsPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    let entries = RwSignal::new(Vec::<LlmLogEntry>::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_llm_logs().await {
                Ok(log) => entries.set(log),
                Err(message) => notify.update(|n| {
                    n.show(Severity::Error, format!("Erro ao carregar os logs. {message}"));
                }),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        loading.set(false);
    });

    view! {
        <Guard admin_only=true>
            <div class="page">
                <Header/>
                <main class="page__content">
                    <div class="page__heading">
                        <h1>"Logs do Serviço de IA"</h1>
                    </div>

                    <Show when=move || loading.get()>
                        <div class="page-loading">
                            <span class="spinner"></span>
                            "Carregando logs..."
                        </div>
                    </Show>

                    <Show when=move || !loading.get() && entries.get().is_empty()>
                        <div class="results__empty">"Nenhum registro de decisão ainda."</div>
                    </Show>

                    <Show when=move || !entries.get().is_empty()>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Data/Hora"</th>
                                    <th>"Operação"</th>
                                    <th>"Linha"</th>
                                    <th>"Detalhe"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    entries
                                        .get()
                                        .into_iter()
                                        .map(|entry| {
                                            view! {
                                                <tr>
                                                    <td class="data-table__mono">
                                                        {entry.timestamp.clone().unwrap_or_else(|| "—".to_owned())}
                                                    </td>
                                                    <td>{entry.operation.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                                    <td>
                                                        {entry
                                                            .row_number
                                                            .map(|row| row.to_string())
                                                            .unwrap_or_else(|| "—".to_owned())}
                                                    </td>
                                                    <td>{entry.detail.clone().unwrap_or_default()}</td>
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
        </Guard>
    }
}
