//! Curation page: record grid with derived statuses, filters, summary,
//! pagination, per-record AI/manual actions, and the evidence dialog.

use leptos::prelude::*;
use records::filter::{self, RecordFilter, SortOrder, StatusFilter};
use records::{ArticleRecord, CurationStatus};

use crate::components::guard::Guard;
use crate::components::header::Header;
use crate::components::record_card::RecordCard;
use crate::components::status_chip::StatusChip;
use crate::state::notify::{NotifyState, Severity};
use crate::util::dialog;
use crate::util::preview;

const PAGE_SIZES: [usize; 4] = [9, 18, 30, 48];

/// Delay before re-fetching after a fire-and-forget batch trigger; the
/// backend has no completion signal.
#[cfg(feature = "csr")]
const BATCH_REFETCH_MS: u32 = 2_000;

/// Curation workspace.
#[component]
pub fn CurationPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    let articles = RwSignal::new(Vec::<ArticleRecord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let status_filter = RwSignal::new(StatusFilter::All);
    let category_filter = RwSignal::new(None::<String>);
    let query = RwSignal::new(String::new());
    let order = RwSignal::new(SortOrder::Asc);
    let page = RwSignal::new(0_usize);
    let per_page = RwSignal::new(PAGE_SIZES[0]);

    let is_triggering = RwSignal::new(false);
    let processing_row = RwSignal::new(None::<i64>);
    let analysis = RwSignal::new(None::<ArticleRecord>);
    let preview_src = RwSignal::new(None::<String>);

    let busy = Signal::derive(move || is_triggering.get() || processing_row.get().is_some());

    let fetch = Callback::new(move |(): ()| {
        error.set(String::new());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_curation().await {
                Ok(records) => articles.set(records),
                Err(message) => error.set(format!(
                    "Não foi possível carregar os artigos da curadoria. {message}"
                )),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        loading.set(false);
    });

    Effect::new(move || fetch.run(()));

    let visible = Signal::derive(move || {
        let current_filter = RecordFilter {
            status: status_filter.get(),
            category: category_filter.get(),
            query: query.get(),
        };
        filter::filtered(&articles.get(), &current_filter, order.get())
    });
    let paged = Signal::derive(move || filter::paginate(&visible.get(), page.get(), per_page.get()));
    let summary = Signal::derive(move || filter::summarize(&articles.get()));
    let category_options = Signal::derive(move || filter::categories(&articles.get()));

    // Analysis/evidence dialog. Closing re-fetches and resets filters so
    // the updated record is visible wherever it landed.
    let close_analysis = Callback::new(move |(): ()| {
        analysis.set(None);
        status_filter.set(StatusFilter::All);
        query.set(String::new());
        page.set(0);
        fetch.run(());
    });

    let on_analyze = Callback::new(move |record: ArticleRecord| {
        let Some(row) = record.row_number else {
            notify.update(|n| {
                n.show(
                    Severity::Error,
                    "Não foi possível determinar o número da linha para este artigo.",
                );
            });
            return;
        };
        processing_row.set(Some(row));
        notify.update(|n| n.show(Severity::Info, format!("Analisando linha {row}...")));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::trigger_single_curation(row).await {
                Ok(outcome) => {
                    notify.update(NotifyState::clear);
                    analysis.set(Some(outcome.updated_article));
                }
                Err(message) => notify.update(|n| {
                    n.show(Severity::Error, format!("Falha ao analisar a linha {row}. {message}"));
                }),
            }
            processing_row.set(None);
        });
        #[cfg(not(feature = "csr"))]
        processing_row.set(None);
    });

    let on_categorize = Callback::new(move |record: ArticleRecord| {
        let Some(row) = record.row_number else {
            notify.update(|n| {
                n.show(
                    Severity::Error,
                    "Não foi possível determinar o número da linha para este artigo.",
                );
            });
            return;
        };
        processing_row.set(Some(row));
        notify.update(|n| n.show(Severity::Info, format!("Categorizando linha {row}...")));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::categorize_row(row).await {
                Ok(outcome) => {
                    notify.update(NotifyState::clear);
                    analysis.set(Some(outcome.updated_article));
                }
                Err(message) => notify.update(|n| {
                    n.show(
                        Severity::Error,
                        format!("Falha ao categorizar a linha {row}. {message}"),
                    );
                }),
            }
            processing_row.set(None);
        });
        #[cfg(not(feature = "csr"))]
        processing_row.set(None);
    });

    let on_approve = Callback::new(move |record: ArticleRecord| {
        let Some(row) = record.row_number else {
            return;
        };
        let Some(file_name) = record.document_url.clone().filter(|u| !u.trim().is_empty())
        else {
            notify.update(|n| {
                n.show(
                    Severity::Warning,
                    "Este artigo não tem um arquivo local associado para ser aprovado.",
                );
            });
            return;
        };
        let title = record.title.clone().unwrap_or_default();
        if !dialog::confirm(&format!(
            "Tem certeza que deseja aprovar manualmente o artigo \"{title}\" (Linha {row})? \
             Uma cópia do arquivo será enviada para a pasta de aprovados."
        )) {
            return;
        }
        notify.update(|n| {
            n.show(Severity::Info, format!("Aprovando manualmente a linha {row}..."));
        });

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::manual_approve(row, &file_name).await {
                Ok(message) => {
                    notify.update(|n| n.show(Severity::Success, message));
                    fetch.run(());
                }
                Err(message) => notify.update(|n| n.show(Severity::Error, message)),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = file_name;
    });

    let on_reject = Callback::new(move |record: ArticleRecord| {
        let Some(row) = record.row_number else {
            return;
        };
        let title = record.title.clone().unwrap_or_default();
        if !dialog::confirm(&format!(
            "Tem certeza que deseja rejeitar o artigo \"{title}\" (Linha {row})?"
        )) {
            return;
        }

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::manual_reject(row).await {
                Ok(message) => {
                    notify.update(|n| n.show(Severity::Success, message));
                    fetch.run(());
                }
                Err(message) => notify.update(|n| n.show(Severity::Error, message)),
            }
        });
    });

    let on_delete = Callback::new(move |record: ArticleRecord| {
        let Some(row) = record.row_number else {
            return;
        };
        let title = record.title.clone().unwrap_or_default();
        if !dialog::confirm(&format!(
            "Tem certeza que deseja excluir o artigo \"{title}\" (Linha {row})?"
        )) {
            return;
        }
        notify.update(|n| n.show(Severity::Info, format!("Excluindo linha {row}...")));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_row(row).await {
                Ok(message) => {
                    notify.update(|n| n.show(Severity::Success, message));
                    fetch.run(());
                }
                Err(message) => notify.update(|n| {
                    n.show(Severity::Error, format!("Erro ao excluir artigo. {message}"));
                }),
            }
        });
    });

    let on_delete_unavailable = Callback::new(move |(): ()| {
        if !dialog::confirm(
            "Tem certeza que deseja excluir TODOS os artigos marcados como 'Indisponíveis' \
             (sem arquivo local)? Essa ação não pode ser desfeita.",
        ) {
            return;
        }
        notify.update(|n| n.show(Severity::Info, "Excluindo artigos indisponíveis..."));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_unavailable().await {
                Ok(message) => {
                    notify.update(|n| n.show(Severity::Success, message));
                    fetch.run(());
                }
                Err(message) => notify.update(|n| {
                    n.show(
                        Severity::Error,
                        format!("Erro ao excluir artigos indisponíveis. {message}"),
                    );
                }),
            }
        });
    });

    let on_trigger_batch = Callback::new(move |(): ()| {
        is_triggering.set(true);
        notify.update(|n| n.show(Severity::Info, "Acionando curadoria em lote..."));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::trigger_batch_curation().await {
                Ok(message) => {
                    notify.update(|n| n.show(Severity::Success, message));
                    gloo_timers::future::TimeoutFuture::new(BATCH_REFETCH_MS).await;
                    fetch.run(());
                }
                Err(message) => notify.update(|n| {
                    n.show(
                        Severity::Error,
                        format!("Falha ao acionar a curadoria em lote. {message}"),
                    );
                }),
            }
            is_triggering.set(false);
        });
        #[cfg(not(feature = "csr"))]
        is_triggering.set(false);
    });

    let on_preview = Callback::new(move |document_url: String| {
        preview_src.set(preview::preview_url(
            crate::net::api::api_base(),
            &document_url,
        ));
    });

    view! {
        <Guard>
            <div class="page">
                <Header/>
                <main class="page__content page__content--wide">
                    <div class="page__heading">
                        <h1>"Artigos em Curadoria"</h1>
                        <div class="page__heading-actions">
                            <button
                                class="btn btn--primary"
                                disabled=move || busy.get()
                                on:click=move |_| on_trigger_batch.run(())
                            >
                                {move || {
                                    if is_triggering.get() {
                                        "Processando Lote..."
                                    } else {
                                        "Analisar Pendentes"
                                    }
                                }}
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || busy.get()
                                on:click=move |_| on_delete_unavailable.run(())
                            >
                                "Excluir Indisponíveis"
                            </button>
                        </div>
                    </div>

                    <section class="summary">
                        <h2>"Resumo da Curadoria"</h2>
                        <div class="summary__grid">
                            <div class="summary__item summary__item--primary">
                                <strong>{move || summary.get().approved}</strong>
                                <span>"Aprovados"</span>
                            </div>
                            <div class="summary__item summary__item--warning">
                                <strong>{move || summary.get().pending}</strong>
                                <span>"Pendentes"</span>
                            </div>
                            <div class="summary__item summary__item--error">
                                <strong>{move || summary.get().rejected}</strong>
                                <span>"Rejeitados"</span>
                            </div>
                            <div class="summary__item summary__item--muted">
                                <strong>{move || summary.get().unavailable}</strong>
                                <span>"Indisponíveis"</span>
                            </div>
                        </div>

                        <div class="filters">
                            <div class="filters__status">
                                <span class="filters__label">"Filtrar por Status"</span>
                                <button
                                    class="btn btn--chip"
                                    class:btn--chip-active=move || status_filter.get() == StatusFilter::All
                                    on:click=move |_| {
                                        status_filter.set(StatusFilter::All);
                                        page.set(0);
                                    }
                                >
                                    "Todos"
                                </button>
                                {CurationStatus::all()
                                    .into_iter()
                                    .map(|status| {
                                        view! {
                                            <button
                                                class="btn btn--chip"
                                                class:btn--chip-active=move || {
                                                    status_filter.get() == StatusFilter::Only(status)
                                                }
                                                on:click=move |_| {
                                                    status_filter.set(StatusFilter::Only(status));
                                                    page.set(0);
                                                }
                                            >
                                                {status.info().label}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <div class="filters__row">
                                <label class="field">
                                    "Categoria"
                                    <select
                                        class="field__input"
                                        on:change=move |ev| {
                                            let value = event_target_value(&ev);
                                            category_filter
                                                .set(if value == "all" { None } else { Some(value) });
                                            page.set(0);
                                        }
                                    >
                                        <option value="all">"Todas"</option>
                                        {move || {
                                            category_options
                                                .get()
                                                .into_iter()
                                                .map(|cat| {
                                                    let selected = category_filter.get() == Some(cat.clone());
                                                    view! {
                                                        <option value=cat.clone() selected=selected>
                                                            {cat.clone()}
                                                        </option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        }}
                                    </select>
                                </label>
                                <label class="field filters__search">
                                    "Buscar por Título ou Autor"
                                    <input
                                        class="field__input"
                                        type="text"
                                        prop:value=move || query.get()
                                        on:input=move |ev| {
                                            query.set(event_target_value(&ev));
                                            page.set(0);
                                        }
                                    />
                                </label>
                                <label class="field">
                                    "Ordem"
                                    <select
                                        class="field__input"
                                        on:change=move |ev| {
                                            order
                                                .set(
                                                    if event_target_value(&ev) == "desc" {
                                                        SortOrder::Desc
                                                    } else {
                                                        SortOrder::Asc
                                                    },
                                                );
                                            page.set(0);
                                        }
                                    >
                                        <option value="asc">"Crescente"</option>
                                        <option value="desc">"Decrescente"</option>
                                    </select>
                                </label>
                            </div>
                        </div>
                    </section>

                    <Show when=move || loading.get()>
                        <div class="page-loading">
                            <span class="spinner"></span>
                            "Carregando artigos..."
                        </div>
                    </Show>

                    <Show when=move || !error.get().is_empty()>
                        <div class="alert alert--error">{move || error.get()}</div>
                    </Show>

                    <Show when=move || !loading.get() && error.get().is_empty()>
                        <div class="card-grid card-grid--records">
                            {move || {
                                paged
                                    .get()
                                    .into_iter()
                                    .map(|record| {
                                        let row = record.row_number;
                                        let processing = Signal::derive(move || {
                                            row.is_some() && processing_row.get() == row
                                        });
                                        view! {
                                            <RecordCard
                                                record=record
                                                busy=busy
                                                processing=processing
                                                on_analyze=on_analyze
                                                on_categorize=on_categorize
                                                on_approve=on_approve
                                                on_reject=on_reject
                                                on_delete=on_delete
                                                on_preview=on_preview
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>

                        <Show when=move || visible.get().is_empty()>
                            <div class="results__empty">"Nenhum artigo corresponde aos filtros."</div>
                        </Show>

                        <div class="pagination">
                            <label class="field field--inline">
                                "Itens por página:"
                                <select
                                    class="field__input"
                                    on:change=move |ev| {
                                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                            per_page.set(size);
                                            page.set(0);
                                        }
                                    }
                                >
                                    {PAGE_SIZES
                                        .into_iter()
                                        .map(|size| {
                                            view! {
                                                <option
                                                    value=size.to_string()
                                                    selected=move || per_page.get() == size
                                                >
                                                    {size.to_string()}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <span class="pagination__count">
                                {move || {
                                    let total = visible.get().len();
                                    let start = (page.get() * per_page.get()).min(total);
                                    let end = (start + per_page.get()).min(total);
                                    let shown_from = if total == 0 { 0 } else { start + 1 };
                                    format!("{shown_from}–{end} de {total}")
                                }}
                            </span>
                            <button
                                class="btn"
                                disabled=move || page.get() == 0
                                on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
                            >
                                "Anterior"
                            </button>
                            <button
                                class="btn"
                                disabled=move || {
                                    (page.get() + 1) * per_page.get() >= visible.get().len()
                                }
                                on:click=move |_| page.update(|p| *p += 1)
                            >
                                "Próxima"
                            </button>
                        </div>
                    </Show>
                </main>
            </div>

            // Evidence dialog for a freshly analyzed/categorized record.
            <Show when=move || analysis.get().is_some()>
                {move || {
                    analysis
                        .get()
                        .map(|record| {
                            let info = CurationStatus::derive(&record).info();
                            let title = record
                                .title
                                .clone()
                                .unwrap_or_else(|| "Sem Título".to_owned());
                            let fields = record.display_fields();
                            view! {
                                <div class="dialog-backdrop">
                                    <div class="dialog dialog--analysis">
                                        <div class=format!(
                                            "dialog__header dialog__header--{}",
                                            info.tone.as_str(),
                                        )>
                                            <h2>"Análise Concluída"</h2>
                                            <StatusChip info=info/>
                                        </div>
                                        <div class="dialog__body">
                                            <h3>{title}</h3>
                                            <div class="record-card__fields">
                                                {fields
                                                    .iter()
                                                    .map(|(label, value)| {
                                                        view! {
                                                            <div class="record-card__field">
                                                                <span class="record-card__field-label">
                                                                    {label.clone()}
                                                                </span>
                                                                <span class="record-card__field-value">
                                                                    {value.clone()}
                                                                </span>
                                                            </div>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        </div>
                                        <div class="dialog__actions">
                                            <button
                                                class="btn btn--primary"
                                                on:click=move |_| close_analysis.run(())
                                            >
                                                "Continuar Curadoria"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>

            // Inline document preview.
            <Show when=move || preview_src.get().is_some()>
                {move || {
                    preview_src
                        .get()
                        .map(|src| {
                            view! {
                                <div class="dialog-backdrop" on:click=move |_| preview_src.set(None)>
                                    <div class="dialog dialog--preview" on:click=move |ev| ev.stop_propagation()>
                                        <div class="dialog__header">
                                            <h2>"Visualização do Documento"</h2>
                                            <button class="btn" on:click=move |_| preview_src.set(None)>
                                                "Fechar"
                                            </button>
                                        </div>
                                        <iframe class="dialog__frame" src=src title="PDF Preview"></iframe>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </Guard>
    }
}
