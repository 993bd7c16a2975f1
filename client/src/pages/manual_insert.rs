//! Manual insertion page: full metadata form with the AI extraction
//! assistant and JSON/multipart save.

use leptos::prelude::*;
use records::ArticleRecord;

use crate::components::guard::Guard;
use crate::components::header::Header;
use crate::state::notify::{NotifyState, Severity};
use crate::util::upload;

/// DOM id of the hidden document file input.
const FILE_INPUT_ID: &str = "manual-insert-file";

/// Manual insertion workspace.
#[component]
pub fn ManualInsertPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    let form = RwSignal::new(ArticleRecord::default());
    let search_title = RwSignal::new(String::new());
    let file_name = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let active_step = RwSignal::new(0_usize);

    let on_extract = Callback::new(move |(): ()| {
        let title = search_title.get().trim().to_owned();
        let has_file = file_name.get().is_some();
        if title.is_empty() && !has_file {
            notify.update(|n| {
                n.show(
                    Severity::Error,
                    "Forneça o título ou o PDF para extração automática.",
                );
            });
            return;
        }
        loading.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let file = upload::selected_file(FILE_INPUT_ID);
            let title_opt = if title.is_empty() { None } else { Some(title.as_str()) };
            match crate::net::api::extract_metadata(title_opt, file).await {
                Ok(extracted) => {
                    form.update(|f| f.merge_extracted(&extracted));
                    active_step.set(1);
                    notify.update(|n| {
                        n.show(
                            Severity::Success,
                            "Dados extraídos com sucesso! Revise os campos abaixo.",
                        );
                    });
                }
                Err(message) => notify.update(|n| {
                    n.show(Severity::Error, format!("Falha na extração por IA. {message}"));
                }),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        loading.set(false);
    });

    let on_save = Callback::new(move |(): ()| {
        let snapshot = form.get();
        let has_title = snapshot.title.as_deref().is_some_and(|t| !t.trim().is_empty());
        let has_authors = snapshot
            .authors
            .as_deref()
            .is_some_and(|a| !a.trim().is_empty());
        if !has_title || !has_authors {
            notify.update(|n| {
                n.show(Severity::Error, "Título e Autor(es) são obrigatórios.");
            });
            return;
        }
        loading.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let file = upload::selected_file(FILE_INPUT_ID);
            match crate::net::api::manual_insert(&snapshot, file).await {
                Ok(message) => {
                    notify.update(|n| n.show(Severity::Success, message));
                    form.set(ArticleRecord::default());
                    search_title.set(String::new());
                    file_name.set(None);
                    upload::clear_file_input(FILE_INPUT_ID);
                    active_step.set(0);
                }
                Err(message) => notify.update(|n| {
                    n.show(Severity::Error, format!("Erro ao salvar artigo. {message}"));
                }),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = snapshot;
            loading.set(false);
        }
    });

    view! {
        <Guard>
            <div class="page">
                <Header/>
                <main class="page__content">
                    <div class="page__heading">
                        <h1>"Inserção Manual"</h1>
                        <p class="page__subtitle">"Adicione novas evidências com auxílio de IA"</p>
                    </div>

                    <ol class="stepper">
                        {["Extração IA", "Revisão de Dados", "Finalização"]
                            .into_iter()
                            .enumerate()
                            .map(|(index, label)| {
                                view! {
                                    <li
                                        class="stepper__step"
                                        class:stepper__step--active=move || active_step.get() == index
                                    >
                                        {label}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ol>

                    <div class="manual-insert__grid">
                        <section class="panel">
                            <h2>"1. Assistente de IA"</h2>
                            <p class="panel__hint">
                                "A IA pode preencher os campos automaticamente a partir do PDF ou apenas do título."
                            </p>
                            <label class="field">
                                "Título do Artigo"
                                <input
                                    class="field__input"
                                    type="text"
                                    placeholder="Cole o título aqui..."
                                    prop:value=move || search_title.get()
                                    on:input=move |ev| search_title.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                "Documento PDF"
                                <input
                                    id=FILE_INPUT_ID
                                    class="field__input"
                                    type="file"
                                    accept="application/pdf"
                                    on:change=move |_| {
                                        file_name.set(upload::selected_file_name(FILE_INPUT_ID));
                                    }
                                />
                            </label>
                            <Show when=move || file_name.get().is_some()>
                                <span class="chip chip--primary">
                                    {move || file_name.get().unwrap_or_default()}
                                </span>
                            </Show>
                            <button
                                class="btn btn--secondary"
                                disabled=move || {
                                    loading.get()
                                        || (search_title.get().trim().is_empty()
                                            && file_name.get().is_none())
                                }
                                on:click=move |_| on_extract.run(())
                            >
                                {move || if loading.get() { "Extraindo..." } else { "Extrair com IA" }}
                            </button>
                        </section>

                        <section class="panel">
                            <h2>"2. Metadados do Artigo"</h2>
                            <div class="manual-insert__fields">
                                {field("Titulo", true, move || read(form, |f| &f.title), move |v| write(form, v, |f, v| f.title = v))}
                                {field("Autor(es)", false, move || read(form, |f| &f.authors), move |v| write(form, v, |f, v| f.authors = v))}
                                {field("Subtítulo", false, move || read(form, |f| &f.subtitle), move |v| write(form, v, |f, v| f.subtitle = v))}
                                {field("Ano", false, move || read(form, |f| &f.year), move |v| write(form, v, |f, v| f.year = v))}
                                {field("Número de citações recebidas (Google Scholar)", false, move || read(form, |f| &f.citations), move |v| write(form, v, |f, v| f.citations = v))}
                                {field("Palavras-chave", false, move || read(form, |f| &f.keywords), move |v| write(form, v, |f, v| f.keywords = v))}
                                {field("Resumo", true, move || read(form, |f| &f.abstract_text), move |v| write(form, v, |f, v| f.abstract_text = v))}
                                {field("Tipo de documento", false, move || read(form, |f| &f.document_type), move |v| write(form, v, |f, v| f.document_type = v))}
                                {field("Editora", false, move || read(form, |f| &f.publisher), move |v| write(form, v, |f, v| f.publisher = v))}
                                {field("Instituição", false, move || read(form, |f| &f.institution), move |v| write(form, v, |f, v| f.institution = v))}
                                {field("Local", false, move || read(form, |f| &f.place), move |v| write(form, v, |f, v| f.place = v))}
                                {field("Tipo de trabalho", false, move || read(form, |f| &f.work_type), move |v| write(form, v, |f, v| f.work_type = v))}
                                {field("Título do periódico", false, move || read(form, |f| &f.journal_title), move |v| write(form, v, |f, v| f.journal_title = v))}
                                {field("Quartil do periódico", false, move || read(form, |f| &f.journal_quartile), move |v| write(form, v, |f, v| f.journal_quartile = v))}
                                {field("Volume", false, move || read(form, |f| &f.volume), move |v| write(form, v, |f, v| f.volume = v))}
                                {field("Número/fascículo", false, move || read(form, |f| &f.issue), move |v| write(form, v, |f, v| f.issue = v))}
                                {field("Páginas", false, move || read(form, |f| &f.pages), move |v| write(form, v, |f, v| f.pages = v))}
                                {field("DOI", false, move || read(form, |f| &f.doi), move |v| write(form, v, |f, v| f.doi = v))}
                                {field("Numeração", false, move || read(form, |f| &f.numbering), move |v| write(form, v, |f, v| f.numbering = v))}
                                {field("Qualis", false, move || read(form, |f| &f.qualis), move |v| write(form, v, |f, v| f.qualis = v))}
                            </div>
                            <button
                                class="btn btn--primary manual-insert__save"
                                disabled=move || {
                                    loading.get()
                                        || form.with(|f| {
                                            f.title.as_deref().map(str::trim).unwrap_or_default().is_empty()
                                        })
                                }
                                on:click=move |_| on_save.run(())
                            >
                                {move || if loading.get() { "Processando..." } else { "Salvar na Base" }}
                            </button>
                        </section>
                    </div>
                </main>
            </div>
        </Guard>
    }
}

fn read(
    form: RwSignal<ArticleRecord>,
    get: impl Fn(&ArticleRecord) -> &Option<String>,
) -> String {
    form.with(|f| get(f).clone().unwrap_or_default())
}

fn write(
    form: RwSignal<ArticleRecord>,
    value: String,
    set: impl Fn(&mut ArticleRecord, Option<String>),
) {
    let value = if value.trim().is_empty() { None } else { Some(value) };
    form.update(|f| set(f, value));
}

/// One labeled text input bound to a record column.
fn field(
    label: &'static str,
    multiline: bool,
    value: impl Fn() -> String + Copy + Send + Sync + 'static,
    on_change: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <label class="field" class:field--wide=multiline>
            {label}
            {if multiline {
                view! {
                    <textarea
                        class="field__input"
                        rows="3"
                        prop:value=move || value()
                        on:input=move |ev| on_change(event_target_value(&ev))
                    ></textarea>
                }
                    .into_any()
            } else {
                view! {
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || value()
                        on:input=move |ev| on_change(event_target_value(&ev))
                    />
                }
                    .into_any()
            }}
        </label>
    }
}
