//! Batch processing page: server-side folder processing and ZIP upload.
//!
//! Both operations are fire-and-forget on the backend; the page only
//! reports that processing started.

use leptos::prelude::*;

use crate::components::guard::Guard;
use crate::components::header::Header;
use crate::state::notify::{NotifyState, Severity};
use crate::util::upload;

/// DOM id of the ZIP file input.
const ZIP_INPUT_ID: &str = "batch-zip-file";

/// Batch processing page.
#[component]
pub fn BatchPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    let folder_path = RwSignal::new(String::new());
    let folder_loading = RwSignal::new(false);
    let zip_name = RwSignal::new(None::<String>);
    let zip_loading = RwSignal::new(false);

    let on_process_folder = Callback::new(move |(): ()| {
        let path = folder_path.get().trim().to_owned();
        if path.is_empty() {
            notify.update(|n| n.show(Severity::Error, "Digite o caminho da pasta."));
            return;
        }
        folder_loading.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::process_local_folder(&path).await {
                Ok(message) => notify.update(|n| n.show(Severity::Success, message)),
                Err(message) => notify.update(|n| {
                    n.show(Severity::Error, format!("Erro ao processar a pasta. {message}"));
                }),
            }
            folder_loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            folder_loading.set(false);
        }
    });

    let on_upload_zip = Callback::new(move |(): ()| {
        if zip_name.get().is_none() {
            notify.update(|n| n.show(Severity::Error, "Selecione um arquivo ZIP."));
            return;
        }
        zip_loading.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let Some(file) = upload::selected_file(ZIP_INPUT_ID) else {
                notify.update(|n| n.show(Severity::Error, "Selecione um arquivo ZIP."));
                zip_loading.set(false);
                return;
            };
            match crate::net::api::upload_zip(file).await {
                Ok(message) => {
                    notify.update(|n| n.show(Severity::Success, message));
                    zip_name.set(None);
                    upload::clear_file_input(ZIP_INPUT_ID);
                }
                Err(message) => notify.update(|n| {
                    n.show(Severity::Error, format!("Erro ao enviar o ZIP. {message}"));
                }),
            }
            zip_loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        zip_loading.set(false);
    });

    view! {
        <Guard>
            <div class="page">
                <Header/>
                <main class="page__content">
                    <div class="page__heading">
                        <h1>"Processamento em Lote"</h1>
                    </div>

                    <section class="panel">
                        <h2>"Pasta no Servidor"</h2>
                        <p class="panel__hint">
                            "Informe o caminho de uma pasta visível ao servidor para processar todos os documentos em lote."
                        </p>
                        <div class="panel__row">
                            <input
                                class="field__input"
                                type="text"
                                placeholder="Ex: /dados/artigos/2024"
                                prop:value=move || folder_path.get()
                                on:input=move |ev| folder_path.set(event_target_value(&ev))
                            />
                            <button
                                class="btn btn--primary"
                                disabled=move || {
                                    folder_loading.get() || folder_path.get().trim().is_empty()
                                }
                                on:click=move |_| on_process_folder.run(())
                            >
                                {move || {
                                    if folder_loading.get() { "Processando..." } else { "Processar" }
                                }}
                            </button>
                        </div>
                    </section>

                    <section class="panel">
                        <h2>"Upload de ZIP"</h2>
                        <p class="panel__hint">
                            "Envie um pacote ZIP de documentos para curadoria em lote no servidor."
                        </p>
                        <div class="panel__row">
                            <input
                                id=ZIP_INPUT_ID
                                class="field__input"
                                type="file"
                                accept=".zip,application/zip"
                                on:change=move |_| {
                                    zip_name.set(upload::selected_file_name(ZIP_INPUT_ID));
                                }
                            />
                            <button
                                class="btn btn--primary"
                                disabled=move || zip_loading.get() || zip_name.get().is_none()
                                on:click=move |_| on_upload_zip.run(())
                            >
                                {move || if zip_loading.get() { "Enviando..." } else { "Enviar ZIP" }}
                            </button>
                        </div>
                    </section>
                </main>
            </div>
        </Guard>
    }
}
