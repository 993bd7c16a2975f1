//! One curation record rendered as a card with status and actions.

use leptos::prelude::*;
use records::{ArticleRecord, CurationStatus};

use crate::components::status_chip::StatusChip;

/// Card for one record in the curation grid. Action availability follows
/// the derived status: AI actions need a local document, manual approval
/// only applies to AI-approved records, and everything locks while a
/// request is outstanding.
#[component]
pub fn RecordCard(
    record: ArticleRecord,
    /// True while any curation request is in flight (batch or row).
    #[prop(into)]
    busy: Signal<bool>,
    /// True while this specific row is being analyzed.
    #[prop(into)]
    processing: Signal<bool>,
    on_analyze: Callback<ArticleRecord>,
    on_categorize: Callback<ArticleRecord>,
    on_approve: Callback<ArticleRecord>,
    on_reject: Callback<ArticleRecord>,
    on_delete: Callback<ArticleRecord>,
    on_preview: Callback<String>,
) -> impl IntoView {
    let status = CurationStatus::derive(&record);
    let info = status.info();
    let title = record
        .title
        .clone()
        .unwrap_or_else(|| "Sem título".to_owned());
    let category = record.category.clone().filter(|c| !c.trim().is_empty());
    let fields = record.display_fields();
    let document_url = record.document_url.clone().unwrap_or_default();
    let has_document = !document_url.trim().is_empty();

    let ai_enabled = status != CurationStatus::Unavailable;
    let can_approve = status == CurationStatus::ApprovedAi;
    let can_reject = matches!(
        status,
        CurationStatus::ApprovedAi | CurationStatus::Pending
    );
    let reanalyze = matches!(
        status,
        CurationStatus::ApprovedAi | CurationStatus::RejectedAi
    );

    let card_class = format!("record-card record-card--{}", info.tone.as_str());

    let for_analyze = record.clone();
    let for_categorize = record.clone();
    let for_approve = record.clone();
    let for_reject = record.clone();
    let for_delete = record.clone();

    view! {
        <article class=card_class class:record-card--dimmed=move || processing.get()>
            <div class="record-card__header">
                <h3 class="record-card__title">{title}</h3>
                <StatusChip info=info/>
            </div>
            {category
                .map(|category| {
                    view! {
                        <div class="record-card__category">
                            {format!("Categoria: {category}")}
                        </div>
                    }
                })}
            <div class="record-card__fields">
                {fields
                    .iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="record-card__field">
                                <span class="record-card__field-label">{label.clone()}</span>
                                <span class="record-card__field-value">{value.clone()}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="record-card__actions">
                <div>
                    <button
                        class="btn btn--danger"
                        title="Excluir este artigo"
                        disabled=move || busy.get()
                        on:click=move |_| on_delete.run(for_delete.clone())
                    >
                        "Excluir"
                    </button>
                    <button
                        class="btn"
                        title="Visualizar PDF do documento"
                        disabled=!has_document
                        on:click=move |_| on_preview.run(document_url.clone())
                    >
                        "Visualizar"
                    </button>
                </div>
                <div>
                    {can_approve
                        .then(|| {
                            view! {
                                <button
                                    class="btn btn--primary"
                                    title="Aprovar manualmente este artigo"
                                    disabled=move || busy.get()
                                    on:click=move |_| on_approve.run(for_approve.clone())
                                >
                                    "Aprovar Manualmente"
                                </button>
                            }
                        })}
                    {can_reject
                        .then(|| {
                            view! {
                                <button
                                    class="btn btn--danger"
                                    title="Rejeitar manualmente este artigo"
                                    disabled=move || busy.get()
                                    on:click=move |_| on_reject.run(for_reject.clone())
                                >
                                    "Rejeitar"
                                </button>
                            }
                        })}
                    <button
                        class="btn"
                        title=if reanalyze { "Re-analisar com IA" } else { "Analisar com IA" }
                        disabled=move || !ai_enabled || busy.get()
                        on:click=move |_| on_analyze.run(for_analyze.clone())
                    >
                        {move || {
                            if processing.get() {
                                "Analisando..."
                            } else if reanalyze {
                                "Re-analisar"
                            } else {
                                "Analisar"
                            }
                        }}
                    </button>
                    <button
                        class="btn"
                        title="Categorizar com IA"
                        disabled=move || !ai_enabled || busy.get()
                        on:click=move |_| on_categorize.run(for_categorize.clone())
                    >
                        "Categorizar"
                    </button>
                </div>
            </div>
        </article>
    }
}
