//! Search results table: selection, in-list filter, column sort, BibTeX
//! export, and save-selected.

use leptos::prelude::*;
use records::search::{self, HitColumn, SearchHit};

use crate::util::download;

const COLUMNS: [(&str, &str); 5] = [
    ("title", "Título"),
    ("authors", "Autores"),
    ("year", "Ano"),
    ("source", "Fonte"),
    ("doi", "DOI"),
];

/// Results table for one search response. Selection keys survive
/// filtering and sorting because they come from the hit itself.
#[component]
pub fn ResultsTable(
    #[prop(into)] results: Signal<Vec<SearchHit>>,
    on_save: Callback<Vec<SearchHit>>,
    #[prop(into)] saving: Signal<bool>,
) -> impl IntoView {
    let filter_text = RwSignal::new(String::new());
    let sort_column = RwSignal::new(HitColumn::Year);
    let ascending = RwSignal::new(false);
    let selected = RwSignal::new(Vec::<String>::new());

    let visible = Signal::derive(move || {
        let mut hits: Vec<SearchHit> = results
            .get()
            .into_iter()
            .filter(|hit| hit.matches(&filter_text.get()))
            .collect();
        search::sort_hits(&mut hits, sort_column.get(), ascending.get());
        hits
    });

    let selected_hits = move || -> Vec<SearchHit> {
        let keys = selected.get();
        results
            .get()
            .iter()
            .enumerate()
            .filter(|(index, hit)| keys.contains(&hit.selection_key(*index)))
            .map(|(_, hit)| hit.clone())
            .collect()
    };

    let toggle_all = Callback::new(move |checked: bool| {
        if checked {
            let keys = results
                .get()
                .iter()
                .enumerate()
                .map(|(index, hit)| hit.selection_key(index))
                .collect();
            selected.set(keys);
        } else {
            selected.set(Vec::new());
        }
    });

    let toggle_one = Callback::new(move |key: String| {
        selected.update(|keys| {
            if let Some(position) = keys.iter().position(|k| k == &key) {
                keys.remove(position);
            } else {
                keys.push(key);
            }
        });
    });

    let sort_by = Callback::new(move |column: HitColumn| {
        if sort_column.get() == column {
            ascending.update(|asc| *asc = !*asc);
        } else {
            sort_column.set(column);
            ascending.set(true);
        }
    });

    let export_bibtex = Callback::new(move |(): ()| {
        let hits = selected_hits();
        if hits.is_empty() {
            return;
        }
        download::download_text("export_cientometria.bib", &search::bibtex(&hits));
    });

    let save = Callback::new(move |(): ()| {
        let hits = selected_hits();
        if !hits.is_empty() {
            on_save.run(hits);
        }
    });

    view! {
        <section class="results">
            <div class="results__toolbar">
                <div class="results__count">
                    {move || format!("{} artigos encontrados", visible.get().len())}
                </div>
                <input
                    class="field__input results__filter"
                    type="text"
                    placeholder="Filtrar nesta lista..."
                    prop:value=move || filter_text.get()
                    on:input=move |ev| filter_text.set(event_target_value(&ev))
                />
                <button
                    class="btn"
                    disabled=move || selected.get().is_empty()
                    on:click=move |_| export_bibtex.run(())
                >
                    "BibTeX"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || selected.get().is_empty() || saving.get()
                    on:click=move |_| save.run(())
                >
                    {move || format!("Salvar Selecionados ({})", selected.get().len())}
                </button>
            </div>

            <table class="results__table">
                <thead>
                    <tr>
                        <th class="results__checkbox-cell">
                            <input
                                type="checkbox"
                                prop:checked=move || {
                                    let total = results.get().len();
                                    total > 0 && selected.get().len() == total
                                }
                                on:change=move |ev| toggle_all.run(event_target_checked(&ev))
                            />
                        </th>
                        {COLUMNS
                            .into_iter()
                            .map(|(id, label)| {
                                let column = HitColumn::parse(id).unwrap_or_default();
                                view! {
                                    <th>
                                        <button
                                            class="results__sort"
                                            class:results__sort--active=move || {
                                                sort_column.get() == column
                                            }
                                            on:click=move |_| sort_by.run(column)
                                        >
                                            {label}
                                        </button>
                                    </th>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, hit)| {
                                let key = hit.selection_key(index);
                                let row_key = key.clone();
                                let checked_key = key.clone();
                                let is_checked = move || selected.get().contains(&checked_key);
                                let authors = hit.authors_joined();
                                let doi = hit.doi.clone();
                                let pdf_url = hit.pdf_url.clone();
                                view! {
                                    <tr
                                        class:results__row--selected=is_checked.clone()
                                        on:click=move |_| toggle_one.run(row_key.clone())
                                    >
                                        <td class="results__checkbox-cell">
                                            <input type="checkbox" prop:checked=is_checked.clone()/>
                                        </td>
                                        <td class="results__title-cell">
                                            <span class="results__title">
                                                {hit.title.clone().unwrap_or_else(|| "Sem título".to_owned())}
                                            </span>
                                            {pdf_url
                                                .map(|url| {
                                                    view! {
                                                        <a
                                                            class="results__pdf-link"
                                                            href=url
                                                            target="_blank"
                                                            rel="noopener"
                                                            on:click=move |ev| ev.stop_propagation()
                                                        >
                                                            "Acesso ao PDF"
                                                        </a>
                                                    }
                                                })}
                                        </td>
                                        <td>{if authors.is_empty() { "—".to_owned() } else { authors }}</td>
                                        <td>
                                            {hit.year.map(|y| y.to_string()).unwrap_or_else(|| "—".to_owned())}
                                        </td>
                                        <td>{hit.source.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                        <td>
                                            {doi
                                                .map(|doi| {
                                                    let href = format!("https://doi.org/{doi}");
                                                    view! {
                                                        <a
                                                            href=href
                                                            target="_blank"
                                                            rel="noopener"
                                                            on:click=move |ev| ev.stop_propagation()
                                                        >
                                                            {doi.clone()}
                                                        </a>
                                                    }
                                                        .into_any()
                                                })
                                                .unwrap_or_else(|| view! { <span>"—"</span> }.into_any())}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Show when=move || visible.get().is_empty()>
                <div class="results__empty">"Nenhum resultado para exibir."</div>
            </Show>
        </section>
    }
}
