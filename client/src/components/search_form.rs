//! Search configuration form: query expression, year range, sort option,
//! quick ranges, and the persisted recent-history list.

use leptos::prelude::*;
use records::search::{self, SearchParams, SortOption};

use crate::state::notify::{NotifyState, Severity};
use crate::util::storage;

/// Search form. Submitting validates locally, hands the parameters to
/// `on_search`, and records them in the capped history.
#[component]
pub fn SearchForm(on_search: Callback<SearchParams>, #[prop(into)] loading: Signal<bool>) -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    let terms = RwSignal::new(String::new());
    let start_year = RwSignal::new(String::new());
    let end_year = RwSignal::new(String::new());
    let sort = RwSignal::new(SortOption::Relevance);
    let history = RwSignal::new(
        storage::load_json::<Vec<SearchParams>>(storage::HISTORY_KEY).unwrap_or_default(),
    );

    let submit = Callback::new(move |(): ()| {
        if loading.get() {
            return;
        }
        let expression = terms.get().trim().to_owned();
        if expression.is_empty() {
            notify.update(|n| n.show(Severity::Warning, "Informe a expressão de busca."));
            return;
        }
        let params = SearchParams {
            search_terms: expression,
            start_year: start_year.get().trim().parse().ok(),
            end_year: end_year.get().trim().parse().ok(),
            sort_option: sort.get(),
        };

        history.update(|h| search::push_history(h, params.clone()));
        storage::save_json(storage::HISTORY_KEY, &history.get_untracked());

        on_search.run(params);
    });

    let apply_shortcut = Callback::new(move |span_years: i32| {
        if let Some(current) = current_year() {
            end_year.set(current.to_string());
            start_year.set((current - span_years).to_string());
        }
    });

    let restore = Callback::new(move |entry: SearchParams| {
        terms.set(entry.search_terms);
        start_year.set(entry.start_year.map(|y| y.to_string()).unwrap_or_default());
        end_year.set(entry.end_year.map(|y| y.to_string()).unwrap_or_default());
        sort.set(entry.sort_option);
    });

    view! {
        <form
            class="search-form"
            on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <h2 class="search-form__title">"Configurar Pesquisa"</h2>
            <label class="field">
                "Expressão de Busca"
                <textarea
                    class="field__input"
                    rows="2"
                    placeholder="Ex: 'climate change' AND ('adaptation' OR 'mitigation')"
                    prop:value=move || terms.get()
                    on:input=move |ev| terms.set(event_target_value(&ev))
                ></textarea>
                <span class="field__hint">
                    "Combine termos usando AND, OR, NOT e parênteses."
                </span>
            </label>
            <div class="search-form__row">
                <label class="field">
                    "Ano Inicial"
                    <input
                        class="field__input"
                        type="number"
                        prop:value=move || start_year.get()
                        on:input=move |ev| start_year.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Ano Final"
                    <input
                        class="field__input"
                        type="number"
                        prop:value=move || end_year.get()
                        on:input=move |ev| end_year.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Ordenar por"
                    <select
                        class="field__input"
                        on:change=move |ev| {
                            if let Some(option) = SortOption::parse(&event_target_value(&ev)) {
                                sort.set(option);
                            }
                        }
                    >
                        {[SortOption::Relevance, SortOption::Newest, SortOption::Cited]
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option
                                        value=option.as_str()
                                        selected=move || sort.get() == option
                                    >
                                        {option.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <button class="btn btn--primary search-form__submit" type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Buscando..." } else { "Executar" }}
                </button>
            </div>
            <div class="search-form__shortcuts">
                <span>"Intervalos rápidos:"</span>
                {[5, 10, 20]
                    .into_iter()
                    .map(|span_years| {
                        view! {
                            <button
                                type="button"
                                class="btn btn--chip"
                                on:click=move |_| apply_shortcut.run(span_years)
                            >
                                {format!("{span_years} Anos")}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show when=move || !history.get().is_empty()>
                <div class="search-form__history">
                    <h3>"Histórico Recente"</h3>
                    {move || {
                        history
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let summary = format!(
                                    "{} – {} • {}",
                                    entry.start_year.map(|y| y.to_string()).unwrap_or_default(),
                                    entry.end_year.map(|y| y.to_string()).unwrap_or_default(),
                                    entry.sort_option.label(),
                                );
                                let label = entry.search_terms.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="search-form__history-item"
                                        on:click=move |_| restore.run(entry.clone())
                                    >
                                        <span class="search-form__history-terms">{label}</span>
                                        <span class="search-form__history-meta">{summary}</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </form>
    }
}

/// Current calendar year, browser-only.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn current_year() -> Option<i32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year() as i32)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
