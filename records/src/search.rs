//! Search request/response types, recent-history capping, and result-table
//! helpers (in-list filter, column sort, BibTeX export).

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Most recent searches kept in the persisted history list.
pub const HISTORY_LIMIT: usize = 5;

/// Server-side ranking for search results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    #[default]
    Relevance,
    Newest,
    Cited,
}

impl SortOption {
    /// Stable tag, used for form values and CLI args.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Newest => "newest",
            Self::Cited => "cited",
        }
    }

    /// Parse a tag produced by [`SortOption::as_str`].
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "relevance" => Some(Self::Relevance),
            "newest" => Some(Self::Newest),
            "cited" => Some(Self::Cited),
            _ => None,
        }
    }

    /// User-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevância",
            Self::Newest => "Mais Recentes",
            Self::Cited => "Mais Citados",
        }
    }
}

/// Parameters for `POST /search`. Also the shape persisted in the recent
/// search history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Boolean query expression (AND/OR/NOT and parentheses).
    pub search_terms: String,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub sort_option: SortOption,
}

/// One article hit returned by `POST /search`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(
        default,
        deserialize_with = "crate::wire::opt_string_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Author list; some sources return one pre-joined string.
    #[serde(default, deserialize_with = "crate::wire::string_or_single")]
    pub authors: Vec<String>,
    #[serde(default, deserialize_with = "crate::wire::opt_i64")]
    pub year: Option<i64>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl SearchHit {
    /// Authors joined for display and matching.
    #[must_use]
    pub fn authors_joined(&self) -> String {
        self.authors.join(", ")
    }

    /// Case-insensitive substring match over title and authors, used by
    /// the in-list filter box.
    #[must_use]
    pub fn matches(&self, filter_text: &str) -> bool {
        let query = filter_text.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let title = self.title.as_deref().unwrap_or_default().to_lowercase();
        let authors = self.authors_joined().to_lowercase();
        title.contains(&query) || authors.contains(&query)
    }

    /// Stable selection key for a hit at `index`; hits without a backend
    /// id fall back to their position.
    #[must_use]
    pub fn selection_key(&self, index: usize) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| format!("row-{index}"))
    }
}

/// Sortable columns of the results table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HitColumn {
    Title,
    Authors,
    #[default]
    Year,
    Source,
    Doi,
}

impl HitColumn {
    /// Parse a column id used as a table-header value.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "title" => Some(Self::Title),
            "authors" => Some(Self::Authors),
            "year" => Some(Self::Year),
            "source" => Some(Self::Source),
            "doi" => Some(Self::Doi),
            _ => None,
        }
    }
}

/// Sort hits in place by `column`. String columns compare
/// case-insensitively; missing values sort first in ascending order.
pub fn sort_hits(hits: &mut [SearchHit], column: HitColumn, ascending: bool) {
    hits.sort_by(|a, b| {
        let ordering = match column {
            HitColumn::Year => a.year.unwrap_or(0).cmp(&b.year.unwrap_or(0)),
            HitColumn::Title => cmp_text(a.title.as_deref(), b.title.as_deref()),
            HitColumn::Authors => {
                let left = a.authors_joined();
                let right = b.authors_joined();
                cmp_text(Some(left.as_str()), Some(right.as_str()))
            }
            HitColumn::Source => cmp_text(a.source.as_deref(), b.source.as_deref()),
            HitColumn::Doi => cmp_text(a.doi.as_deref(), b.doi.as_deref()),
        };
        if ascending { ordering } else { ordering.reverse() }
    });
}

fn cmp_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.unwrap_or_default().to_lowercase();
    let b = b.unwrap_or_default().to_lowercase();
    a.cmp(&b)
}

/// Push `params` onto the front of `history`, dropping any earlier entry
/// with the same query expression and truncating to [`HISTORY_LIMIT`].
pub fn push_history(history: &mut Vec<SearchParams>, params: SearchParams) {
    history.retain(|entry| entry.search_terms != params.search_terms);
    history.insert(0, params);
    history.truncate(HISTORY_LIMIT);
}

/// Render the selected hits as BibTeX `@article` entries.
#[must_use]
pub fn bibtex(hits: &[SearchHit]) -> String {
    hits.iter()
        .enumerate()
        .map(|(index, hit)| {
            let key = hit
                .doi
                .as_deref()
                .and_then(|doi| doi.rsplit('/').next())
                .map_or_else(|| format!("article_{index}"), ToOwned::to_owned);
            format!(
                "@article{{{key},\n  title = {{{title}}},\n  author = {{{author}}},\n  journal = {{{journal}}},\n  year = {{{year}}},\n  doi = {{{doi}}},\n  url = {{{url}}}\n}}",
                title = hit.title.as_deref().unwrap_or_default(),
                author = hit.authors.join(" and "),
                journal = hit.source.as_deref().unwrap_or("Unknown"),
                year = hit.year.map(|year| year.to_string()).unwrap_or_default(),
                doi = hit.doi.as_deref().unwrap_or_default(),
                url = hit.pdf_url.as_deref().unwrap_or_default(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
