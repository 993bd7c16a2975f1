//! Typed article/curation record mapped onto the backend spreadsheet row.
//!
//! DESIGN
//! ======
//! The backend is authoritative and column-oriented: every value is a
//! string keyed by a (mostly Portuguese) header. This type models the
//! known superset of columns as optional fields bound to their wire names
//! and routes anything unrecognized into an explicit extra-fields bag, so
//! the rest of the codebase works with field access instead of string
//! lookups.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One candidate article in the curation pipeline.
///
/// `row_number` is the external key tying this record to its position in
/// the backend's authoritative store; it is absent on records that have
/// not been persisted yet (e.g. a manual-insert draft).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Row position in the backend store; the record's external key.
    #[serde(
        rename = "__row_number",
        default,
        deserialize_with = "crate::wire::opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub row_number: Option<i64>,
    #[serde(
        rename = "id",
        default,
        deserialize_with = "crate::wire::opt_string_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(rename = "Titulo", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Subtítulo", default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "Autor(es)", default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    #[serde(rename = "Ano", default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(
        rename = "Número de citações recebidas (Google Scholar)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub citations: Option<String>,
    #[serde(rename = "Palavras-chave", default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(rename = "Resumo", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(rename = "Tipo de documento", default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(rename = "Editora", default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(rename = "Instituição", default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(rename = "Local", default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(rename = "Tipo de trabalho", default, skip_serializing_if = "Option::is_none")]
    pub work_type: Option<String>,
    #[serde(
        rename = "Título do periódico",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub journal_title: Option<String>,
    #[serde(
        rename = "Quartil do periódico",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub journal_quartile: Option<String>,
    #[serde(rename = "Volume", default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(rename = "Número/fascículo", default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(rename = "Páginas", default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(rename = "DOI", default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(rename = "Numeração", default, skip_serializing_if = "Option::is_none")]
    pub numbering: Option<String>,
    #[serde(rename = "Qualis", default, skip_serializing_if = "Option::is_none")]
    pub qualis: Option<String>,
    #[serde(rename = "pub_url", default, skip_serializing_if = "Option::is_none")]
    pub pub_url: Option<String>,
    #[serde(rename = "CATEGORIA", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Document reference: a backend-served local file name, or an
    /// external (usually Drive) URL.
    #[serde(rename = "URL DO DOCUMENTO", default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
    /// AI curator approval flag, as written by the classification service.
    #[serde(
        rename = "APROVAÇÃO CURADOR (marcar)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ai_approved: Option<String>,
    /// Human curator override flag; takes precedence over the AI outcome.
    #[serde(rename = "APROVAÇÃO MANUAL", default, skip_serializing_if = "Option::is_none")]
    pub manual_approved: Option<String>,
    /// AI rejection flag.
    #[serde(rename = "ARTIGOS REJEITADOS", default, skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
    /// Columns this client does not model. Preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Parse a spreadsheet boolean-ish cell. The store has accumulated
/// `"TRUE"`, `"sim"`, and `"1"` spellings; anything else is unset.
#[must_use]
pub fn flag_set(value: Option<&str>) -> bool {
    let Some(raw) = value else {
        return false;
    };
    matches!(raw.trim().to_uppercase().as_str(), "TRUE" | "SIM" | "1")
}

impl ArticleRecord {
    /// Whether the human curator approved this record.
    #[must_use]
    pub fn is_manual_approved(&self) -> bool {
        flag_set(self.manual_approved.as_deref())
    }

    /// Whether the AI classification service approved this record.
    #[must_use]
    pub fn is_ai_approved(&self) -> bool {
        flag_set(self.ai_approved.as_deref())
    }

    /// Whether the AI classification service rejected this record.
    #[must_use]
    pub fn is_ai_rejected(&self) -> bool {
        flag_set(self.rejected.as_deref())
    }

    /// Whether the record references a backend-served local document.
    /// An absolute `http(s)` URL is an external link, not a local file.
    #[must_use]
    pub fn has_local_document(&self) -> bool {
        match self.document_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => !url.starts_with("http"),
            _ => false,
        }
    }

    /// Overwrite this record's columns with the non-empty columns of
    /// `extracted` (an AI metadata-extraction response). Extra columns
    /// merge key-wise; curation flags and the row number are left alone.
    pub fn merge_extracted(&mut self, extracted: &Self) {
        fn take(target: &mut Option<String>, source: &Option<String>) {
            if let Some(value) = source.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                *target = Some(value.to_owned());
            }
        }

        take(&mut self.title, &extracted.title);
        take(&mut self.subtitle, &extracted.subtitle);
        take(&mut self.authors, &extracted.authors);
        take(&mut self.year, &extracted.year);
        take(&mut self.citations, &extracted.citations);
        take(&mut self.keywords, &extracted.keywords);
        take(&mut self.abstract_text, &extracted.abstract_text);
        take(&mut self.document_type, &extracted.document_type);
        take(&mut self.publisher, &extracted.publisher);
        take(&mut self.institution, &extracted.institution);
        take(&mut self.place, &extracted.place);
        take(&mut self.work_type, &extracted.work_type);
        take(&mut self.journal_title, &extracted.journal_title);
        take(&mut self.journal_quartile, &extracted.journal_quartile);
        take(&mut self.volume, &extracted.volume);
        take(&mut self.issue, &extracted.issue);
        take(&mut self.pages, &extracted.pages);
        take(&mut self.doi, &extracted.doi);
        take(&mut self.numbering, &extracted.numbering);
        take(&mut self.qualis, &extracted.qualis);
        take(&mut self.pub_url, &extracted.pub_url);
        take(&mut self.category, &extracted.category);

        for (key, value) in &extracted.extra {
            if !value.is_null() {
                self.extra.insert(key.clone(), value.clone());
            }
        }
    }

    /// Labeled metadata fields for card/detail rendering, in column
    /// order, excluding empty values, the curation flags, and internal
    /// keys. Unmodeled extra columns follow the known ones.
    #[must_use]
    pub fn display_fields(&self) -> Vec<(String, String)> {
        let known: [(&str, Option<&String>); 22] = [
            ("Autor(es)", self.authors.as_ref()),
            ("Subtítulo", self.subtitle.as_ref()),
            ("Ano", self.year.as_ref()),
            (
                "Número de citações recebidas (Google Scholar)",
                self.citations.as_ref(),
            ),
            ("Palavras-chave", self.keywords.as_ref()),
            ("Resumo", self.abstract_text.as_ref()),
            ("Tipo de documento", self.document_type.as_ref()),
            ("Editora", self.publisher.as_ref()),
            ("Instituição", self.institution.as_ref()),
            ("Local", self.place.as_ref()),
            ("Tipo de trabalho", self.work_type.as_ref()),
            ("Título do periódico", self.journal_title.as_ref()),
            ("Quartil do periódico", self.journal_quartile.as_ref()),
            ("Volume", self.volume.as_ref()),
            ("Número/fascículo", self.issue.as_ref()),
            ("Páginas", self.pages.as_ref()),
            ("DOI", self.doi.as_ref()),
            ("Numeração", self.numbering.as_ref()),
            ("Qualis", self.qualis.as_ref()),
            ("pub_url", self.pub_url.as_ref()),
            ("CATEGORIA", self.category.as_ref()),
            ("URL DO DOCUMENTO", self.document_url.as_ref()),
        ];

        let mut fields: Vec<(String, String)> = known
            .into_iter()
            .filter_map(|(label, value)| {
                let value = value.map(String::as_str).unwrap_or_default().trim();
                if value.is_empty() {
                    None
                } else {
                    Some((label.to_owned(), value.to_owned()))
                }
            })
            .collect();

        for (key, value) in &self.extra {
            let rendered = match value {
                Value::String(s) => s.trim().to_owned(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            if !rendered.is_empty() {
                fields.push((key.clone(), rendered));
            }
        }

        fields
    }
}
