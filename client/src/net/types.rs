//! Response envelopes for the REST backend.
//!
//! The record/search/user payload shapes live in the `records` crate;
//! this module only models the thin wrappers the backend puts around
//! them, keeping the camelCase wire names at this boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use records::ArticleRecord;
use serde::Deserialize;

/// Body of a successful `POST /login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Generic `{ "message": ... }` acknowledgment used by most mutations.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    /// The acknowledgment message, or `fallback` when the backend sent
    /// none.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_owned())
    }
}

/// Body of a single-record analyze/categorize call: the re-classified
/// record, for the evidence dialog.
#[derive(Clone, Debug, Deserialize)]
pub struct AnalysisOutcome {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "updatedArticle")]
    pub updated_article: ArticleRecord,
}

/// Error body shapes the two backends produce: the Node API uses
/// `{ "error": ... }`, the FastAPI service `{ "detail": ... }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Extract a user-facing message from a non-2xx response body, falling
/// back to the HTTP status.
#[must_use]
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body)
        && let Some(message) = parsed.error.or(parsed.detail)
    {
        return message;
    }
    format!("HTTP {status}")
}
