//! Read-only view of the AI service's decision log (`GET /llm-logs`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the classification service's log. The service owns the
/// schema; unmodeled fields land in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmLogEntry {
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Operation the service performed (e.g. classification,
    /// categorization, extraction).
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::opt_i64")]
    pub row_number: Option<i64>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
