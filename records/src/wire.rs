//! Deserialization helpers tolerant of the backend's spreadsheet encodings.
//!
//! The authoritative store is a spreadsheet fronted by a Node API, so
//! numeric columns arrive as numbers or digit strings depending on how a
//! row was written, and list columns have accumulated three encodings over
//! time (JSON array, JSON-array-in-a-string, comma-separated string).
//! Everything is normalized here, once.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional integer from a number, a digit string, or null.
/// Empty and whitespace-only strings map to `None`.
pub(crate) fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(Some(float as i64));
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        Value::String(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected integer, got {trimmed:?}")))
        }
        other => Err(D::Error::custom(format!(
            "expected number or string, got {other}"
        ))),
    }
}

/// Deserialize an identifier that may arrive as a number or a string.
pub(crate) fn opt_string_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::String(raw) => Ok(Some(raw)),
        other => Err(D::Error::custom(format!(
            "expected id number or string, got {other}"
        ))),
    }
}

/// Deserialize a list that may arrive as an array of strings or as one
/// bare string (kept whole; author strings legitimately contain commas).
pub(crate) fn string_or_single<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(vec![trimmed.to_owned()])
            }
        }
        Value::Array(items) => Ok(items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
                _ => None,
            })
            .collect()),
        other => Err(D::Error::custom(format!(
            "expected string or array of strings, got {other}"
        ))),
    }
}

/// Deserialize a string list from an array, a JSON-array string, or a
/// comma-separated string. Missing/null/empty input yields an empty list.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(normalize_string_list(&value))
}

pub(crate) fn normalize_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
                _ => None,
            })
            .collect(),
        Value::String(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Vec::new();
            }
            if trimmed.starts_with('[') {
                if let Ok(parsed) = serde_json::from_str::<Value>(trimmed) {
                    return normalize_string_list(&parsed);
                }
            }
            trimmed
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        }
        _ => Vec::new(),
    }
}
