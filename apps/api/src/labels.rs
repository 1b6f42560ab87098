//! Parsing of stored snake_case labels into typed enums.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Parses a free-form label ("Core Software Engineer", "case-study") into a
/// serde enum with `rename_all = "snake_case"`. Returns `None` for empty or
/// unrecognised values.
pub fn parse_label<T: DeserializeOwned>(raw: &str) -> Option<T> {
    let key = raw.trim().to_lowercase().replace(['-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    serde_json::from_value(serde_json::Value::String(key)).ok()
}

/// `deserialize_with` adapter so request bodies accept the same spellings as
/// stored labels. Missing, null and blank values become `None`.
pub fn deserialize_label<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_label))
}
