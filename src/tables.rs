//! Lookup-table loading for the per-language rule sets.
//!
//! Tables ship as JSON embedded in the binary. A missing or malformed
//! document degrades to an empty map so the rule that depends on it turns
//! into a no-op instead of poisoning the whole chain.

use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

/// Loads a flat `{ "key": "value" }` document.
pub fn string_map(raw: &str, what: &str) -> HashMap<String, String> {
    match serde_json::from_str::<HashMap<String, String>>(raw) {
        Ok(map) => map,
        Err(e) => {
            warn!(table = what, error = %e, "failed to load table, rule disabled");
            HashMap::new()
        }
    }
}

/// Loads a `{ "key": ["a", "b", ...] }` document (currency name forms).
pub fn string_list_map(raw: &str, what: &str) -> HashMap<String, Vec<String>> {
    match serde_json::from_str::<HashMap<String, Vec<String>>>(raw) {
        Ok(map) => map,
        Err(e) => {
            warn!(table = what, error = %e, "failed to load table, rule disabled");
            HashMap::new()
        }
    }
}

/// Loads a `{ "key": 4 }` document (Roman numeral values).
pub fn number_map(raw: &str, what: &str) -> HashMap<String, u64> {
    match serde_json::from_str::<HashMap<String, u64>>(raw) {
        Ok(map) => map,
        Err(e) => {
            warn!(table = what, error = %e, "failed to load table, rule disabled");
            HashMap::new()
        }
    }
}

/// Loads the string map nested under `key` in `{ "key": { ... } }`
/// (measurement units and brand names are wrapped this way).
pub fn nested_string_map(raw: &str, key: &str, what: &str) -> HashMap<String, String> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(table = what, error = %e, "failed to load table, rule disabled");
            return HashMap::new();
        }
    };

    let Some(entries) = value.get(key).and_then(Value::as_object) else {
        warn!(table = what, key, "table is missing its entry map, rule disabled");
        return HashMap::new();
    };

    entries
        .iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}

/// Builds the alternation body of a pattern from table keys, longest key
/// first so compound symbols win over their prefixes (km/h before km).
pub fn alternation(keys: impl Iterator<Item = impl AsRef<str>>) -> String {
    let mut keys: Vec<String> = keys
        .map(|k| k.as_ref().to_string())
        .filter(|k| !k.is_empty())
        .collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    keys.iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|")
}
