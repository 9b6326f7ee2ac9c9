//! Field-level diff between two JSON snapshots of the same record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub old: JsonValue,
    pub new: JsonValue,
}

/// Changed fields keyed by their snake_case name.
pub type Diff = BTreeMap<String, FieldChange>;

/// Compares two snapshots after normalizing both to snake_case keys.
///
/// Only keys present on both sides are compared. A field that exists in just
/// one snapshot produces no entry, and a snapshot that is not a JSON object
/// contributes no keys at all.
pub fn compute_diff(old: &JsonValue, new: &JsonValue) -> Diff {
    let old_fields = normalize_keys(old);
    let new_fields = normalize_keys(new);

    old_fields
        .into_iter()
        .filter_map(|(key, old_value)| match new_fields.get(&key) {
            Some(new_value) if *new_value != old_value => {
                let change = FieldChange {
                    old: old_value,
                    new: new_value.clone(),
                };
                Some((key, change))
            }
            _ => None,
        })
        .collect()
}

fn normalize_keys(snapshot: &JsonValue) -> Map<String, JsonValue> {
    match snapshot {
        JsonValue::Object(fields) => fields
            .iter()
            .map(|(key, value)| (to_snake_case(key), value.clone()))
            .collect(),
        _ => Map::new(),
    }
}

/// `SerialNumber` -> `serial_number`, `HTTPServer` -> `http_server`,
/// `already_snake` is left alone.
pub fn to_snake_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();

    // An upper-case letter that starts a capitalised word ("Number" in
    // "SerialNumber", "Server" in "HTTPServer").
    let mut split_before = vec![false; chars.len()];
    let mut i = 1;
    while i < chars.len() {
        let word_start = chars[i].is_ascii_uppercase()
            && chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase());
        if word_start {
            split_before[i] = true;
            i += 2;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
            }
        } else {
            i += 1;
        }
    }

    let mut first_pass: Vec<char> = Vec::with_capacity(chars.len() + 4);
    for (idx, ch) in chars.iter().enumerate() {
        if split_before[idx] {
            first_pass.push('_');
        }
        first_pass.push(*ch);
    }

    // A lower-case letter or digit directly followed by an upper-case letter.
    let mut snake = String::with_capacity(first_pass.len() + 4);
    let mut i = 0;
    while i < first_pass.len() {
        let ch = first_pass[i];
        snake.push(ch);
        let boundary = (ch.is_ascii_lowercase() || ch.is_ascii_digit())
            && first_pass
                .get(i + 1)
                .is_some_and(|next| next.is_ascii_uppercase());
        if boundary {
            snake.push('_');
            snake.push(first_pass[i + 1]);
            i += 2;
        } else {
            i += 1;
        }
    }

    snake.to_lowercase()
}
