//! Metadata value codec.
//!
//! The backing store holds node and object metadata as `map<text, text>`
//! columns. Values may be a plain string or a list of strings, so each
//! value is stored JSON-encoded. Anything that fails to parse as JSON is
//! treated as legacy plain text rather than rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw metadata as stored: every value is a JSON-encoded string.
pub type Metadata = BTreeMap<String, String>;

/// A decoded metadata value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    List(Vec<String>),
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for MetaValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

/// Encode a value for storage in a text column.
pub fn encode_meta(value: &MetaValue) -> String {
    let json = match value {
        MetaValue::Text(s) => serde_json::Value::from(s.as_str()),
        MetaValue::List(v) => serde_json::Value::from(v.clone()),
    };
    json.to_string()
}

/// Decode a stored value. Non-JSON content decodes as plain text.
pub fn decode_meta(raw: &str) -> MetaValue {
    match serde_json::from_str::<MetaValue>(raw) {
        Ok(value) => value,
        Err(_) => MetaValue::Text(raw.to_string()),
    }
}

/// Encode a whole decoded map into its stored form.
pub fn encode_metadata(decoded: &BTreeMap<String, MetaValue>) -> Metadata {
    decoded
        .iter()
        .map(|(k, v)| (k.clone(), encode_meta(v)))
        .collect()
}

/// Decode a whole stored map.
pub fn decode_metadata(raw: &Metadata) -> BTreeMap<String, MetaValue> {
    raw.iter()
        .map(|(k, v)| (k.clone(), decode_meta(v)))
        .collect()
}

/// Flatten metadata to key/value couples, one couple per list element.
pub fn metadata_to_list(raw: &Metadata) -> Vec<(String, String)> {
    let mut couples = Vec::new();
    for (key, stored) in raw {
        match decode_meta(stored) {
            MetaValue::Text(s) => couples.push((key.clone(), s)),
            MetaValue::List(items) => {
                for item in items {
                    couples.push((key.clone(), item));
                }
            }
        }
    }
    couples
}
