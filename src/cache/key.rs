//! Canonical Key Module
//!
//! Derives the deterministic string form under which a caller key is stored.
//!
//! Keys are serialized structurally through `serde_json::Value`, with every
//! object's fields sorted by name before rendering. Two keys that serialize
//! to the same fields and values therefore produce the same canonical string
//! regardless of field declaration or insertion order.
//!
//! Caller contract: canonicalization is only as stable as the key type's
//! `Serialize` implementation. A custom implementation that emits different
//! output for equal values on repeated calls will cause false misses.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

// == Canonical Key ==
/// Serializes a key into its canonical string form.
///
/// Returns [`CacheError::KeySerialization`](crate::error::CacheError) for
/// keys that cannot be represented as JSON (e.g. maps with non-string,
/// non-numeric keys).
pub fn canonical_key<K: Serialize>(key: &K) -> Result<String> {
    let value = serde_json::to_value(key)?;
    Ok(sort_fields(value).to_string())
}

// == Field Sorting ==
/// Recursively rebuilds every JSON object with its fields in sorted order.
///
/// `serde_json` happens to keep map keys sorted in its default
/// configuration, but that is a property of the backing map, not a
/// guarantee of the serializer. Sorting here makes the canonical form
/// independent of it.
fn sort_fields(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut fields: Vec<(String, Value)> = map.into_iter().collect();
            fields.sort_by(|(a, _), (b, _)| a.cmp(b));

            let mut sorted = Map::new();
            for (name, field) in fields {
                sorted.insert(name, sort_fields(field));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_fields).collect()),
        other => other,
    }
}
