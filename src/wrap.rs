/*!
# String-Leaf Wrapping

Prepares a raw content tree for token tooling by replacing every string
leaf `s` with a `{"value": s}` object. Everything else passes through
untouched; the flattener later collapses the added `.value` level so
wrapped and unwrapped files flatten to the same keys.
*/
use serde_json::{Value, json};

/// Recursively wrap every string leaf as a `{"value": ...}` object.
#[must_use]
pub fn wrap(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, wrap(v))).collect()),
        Value::Array(items) => Value::Array(items.into_iter().map(wrap).collect()),
        Value::String(text) => json!({ "value": text }),
        other => other,
    }
}
