/*!
# Flattening

The core transform: walk an arbitrarily nested content tree and emit one
`text` token per string leaf, keyed by the dotted/bracketed path to the
leaf. Maps that already carry the `{"value": ..., "type": "string"}` token
shape are taken as leaves rather than recursed into, with their type
rewritten to `text`, which makes re-flattening already-flattened input a
no-op up to that normalization.
*/
use log::debug;
use serde_json::{Map, Value};

use crate::path::TokenPath;
use crate::token::{Collection, GLOBAL_SET, Token, TokenSet};

/// Flatten a content subtree into a single token set.
///
/// Every string leaf becomes exactly one token. Non-string scalars
/// (numbers, booleans, null) carry no copy and are dropped. Cannot fail on
/// any well-formed [`Value`].
#[must_use]
pub fn flatten(value: &Value) -> TokenSet {
    let mut out = TokenSet::new();
    let mut path = TokenPath::new();
    flatten_into(value, &mut path, &mut out);
    out
}

fn flatten_into(value: &Value, path: &mut TokenPath, out: &mut TokenSet) {
    match value {
        Value::Object(map) => {
            if let Some(text) = wrapped_leaf(map) {
                out.insert(path.token_key(), Token::text(text));
            } else {
                for (key, child) in map {
                    path.push_field(key);
                    flatten_into(child, path, out);
                    path.pop();
                }
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                path.push_index(index);
                flatten_into(child, path, out);
                path.pop();
            }
        }
        Value::String(text) => {
            out.insert(path.token_key(), Token::text(text));
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// Recognize a map that is already shaped as a `string`-typed token.
///
/// Extra keys are tolerated; a missing or non-string `value` (or a `type`
/// other than `"string"`) falls back to plain recursion.
fn wrapped_leaf(map: &Map<String, Value>) -> Option<&str> {
    match (map.get("value"), map.get("type")) {
        (Some(Value::String(value)), Some(Value::String(kind))) if kind == "string" => Some(value),
        _ => None,
    }
}

/// Build token sets for a whole content document.
///
/// A mapping root yields one set per top-level entry, named after its key;
/// any other root flattens into the single [`GLOBAL_SET`]. When a locale
/// prefix is given, every key of this run is namespaced as
/// `{locale}.{key}`.
#[must_use]
pub fn token_sets(root: &Value, locale: Option<&str>) -> Collection {
    let mut sets = Collection::new();
    match root {
        Value::Object(map) => {
            for (name, subtree) in map {
                let set = localized(flatten(subtree), locale);
                debug!("flattened {} tokens into set '{name}'", set.len());
                sets.insert(name.clone(), set);
            }
        }
        other => {
            let set = localized(flatten(other), locale);
            debug!("flattened {} tokens into set '{GLOBAL_SET}'", set.len());
            sets.insert(GLOBAL_SET.to_string(), set);
        }
    }
    sets
}

fn localized(set: TokenSet, locale: Option<&str>) -> TokenSet {
    match locale {
        Some(prefix) => set
            .into_iter()
            .map(|(key, token)| (format!("{prefix}.{key}"), token))
            .collect(),
        None => set,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use serde_json::json;

    #[test]
    fn nested_map_gets_dotted_keys() {
        let out = flatten(&json!({"a": {"b": "hi"}}));
        assert_eq!(out.len(), 1);
        assert_eq!(out["a.b"], Token::text("hi"));
    }

    #[test]
    fn arrays_get_bracketed_indices() {
        let out = flatten(&json!({"items": ["x", "y"]}));
        assert_eq!(out["items[0]"], Token::text("x"));
        assert_eq!(out["items[1]"], Token::text("y"));
    }

    #[test]
    fn one_token_per_string_leaf() {
        let tree = json!({
            "hero": {"title": "Welcome", "subtitle": "Hello"},
            "faq": [
                {"question": "Why?", "answer": "Because."},
                {"question": "How?", "answer": "Like so."},
            ],
        });
        assert_eq!(flatten(&tree).len(), 6);
    }

    #[test]
    fn non_string_scalars_are_dropped() {
        let out = flatten(&json!({"a": 1, "b": true, "c": null, "d": "kept"}));
        assert_eq!(out.len(), 1);
        assert!(out.contains_key("d"));
    }

    #[test]
    fn wrapped_string_token_becomes_text() {
        let out = flatten(&json!({"greeting": {"value": "hello", "type": "string"}}));
        assert_eq!(out["greeting"], Token::text("hello"));
        assert_eq!(out["greeting"].kind, TokenKind::Text);
    }

    #[test]
    fn bare_value_wrapper_collapses_to_parent_key() {
        // convert-style output: {"value": s} with no type tag recurses and
        // the trailing `.value` is stripped on emission.
        let out = flatten(&json!({"a": {"value": "hi"}}));
        assert_eq!(out.len(), 1);
        assert_eq!(out["a"], Token::text("hi"));
    }

    #[test]
    fn reflattening_is_idempotent_up_to_type() {
        let once = flatten(&json!({"a": {"b": "hi"}, "c": ["x"]}));
        let as_string_typed: Value = serde_json::to_value(
            once.iter()
                .map(|(k, t)| {
                    (
                        k.clone(),
                        json!({"value": t.value.clone(), "type": "string"}),
                    )
                })
                .collect::<serde_json::Map<_, _>>(),
        )
        .expect("serialize set");

        let twice = flatten(&as_string_typed);
        assert_eq!(once, twice);
    }

    #[test]
    fn non_string_value_field_recurses_normally() {
        // Not a wrapped leaf: `value` holds a map, so the whole entry is
        // walked like any other subtree.
        let out = flatten(&json!({"a": {"value": {"deep": "hi"}, "type": "string"}}));
        assert_eq!(out.len(), 2);
        assert_eq!(out["a.value.deep"], Token::text("hi"));
        assert_eq!(out["a.type"], Token::text("string"));
    }

    #[test]
    fn top_level_keys_become_sets() {
        let sets = token_sets(&json!({"hero": {"title": "Welcome"}, "nav": {"home": "Home"}}), None);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets["hero"]["title"], Token::text("Welcome"));
        assert_eq!(sets["nav"]["home"], Token::text("Home"));
    }

    #[test]
    fn locale_prefix_namespaces_every_key() {
        let sets = token_sets(&json!({"hero": {"title": "Willkommen"}}), Some("DE"));
        assert_eq!(sets["hero"]["DE.title"], Token::text("Willkommen"));
        assert!(!sets["hero"].contains_key("title"));
    }

    #[test]
    fn non_mapping_root_lands_in_global() {
        let sets = token_sets(&json!(["x", "y"]), Some("EN"));
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[GLOBAL_SET]["EN.[0]"], Token::text("x"));
        assert_eq!(sets[GLOBAL_SET]["EN.[1]"], Token::text("y"));
    }
}
