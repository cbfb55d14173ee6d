//! Flattening of nested configuration documents into dotted-path
//! dictionaries.

use serde_json::{Map, Value};

use crate::FlatDict;
use crate::bind::join_key;

/// Flattens a nested object into a dictionary keyed by dotted paths.
///
/// Object values recurse, contributing their children under the joined
/// path; every other value, arrays included, is copied unchanged as a
/// leaf. An empty nested object contributes no keys at all, so it is
/// indistinguishable from absence in the output.
///
/// ```rust
/// use flatbind::{flatten, serde_json::json};
///
/// let document = json!({"server": {"port": 8080, "tls": {"enabled": true}}});
/// let map = document.as_object().expect("document is an object");
/// let flat = flatten(map);
/// assert_eq!(flat.get("server.port"), Some(&json!(8080)));
/// assert_eq!(flat.get("server.tls.enabled"), Some(&json!(true)));
/// ```
#[must_use]
pub fn flatten(map: &Map<String, Value>) -> FlatDict {
    let mut flat = FlatDict::new();
    flatten_into(&mut flat, "", map);
    flat
}

fn flatten_into(flat: &mut FlatDict, prefix: &str, map: &Map<String, Value>) {
    for (name, value) in map {
        let path = join_key(prefix, name);
        match value {
            Value::Object(nested) => flatten_into(flat, &path, nested),
            leaf => {
                flat.insert(path, leaf.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, ensure};
    use rstest::rstest;
    use serde_json::json;

    fn as_map(value: &Value) -> Result<&Map<String, Value>> {
        value
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("fixture must be an object"))
    }

    #[rstest]
    fn joins_nested_keys_with_dots() -> Result<()> {
        let document = json!({"aa": {"bb": 123, "cc": 456}, "dd": "leaf"});
        let flat = flatten(as_map(&document)?);
        let expected = FlatDict::from([
            ("aa.bb".to_owned(), json!(123)),
            ("aa.cc".to_owned(), json!(456)),
            ("dd".to_owned(), json!("leaf")),
        ]);
        ensure!(flat == expected, "unexpected flattening: {flat:?}");
        Ok(())
    }

    #[rstest]
    fn recurses_through_deep_nesting() -> Result<()> {
        let document = json!({"a": {"b": {"c": {"d": true}}}});
        let flat = flatten(as_map(&document)?);
        ensure!(
            flat.get("a.b.c.d") == Some(&json!(true)),
            "expected deep key, got {flat:?}"
        );
        ensure!(flat.len() == 1, "expected a single leaf, got {flat:?}");
        Ok(())
    }

    #[rstest]
    fn keeps_arrays_as_leaves() -> Result<()> {
        let document = json!({"tags": ["a", "b"], "grid": [[1], [2]]});
        let flat = flatten(as_map(&document)?);
        ensure!(
            flat.get("tags") == Some(&json!(["a", "b"])),
            "expected array leaf, got {flat:?}"
        );
        ensure!(
            flat.get("grid") == Some(&json!([[1], [2]])),
            "expected nested array leaf, got {flat:?}"
        );
        Ok(())
    }

    #[rstest]
    fn empty_objects_contribute_nothing() -> Result<()> {
        let document = json!({"aa": {}, "bb": 1});
        let flat = flatten(as_map(&document)?);
        let expected = FlatDict::from([("bb".to_owned(), json!(1))]);
        ensure!(flat == expected, "empty object leaked: {flat:?}");
        Ok(())
    }

    #[rstest]
    fn flat_input_passes_through() -> Result<()> {
        let document = json!({"x": 1, "y": "z"});
        let flat = flatten(as_map(&document)?);
        let expected = FlatDict::from([
            ("x".to_owned(), json!(1)),
            ("y".to_owned(), json!("z")),
        ]);
        ensure!(flat == expected, "flat input changed: {flat:?}");
        Ok(())
    }
}
