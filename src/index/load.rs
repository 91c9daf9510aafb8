// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion from the indexer's JSON layout into [`IndexNode`].

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use super::{ClassTag, IndexNode, Variant};
use crate::errors::IndexLoadError;

const CLASS_KEY: &str = "__class";
const INDEX_KEY: &str = "index";
const RESERVED_PREFIX: &str = "__";

/// Read and convert an index file.
pub fn load_index(path: &Path) -> Result<IndexNode, IndexLoadError> {
    let content = fs::read_to_string(path).map_err(|source| IndexLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let node = IndexNode::from_json(&content)?;
    tracing::debug!(
        path = %path.display(),
        top_level = node.children.len(),
        "loaded documentation index"
    );
    Ok(node)
}

/// Whether a raw index key carries metadata instead of naming a child.
pub fn is_reserved_key(key: &str) -> bool {
    key.starts_with(RESERVED_PREFIX) || key == INDEX_KEY
}

impl IndexNode {
    /// Parse an index from its JSON text. The root must be an object.
    pub fn from_json(content: &str) -> Result<Self, IndexLoadError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }

    /// Convert an already-parsed JSON value. The root must be an object.
    pub fn from_value(value: &Value) -> Result<Self, IndexLoadError> {
        match value {
            Value::Object(map) => Ok(node_from_map(map)),
            other => Err(IndexLoadError::RootNotObject {
                found: json_kind(other),
            }),
        }
    }
}

fn node_from_map(map: &Map<String, Value>) -> IndexNode {
    let mut node = IndexNode::new();

    for (key, value) in map {
        if key == CLASS_KEY {
            node.class = value.as_str().and_then(ClassTag::parse);
            continue;
        }
        if key == INDEX_KEY {
            node.index_leaf = index_leaf_from_value(value).map(Box::new);
            continue;
        }
        if let Some(variant) = variant_for_key(key) {
            if is_truthy(value) {
                node.variants.insert(variant);
            }
            continue;
        }
        if is_reserved_key(key) {
            continue;
        }
        match value {
            Value::Object(child) => node.children.push((key.clone(), node_from_map(child))),
            other if is_truthy(other) => node.children.push((key.clone(), IndexNode::new())),
            _ => {}
        }
    }

    node
}

fn index_leaf_from_value(value: &Value) -> Option<IndexNode> {
    match value {
        Value::Object(map) => Some(node_from_map(map)),
        other if is_truthy(other) => Some(IndexNode::leaf()),
        _ => None,
    }
}

fn variant_for_key(key: &str) -> Option<Variant> {
    [Variant::Basic, Variant::Detail, Variant::Install]
        .into_iter()
        .find(|variant| variant.reserved_key() == key)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Variants;

    #[test]
    fn reserved_keys_become_metadata() {
        let node = IndexNode::from_json(
            r#"{
                "array": {
                    "__class": "object",
                    "splice": {"__class": "method", "__basic": true, "__detail": 1},
                    "length": {"__class": "property", "__basic": true, "__install": false}
                }
            }"#,
        )
        .expect("parse index");

        let array = node.child("array").expect("array");
        assert_eq!(array.class, Some(ClassTag::Object));
        assert_eq!(array.child_names().collect::<Vec<_>>(), vec!["splice", "length"]);

        let splice = array.child("splice").expect("splice");
        assert_eq!(splice.class, Some(ClassTag::Method));
        assert_eq!(
            splice.variants,
            Variants::NONE.with(Variant::Basic).with(Variant::Detail)
        );
        assert!(!splice.has_children());

        let length = array.child("length").expect("length");
        assert!(!length.has_variant(Variant::Install));
    }

    #[test]
    fn index_key_is_never_a_child() {
        let raw = r#"{"array": {"index": {"__basic": true, "__detail": true}}}"#;
        let node = IndexNode::from_json(raw).expect("parse index");
        let array = node.child("array").expect("array");
        assert!(array.child("index").is_none());
        let leaf = array.index_leaf.as_deref().expect("index leaf");
        assert!(leaf.has_variant(Variant::Detail));
    }

    #[test]
    fn scalar_values_under_ordinary_keys() {
        let node = IndexNode::from_json(r#"{"a": true, "b": false, "__seen": 3, "index": true}"#)
            .expect("parse index");
        assert_eq!(node.child_names().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(node.index_leaf.as_deref(), Some(&IndexNode::leaf()));
    }

    #[test]
    fn crawl_order_is_preserved() {
        let node = IndexNode::from_json(r#"{"zeta": {}, "alpha": {}, "mid": {}}"#).expect("parse");
        assert_eq!(
            node.child_names().collect::<Vec<_>>(),
            vec!["zeta", "alpha", "mid"]
        );
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = IndexNode::from_json("[1, 2]").expect_err("array root");
        assert!(matches!(err, IndexLoadError::RootNotObject { found: "array" }));
    }

    #[test]
    fn reserved_key_detection() {
        assert!(is_reserved_key("__class"));
        assert!(is_reserved_key("index"));
        assert!(!is_reserved_key("indexOf"));
        assert!(!is_reserved_key("_private"));
    }
}
