//! Translation node model: the recursive shape of one locale's dictionary.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Flat map of joined key paths to leaf strings, in traversal order.
pub type FlatKeyMap = IndexMap<String, String>;

/// One node of a translation dictionary.
///
/// A locale root is always a [`TranslationNode::Mapping`]. Sequences only ever
/// hold strings; mappings may nest any shape to arbitrary depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    /// A single text string, possibly containing placeholders.
    Leaf(String),

    /// An ordered list of strings (e.g. weekday names).
    Sequence(Vec<String>),

    /// A namespace of named children, iterated in insertion order.
    Mapping(IndexMap<String, TranslationNode>),
}

impl TranslationNode {
    /// Build a mapping from `(key, node)` pairs, keeping their order.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TranslationNode)>,
    {
        TranslationNode::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn leaf(text: impl Into<String>) -> Self {
        TranslationNode::Leaf(text.into())
    }

    pub fn sequence<S, I>(items: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        TranslationNode::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// The leaf text, if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            TranslationNode::Leaf(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, TranslationNode::Mapping(_))
    }

    /// Number of leaf strings reachable from this node, counting every
    /// sequence element as a leaf.
    pub fn leaf_count(&self) -> usize {
        match self {
            TranslationNode::Leaf(_) => 1,
            TranslationNode::Sequence(items) => items.len(),
            TranslationNode::Mapping(children) => children.values().map(Self::leaf_count).sum(),
        }
    }

    /// Short name of the node's shape, used in log and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationNode::Leaf(_) => "leaf",
            TranslationNode::Sequence(_) => "sequence",
            TranslationNode::Mapping(_) => "mapping",
        }
    }
}

impl From<&str> for TranslationNode {
    fn from(text: &str) -> Self {
        TranslationNode::Leaf(text.to_string())
    }
}

impl From<String> for TranslationNode {
    fn from(text: String) -> Self {
        TranslationNode::Leaf(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_tree() -> TranslationNode {
        TranslationNode::mapping([(
            "Settings",
            TranslationNode::mapping([
                ("title", TranslationNode::leaf("Settings")),
                (
                    "theme",
                    TranslationNode::mapping([
                        ("light", TranslationNode::leaf("Light")),
                        ("dark", TranslationNode::leaf("Dark")),
                    ]),
                ),
                ("days", TranslationNode::sequence(["Mon", "Tue", "Wed"])),
            ]),
        )])
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_mapping_preserves_insertion_order() {
        let node = TranslationNode::mapping([
            ("zeta", TranslationNode::leaf("z")),
            ("alpha", TranslationNode::leaf("a")),
        ]);

        let TranslationNode::Mapping(children) = node else {
            panic!("expected mapping");
        };
        let keys: Vec<&str> = children.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_from_str_builds_leaf() {
        let node: TranslationNode = "Hello".into();
        assert_eq!(node.as_leaf(), Some("Hello"));
        assert_eq!(node.kind(), "leaf");
    }

    // ==================== Inspection Tests ====================

    #[test]
    fn test_leaf_count_counts_sequence_elements() {
        assert_eq!(settings_tree().leaf_count(), 6);
    }

    #[test]
    fn test_as_leaf_on_mapping_is_none() {
        assert!(settings_tree().as_leaf().is_none());
        assert!(settings_tree().is_mapping());
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_deserialize_nested_json() {
        let json = r#"{"Settings":{"title":"Settings","days":["Mon","Tue"]}}"#;
        let node: TranslationNode = serde_json::from_str(json).unwrap();

        let expected = TranslationNode::mapping([(
            "Settings",
            TranslationNode::mapping([
                ("title", TranslationNode::leaf("Settings")),
                ("days", TranslationNode::sequence(["Mon", "Tue"])),
            ]),
        )]);
        assert_eq!(node, expected);
    }

    #[test]
    fn test_serialize_keeps_key_order() {
        let node = TranslationNode::mapping([
            ("b", TranslationNode::leaf("2")),
            ("a", TranslationNode::leaf("1")),
        ]);
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"b":"2","a":"1"}"#);
    }
}
