//! Flattening of nested dictionaries into joined keys.
//!
//! `{"Settings": {"theme": {"light": "Light"}}}` becomes
//! `{"Settings.theme.light": "Light"}`.
//!
//! Sequences are flattened by index: `{"days": ["Mon", "Tue"]}` becomes
//! `{"days.0": "Mon", "days.1": "Tue"}`. Consumers that need the list
//! verbatim should not flatten namespaces containing sequences.

use crate::i18n::node::{FlatKeyMap, TranslationNode};

/// Default separator between path segments.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Flatten `node` with no prefix and the default `.` separator.
pub fn flatten(node: &TranslationNode) -> FlatKeyMap {
    flatten_keys(node, "", DEFAULT_SEPARATOR)
}

/// Flatten `node` into a single-level map of joined paths to leaf strings.
///
/// Keys are emitted depth-first in mapping iteration order. Every key is
/// unique because every traversal path is unique.
pub fn flatten_keys(node: &TranslationNode, prefix: &str, separator: &str) -> FlatKeyMap {
    let mut result = FlatKeyMap::new();
    flatten_into(node, prefix, separator, &mut result);
    result
}

fn flatten_into(node: &TranslationNode, prefix: &str, separator: &str, result: &mut FlatKeyMap) {
    match node {
        TranslationNode::Leaf(text) => {
            // A bare leaf has no key of its own to record under
            if !prefix.is_empty() {
                result.insert(prefix.to_string(), text.clone());
            }
        }
        TranslationNode::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                let full_key = join_key(prefix, separator, &index.to_string());
                result.insert(full_key, item.clone());
            }
        }
        TranslationNode::Mapping(children) => {
            for (key, child) in children {
                let full_key = join_key(prefix, separator, key);
                match child {
                    TranslationNode::Leaf(text) => {
                        result.insert(full_key, text.clone());
                    }
                    _ => flatten_into(child, &full_key, separator, result),
                }
            }
        }
    }
}

fn join_key(prefix: &str, separator: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", prefix, separator, key)
    }
}
