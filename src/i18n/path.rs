//! Dotted-path lookup into a translation tree.

use crate::i18n::flatten::DEFAULT_SEPARATOR;
use crate::i18n::node::TranslationNode;

/// Resolve a `.`-separated `path` to the leaf string it names.
///
/// Returns `None` when a key is missing, an index is non-numeric or out of
/// range, the path runs past a leaf, or the path ends on a mapping or
/// sequence.
///
/// # Example
/// ```
/// use locale_tree::i18n::{get_by_path, TranslationNode};
///
/// let tree = TranslationNode::mapping([("days", TranslationNode::sequence(["Mon", "Tue"]))]);
/// assert_eq!(get_by_path(&tree, "days.1"), Some("Tue"));
/// assert_eq!(get_by_path(&tree, "days.5"), None);
/// ```
pub fn get_by_path<'a>(node: &'a TranslationNode, path: &str) -> Option<&'a str> {
    get_by_path_with(node, path, DEFAULT_SEPARATOR)
}

/// Same as [`get_by_path`] with a caller-chosen separator.
pub fn get_by_path_with<'a>(
    node: &'a TranslationNode,
    path: &str,
    separator: &str,
) -> Option<&'a str> {
    if path.is_empty() {
        return node.as_leaf();
    }

    let mut current = Cursor::Node(node);
    for segment in path.split(separator) {
        current = match current {
            Cursor::Text(_) | Cursor::Node(TranslationNode::Leaf(_)) => return None,
            Cursor::Node(TranslationNode::Sequence(items)) => {
                let index: usize = segment.parse().ok()?;
                Cursor::Text(items.get(index)?)
            }
            Cursor::Node(TranslationNode::Mapping(children)) => {
                Cursor::Node(children.get(segment)?)
            }
        };
    }

    match current {
        Cursor::Text(text) => Some(text),
        Cursor::Node(node) => node.as_leaf(),
    }
}

/// Position reached while descending: a node, or a sequence element.
enum Cursor<'a> {
    Node(&'a TranslationNode),
    Text(&'a str),
}
