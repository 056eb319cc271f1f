//! Tree-wide placeholder conversion.

use crate::i18n::interpolation::{convert_interpolation, InterpolationFormat};
use crate::i18n::node::TranslationNode;

/// Convert every leaf of `node` to the `target` placeholder convention.
///
/// Returns a new tree with the same shape: identical mapping keys in the
/// same order and identical sequence lengths. Only leaf text changes.
pub fn transform_translations(node: &TranslationNode, target: InterpolationFormat) -> TranslationNode {
    match node {
        TranslationNode::Leaf(text) => TranslationNode::Leaf(convert_interpolation(text, target)),
        TranslationNode::Sequence(items) => TranslationNode::Sequence(
            items
                .iter()
                .map(|item| convert_interpolation(item, target))
                .collect(),
        ),
        TranslationNode::Mapping(children) => TranslationNode::Mapping(
            children
                .iter()
                .map(|(key, child)| (key.clone(), transform_translations(child, target)))
                .collect(),
        ),
    }
}
