//! Property-based tests for conversion, transformation, flattening and
//! path resolution.

use proptest::prelude::*;

use locale_tree::i18n::{
    convert_interpolation, flatten, get_by_path, transform_translations, InterpolationFormat,
    TranslationNode,
};

// ==================== Strategies ====================

fn format() -> impl Strategy<Value = InterpolationFormat> {
    prop_oneof![
        Just(InterpolationFormat::Icu),
        Just(InterpolationFormat::I18next)
    ]
}

/// Text assembled from fragments that stress brace handling.
fn brace_text() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        prop::sample::select(vec!["{", "}", "{{", "}}", ", plural, ", "one ", "other ", "#", " "])
            .prop_map(|piece| piece.to_string()),
        "[a-z_]{1,6}",
    ];
    prop::collection::vec(fragment, 0..16).prop_map(|parts| parts.concat())
}

fn leaf_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ]{0,12}",
        "[a-z]{1,5}".prop_map(|name| format!("Hi {{{}}}", name)),
        "[a-z]{1,5}".prop_map(|name| format!("Hi {{{{{}}}}}", name)),
        "[a-z]{1,5}".prop_map(|name| format!("{{{}, plural, one {{# x}} other {{# xs}}}}", name)),
    ]
}

/// Keys never contain the separator and are never empty.
fn tree() -> impl Strategy<Value = TranslationNode> {
    let leaf = prop_oneof![
        leaf_text().prop_map(TranslationNode::Leaf),
        prop::collection::vec(leaf_text(), 0..4).prop_map(TranslationNode::Sequence),
    ];
    let nested = leaf.prop_recursive(4, 48, 6, |inner| {
        prop::collection::vec(("[a-zA-Z0-9_]{1,6}", inner), 0..6)
            .prop_map(|entries| TranslationNode::mapping(entries))
    });
    prop::collection::vec(("[a-zA-Z0-9_]{1,6}", nested), 0..6)
        .prop_map(|entries| TranslationNode::mapping(entries))
}

/// Same keys, same nesting, same sequence lengths.
fn same_shape(a: &TranslationNode, b: &TranslationNode) -> bool {
    match (a, b) {
        (TranslationNode::Leaf(_), TranslationNode::Leaf(_)) => true,
        (TranslationNode::Sequence(x), TranslationNode::Sequence(y)) => x.len() == y.len(),
        (TranslationNode::Mapping(x), TranslationNode::Mapping(y)) => {
            x.len() == y.len()
                && x.iter()
                    .zip(y.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && same_shape(va, vb))
        }
        _ => false,
    }
}

// ==================== Properties ====================

proptest! {
    #[test]
    fn prop_plain_text_is_unchanged(text in "[^{}]{0,40}", fmt in format()) {
        prop_assert_eq!(convert_interpolation(&text, fmt), text);
    }

    #[test]
    fn prop_i18next_conversion_is_idempotent(text in brace_text()) {
        let once = convert_interpolation(&text, InterpolationFormat::I18next);
        let twice = convert_interpolation(&once, InterpolationFormat::I18next);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_simple_placeholders_round_trip(names in prop::collection::vec("[a-z_][a-z0-9_]{0,6}", 1..5)) {
        let text = names
            .iter()
            .map(|name| format!("{{{}}}", name))
            .collect::<Vec<_>>()
            .join(" and ");
        let there = convert_interpolation(&text, InterpolationFormat::I18next);
        let back = convert_interpolation(&there, InterpolationFormat::Icu);
        prop_assert_eq!(back, text);
    }

    #[test]
    fn prop_transform_preserves_shape(tree in tree(), fmt in format()) {
        let out = transform_translations(&tree, fmt);
        prop_assert!(same_shape(&tree, &out));
        prop_assert_eq!(tree.leaf_count(), out.leaf_count());
    }

    #[test]
    fn prop_flatten_agrees_with_resolver(tree in tree()) {
        let flat = flatten(&tree);
        prop_assert_eq!(flat.len(), tree.leaf_count());
        for (key, value) in &flat {
            prop_assert_eq!(get_by_path(&tree, key), Some(value.as_str()));
        }
    }
}
