//! Catalog: the loaded dictionaries of every registered locale.
//!
//! Built once at startup (see [`load_locale_dir`](crate::i18n::load_locale_dir))
//! and only read afterwards. Lookups fall back to the registry's default
//! locale when the requested locale lacks a key.

use std::collections::HashMap;

use tracing::debug;

use crate::i18n::flatten::flatten_keys;
use crate::i18n::interpolation::InterpolationFormat;
use crate::i18n::locale::Locale;
use crate::i18n::node::{FlatKeyMap, TranslationNode};
use crate::i18n::path::get_by_path;
use crate::i18n::registry::LocaleRegistry;
use crate::i18n::transform::transform_translations;

/// Reasons a dictionary is refused by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("locale '{0}' is not in the registry")]
    Unregistered(Locale),

    #[error("dictionary root for locale '{locale}' must be a mapping, found {found}")]
    RootNotMapping { locale: Locale, found: &'static str },
}

/// Root dictionaries keyed by locale, plus the registry they belong to.
#[derive(Debug, Clone)]
pub struct Catalog {
    registry: LocaleRegistry,
    trees: HashMap<Locale, TranslationNode>,
}

impl Catalog {
    pub fn new(registry: LocaleRegistry) -> Self {
        Self {
            registry,
            trees: HashMap::new(),
        }
    }

    /// Add (or replace) the dictionary for `locale`.
    ///
    /// # Errors
    /// The locale must be registered and the root must be a mapping.
    pub fn insert(&mut self, locale: Locale, tree: TranslationNode) -> Result<(), CatalogError> {
        if !self.registry.contains(locale) {
            return Err(CatalogError::Unregistered(locale));
        }
        if !tree.is_mapping() {
            return Err(CatalogError::RootNotMapping {
                locale,
                found: tree.kind(),
            });
        }
        self.trees.insert(locale, tree);
        Ok(())
    }

    /// Builder-style [`Catalog::insert`].
    pub fn with_locale(mut self, locale: Locale, tree: TranslationNode) -> Result<Self, CatalogError> {
        self.insert(locale, tree)?;
        Ok(self)
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn tree(&self, locale: Locale) -> Option<&TranslationNode> {
        self.trees.get(&locale)
    }

    /// Locales with a loaded dictionary, in registry order.
    pub fn locales(&self) -> Vec<Locale> {
        self.registry
            .supported()
            .into_iter()
            .filter(|locale| self.trees.contains_key(locale))
            .collect()
    }

    /// Resolve `path` in `locale`, falling back to the default locale.
    pub fn lookup(&self, locale: Locale, path: &str) -> Option<&str> {
        if let Some(text) = self.tree(locale).and_then(|tree| get_by_path(tree, path)) {
            return Some(text);
        }

        let fallback = self.registry.default_locale();
        if fallback == locale {
            return None;
        }

        let text = self.tree(fallback).and_then(|tree| get_by_path(tree, path))?;
        debug!(
            locale = %locale,
            fallback = %fallback,
            key = path,
            "Key missing, using default locale"
        );
        Some(text)
    }

    /// The dictionary for `locale` converted to `format`.
    pub fn transformed(&self, locale: Locale, format: InterpolationFormat) -> Option<TranslationNode> {
        self.tree(locale)
            .map(|tree| transform_translations(tree, format))
    }

    /// The dictionary for `locale` flattened with `separator`.
    pub fn flattened(&self, locale: Locale, separator: &str) -> Option<FlatKeyMap> {
        self.tree(locale)
            .map(|tree| flatten_keys(tree, "", separator))
    }
}
