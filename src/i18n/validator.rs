//! Catalog consistency validation.
//!
//! Every locale is compared against the default locale: keys the default
//! has but the locale lacks, keys only the locale has, and shared keys whose
//! placeholder identifiers differ.

use std::collections::BTreeSet;

use crate::i18n::catalog::Catalog;
use crate::i18n::flatten::flatten;
use crate::i18n::interpolation::placeholder_names;
use crate::i18n::locale::Locale;
use crate::i18n::node::TranslationNode;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make a locale incomplete (missing keys)
    pub errors: Vec<String>,

    /// Suspicious differences that do not block use
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Append another report's findings to this one
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for cross-locale consistency.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate every loaded locale against the default locale.
    pub fn validate(catalog: &Catalog) -> ValidationReport {
        let mut report = ValidationReport::new();
        let default = catalog.registry().default_locale();

        let Some(reference) = catalog.tree(default) else {
            report
                .errors
                .push(format!("Default locale '{}' has no dictionary", default));
            return report;
        };

        for locale in catalog.registry().supported() {
            if locale == default {
                continue;
            }
            match catalog.tree(locale) {
                Some(tree) => report.merge(Self::compare(reference, tree, locale)),
                None => report
                    .warnings
                    .push(format!("[{}] No dictionary loaded", locale)),
            }
        }

        report
    }

    /// Compare one locale's dictionary with the reference dictionary.
    pub fn compare(
        reference: &TranslationNode,
        candidate: &TranslationNode,
        locale: Locale,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();
        let reference = flatten(reference);
        let candidate = flatten(candidate);

        for (key, expected) in &reference {
            let Some(actual) = candidate.get(key) else {
                report
                    .errors
                    .push(format!("[{}] Missing key '{}'", locale, key));
                continue;
            };

            let expected_names = placeholder_names(expected);
            let actual_names = placeholder_names(actual);
            if expected_names != actual_names {
                report.warnings.push(format!(
                    "[{}] Placeholder mismatch for '{}': default has {}, locale has {}",
                    locale,
                    key,
                    describe(&expected_names),
                    describe(&actual_names)
                ));
            }
        }

        for key in candidate.keys() {
            if !reference.contains_key(key) {
                report.warnings.push(format!(
                    "[{}] Extra key '{}' not present in default locale",
                    locale, key
                ));
            }
        }

        report
    }
}

fn describe(names: &BTreeSet<String>) -> String {
    if names.is_empty() {
        return "none".to_string();
    }
    names
        .iter()
        .map(|name| format!("{{{}}}", name))
        .collect::<Vec<_>>()
        .join(", ")
}
