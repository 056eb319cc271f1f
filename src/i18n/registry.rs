//! Locale registry: the table of supported locales and their display names.
//!
//! The registry is an immutable value built once at startup and passed by
//! reference to whatever needs it (the catalog, the validator, a language
//! picker). It is never mutated after construction.

use crate::i18n::locale::Locale;

/// Configuration for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    pub locale: Locale,

    /// English name of the locale (e.g., "Spanish")
    pub name: &'static str,

    /// Name shown in language pickers (e.g., "Español")
    pub native_name: &'static str,

    /// Whether this is the default locale (exactly one must be)
    pub is_default: bool,
}

/// Reasons a registry table is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("locale registry has no entries")]
    Empty,

    #[error("locale '{0}' is registered more than once")]
    Duplicate(Locale),

    #[error("locale registry has no default locale")]
    NoDefault,

    #[error("locale registry has multiple default locales: {0:?}")]
    MultipleDefaults(Vec<Locale>),
}

/// Table of supported locales.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    default: Locale,
}

impl LocaleRegistry {
    /// Build a registry from an explicit table.
    ///
    /// # Errors
    /// Rejects an empty table, duplicate locales, and any table without
    /// exactly one default entry.
    pub fn new(locales: Vec<LocaleConfig>) -> Result<Self, RegistryError> {
        if locales.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (i, config) in locales.iter().enumerate() {
            if locales[..i].iter().any(|seen| seen.locale == config.locale) {
                return Err(RegistryError::Duplicate(config.locale));
            }
        }

        let defaults: Vec<Locale> = locales
            .iter()
            .filter(|config| config.is_default)
            .map(|config| config.locale)
            .collect();

        let default = match defaults.as_slice() {
            [] => return Err(RegistryError::NoDefault),
            [only] => *only,
            _ => return Err(RegistryError::MultipleDefaults(defaults)),
        };

        Ok(Self { locales, default })
    }

    /// The built-in table: English (default), Spanish, Brazilian Portuguese.
    pub fn builtin() -> Self {
        Self {
            locales: builtin_locales(),
            default: Locale::En,
        }
    }

    pub fn get(&self, locale: Locale) -> Option<&LocaleConfig> {
        self.locales.iter().find(|config| config.locale == locale)
    }

    /// Get a locale configuration by identifier (e.g., "pt-br").
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        Locale::from_code(code).and_then(|locale| self.get(locale))
    }

    pub fn contains(&self, locale: Locale) -> bool {
        self.get(locale).is_some()
    }

    /// Registered locales, in table order.
    pub fn supported(&self) -> Vec<Locale> {
        self.locales.iter().map(|config| config.locale).collect()
    }

    /// Human-readable name for a language picker.
    pub fn display_name(&self, locale: Locale) -> Option<&'static str> {
        self.get(locale).map(|config| config.native_name)
    }

    pub fn default_locale(&self) -> Locale {
        self.default
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleConfig> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            locale: Locale::En,
            name: "English",
            native_name: "English",
            is_default: true,
        },
        LocaleConfig {
            locale: Locale::Es,
            name: "Spanish",
            native_name: "Español",
            is_default: false,
        },
        LocaleConfig {
            locale: Locale::PtBr,
            name: "Brazilian Portuguese",
            native_name: "Português (Brasil)",
            is_default: false,
        },
    ]
}
