//! Locale identifiers.
//!
//! The set of locales is closed: every dictionary this crate handles is keyed
//! by one of these values. Display names and the default locale live in the
//! [`LocaleRegistry`](crate::i18n::LocaleRegistry).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    /// English
    #[serde(rename = "en")]
    En,

    /// Spanish
    #[serde(rename = "es")]
    Es,

    /// Brazilian Portuguese
    #[serde(rename = "pt-br")]
    PtBr,
}

/// Every supported locale, in picker order.
pub const SUPPORTED_LOCALES: [Locale; 3] = [Locale::En, Locale::Es, Locale::PtBr];

impl Locale {
    /// Canonical identifier, also the dictionary file stem (`pt-br.json`).
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::PtBr => "pt-br",
        }
    }

    /// Look up a locale by identifier.
    ///
    /// Matching ignores case and treats `_` as `-`, so `pt_BR`, `PT-BR` and
    /// `pt-br` all resolve to [`Locale::PtBr`].
    pub fn from_code(code: &str) -> Option<Locale> {
        let normalized = code.trim().to_ascii_lowercase().replace('_', "-");
        SUPPORTED_LOCALES
            .into_iter()
            .find(|locale| locale.code() == normalized)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when an identifier names no supported locale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale code: '{0}'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}
