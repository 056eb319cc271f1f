//! Translation tree transformation and lookup.
//!
//! Holds per-locale dictionaries as [`i18n::TranslationNode`] trees and
//! converts them between single-brace (ICU) and double-brace (i18next)
//! placeholder conventions, flattens them to dotted keys, and resolves
//! dotted paths back to leaf strings.

pub mod config;
pub mod export;
pub mod i18n;
