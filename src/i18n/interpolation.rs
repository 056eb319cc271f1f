//! Placeholder conversion between single-brace and double-brace conventions.
//!
//! Single-brace (ICU message format, used by `react-intl`/`next-intl`):
//! `{name}` and `{count, plural, one {# task} other {# tasks}}`.
//!
//! Double-brace (`i18next`): `{{name}}`, with no plural clause syntax.
//!
//! Converting to double-brace collapses plural placeholders to their bare
//! identifier. That reduction is lossy and cannot be undone by converting
//! back.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Target placeholder convention for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationFormat {
    /// `{name}` with optional `{name, plural, ...}` clauses.
    Icu,
    /// `{{name}}`.
    I18next,
}

impl InterpolationFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationFormat::Icu => "icu",
            InterpolationFormat::I18next => "i18next",
        }
    }
}

impl fmt::Display for InterpolationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known interpolation format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown interpolation format '{0}' (expected 'icu' or 'i18next')")]
pub struct UnknownFormat(pub String);

impl FromStr for InterpolationFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "icu" | "single" | "a" => Ok(InterpolationFormat::Icu),
            "i18next" | "double" | "b" => Ok(InterpolationFormat::I18next),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

// Regex patterns (compiled once)
static PLURAL_OPEN_REGEX: OnceLock<Regex> = OnceLock::new();
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static DOUBLE_BRACE_REGEX: OnceLock<Regex> = OnceLock::new();

fn plural_open_regex() -> &'static Regex {
    PLURAL_OPEN_REGEX
        .get_or_init(|| Regex::new(r"\{(\w+)\s*,\s*plural\s*,").expect("plural pattern is valid"))
}

/// Double-brace placeholders come first so the leftmost match keeps them
/// whole instead of matching their inner single-brace part.
fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{\{\w+\}\}|\{(\w+)\}").expect("placeholder pattern is valid")
    })
}

fn double_brace_regex() -> &'static Regex {
    DOUBLE_BRACE_REGEX
        .get_or_init(|| Regex::new(r"\{\{(\w+)\}\}").expect("double-brace pattern is valid"))
}

/// Rewrite every placeholder in `text` into the `target` convention.
///
/// Unrecognized or unbalanced brace sequences are copied through verbatim.
///
/// # Example
/// ```
/// use locale_tree::i18n::{convert_interpolation, InterpolationFormat};
///
/// let out = convert_interpolation("{name} has {count} tasks", InterpolationFormat::I18next);
/// assert_eq!(out, "{{name}} has {{count}} tasks");
/// ```
pub fn convert_interpolation(text: &str, target: InterpolationFormat) -> String {
    match target {
        InterpolationFormat::I18next => {
            let collapsed = collapse_plurals(text);
            placeholder_regex()
                .replace_all(&collapsed, |caps: &Captures<'_>| match caps.get(1) {
                    Some(name) => format!("{{{{{}}}}}", name.as_str()),
                    None => caps[0].to_string(),
                })
                .into_owned()
        }
        InterpolationFormat::Icu => double_brace_regex()
            .replace_all(text, "{${1}}")
            .into_owned(),
    }
}

/// Identifiers of every placeholder in `text`, in either convention.
///
/// Plural placeholders contribute their identifier only; clause bodies are
/// not scanned.
pub fn placeholder_names(text: &str) -> BTreeSet<String> {
    let normalized = convert_interpolation(text, InterpolationFormat::I18next);
    double_brace_regex()
        .captures_iter(&normalized)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Replace each balanced `{id, plural, ...}` with `{{id}}`.
fn collapse_plurals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for caps in plural_open_regex().captures_iter(text) {
        let (Some(open), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        // Opener sits inside a plural that was already collapsed
        if open.start() < cursor {
            continue;
        }
        let Some(close) = matching_brace(text, open.end()) else {
            continue;
        };

        out.push_str(&text[cursor..open.start()]);
        out.push_str("{{");
        out.push_str(name.as_str());
        out.push_str("}}");
        cursor = close + 1;
    }

    out.push_str(&text[cursor..]);
    out
}

/// Byte offset of the `}` closing a brace opened before `from`.
fn matching_brace(text: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (offset, byte) in text.as_bytes()[from..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(from + offset);
                }
            }
            _ => {}
        }
    }
    None
}
