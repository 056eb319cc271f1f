//! Reading persisted dictionaries.
//!
//! Each locale is stored as one JSON document (`<dir>/<code>.json`) of
//! nested objects whose leaves are strings or arrays of strings.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info};

use crate::i18n::catalog::{Catalog, CatalogError};
use crate::i18n::locale::Locale;
use crate::i18n::node::TranslationNode;
use crate::i18n::registry::LocaleRegistry;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dictionary JSON")]
    Json(#[from] serde_json::Error),

    #[error("dictionary root must be an object, found {found}")]
    RootNotObject { found: &'static str },

    #[error("unsupported value at '{path}': expected string, array of strings or object, found {found}")]
    InvalidNode { path: String, found: &'static str },

    #[error("failed to load {}", .file.display())]
    InFile {
        file: PathBuf,
        #[source]
        source: Box<LoadError>,
    },

    #[error("no dictionary for locale '{locale}' (expected {})", .path.display())]
    MissingLocale { locale: Locale, path: PathBuf },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parse one dictionary document. The root must be a JSON object.
pub fn parse_dictionary(json: &str) -> Result<TranslationNode, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(LoadError::RootNotObject {
            found: json_type_name(&value),
        });
    }
    node_from_value(value, "")
}

/// Convert a JSON value into a node. `path` is the dotted location of
/// `value`, reported when the value has an unsupported shape.
pub fn node_from_value(value: Value, path: &str) -> Result<TranslationNode, LoadError> {
    match value {
        Value::String(text) => Ok(TranslationNode::Leaf(text)),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(text) => Ok(text),
                other => Err(LoadError::InvalidNode {
                    path: child_path(path, &index.to_string()),
                    found: json_type_name(&other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(TranslationNode::Sequence),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(key, child)| {
                let node = node_from_value(child, &child_path(path, &key))?;
                Ok((key, node))
            })
            .collect::<Result<IndexMap<_, _>, LoadError>>()
            .map(TranslationNode::Mapping),
        other => Err(LoadError::InvalidNode {
            path: path.to_string(),
            found: json_type_name(&other),
        }),
    }
}

/// Read and parse a dictionary file.
pub fn load_dictionary(path: &Path) -> Result<TranslationNode, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_dictionary(&content).map_err(|source| LoadError::InFile {
        file: path.to_path_buf(),
        source: Box::new(source),
    })
}

/// Load `<dir>/<code>.json` for every locale in `registry`.
///
/// Every registered locale must have a file; the returned catalog is
/// complete and read-only from here on.
pub fn load_locale_dir(dir: &Path, registry: LocaleRegistry) -> Result<Catalog, LoadError> {
    let mut catalog = Catalog::new(registry.clone());

    for locale in registry.supported() {
        let path = dir.join(format!("{}.json", locale.code()));
        if !path.is_file() {
            return Err(LoadError::MissingLocale { locale, path });
        }

        debug!(locale = %locale, path = %path.display(), "Loading dictionary");
        let tree = load_dictionary(&path)?;
        info!("Loaded {} strings for locale {}", tree.leaf_count(), locale);
        catalog.insert(locale, tree)?;
    }

    Ok(catalog)
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
