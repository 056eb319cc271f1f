//! Writing converted dictionaries to disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::config::{ExportConfig, OutputLayout};
use crate::i18n::{flatten_keys, Catalog, Locale};

/// Render one locale in the configured format and layout as pretty JSON.
///
/// Returns `None` if the catalog has no dictionary for `locale`.
pub fn render_locale(catalog: &Catalog, locale: Locale, config: &ExportConfig) -> Result<Option<String>> {
    let Some(tree) = catalog.transformed(locale, config.target_format) else {
        return Ok(None);
    };

    let json = match config.layout {
        OutputLayout::Nested => serde_json::to_string_pretty(&tree),
        OutputLayout::Flat => {
            serde_json::to_string_pretty(&flatten_keys(&tree, "", &config.key_separator))
        }
    }
    .with_context(|| format!("Failed to serialize dictionary for {}", locale))?;

    Ok(Some(json))
}

/// Write `<output_dir>/<code>.json` for every loaded locale.
///
/// Returns the written paths in registry order.
pub fn export_catalog(catalog: &Catalog, config: &ExportConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create {}", config.output_dir.display()))?;

    let mut written = Vec::new();
    for locale in catalog.locales() {
        let Some(json) = render_locale(catalog, locale, config)? else {
            continue;
        };

        let path = config.output_dir.join(format!("{}.json", locale.code()));
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        info!(
            "Exported {} ({}) to {}",
            locale,
            config.target_format,
            path.display()
        );
        written.push(path);
    }

    Ok(written)
}
