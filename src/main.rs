use anyhow::{Context, Result};
use locale_tree::config::ExportConfig;
use locale_tree::export::export_catalog;
use locale_tree::i18n::{load_locale_dir, CatalogValidator, LocaleRegistry};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_tree=info".parse()?),
        )
        .init();

    info!("Starting locale export");

    let config = ExportConfig::from_env()?;
    let registry = LocaleRegistry::builtin();

    // Step 1: Load every registered locale
    let catalog = load_locale_dir(&config.locales_dir, registry)
        .with_context(|| format!("Failed to load locales from {}", config.locales_dir.display()))?;

    // Step 2: Report inconsistencies between locales
    let report = CatalogValidator::validate(&catalog);
    for error in &report.errors {
        warn!("{}", error);
    }
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if report.is_clean() {
        info!("All locales consistent with the default locale");
    }

    // Step 3: Convert and write
    let written = export_catalog(&catalog, &config)?;

    info!(
        "Exported {} locales to {}",
        written.len(),
        config.output_dir.display()
    );
    Ok(())
}
