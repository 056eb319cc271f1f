use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::str::FromStr;

use crate::i18n::{InterpolationFormat, DEFAULT_SEPARATOR};

/// Shape of each exported dictionary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLayout {
    /// Same nesting as the source dictionary
    Nested,
    /// Single-level object of joined keys
    Flat,
}

impl FromStr for OutputLayout {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nested" => Ok(OutputLayout::Nested),
            "flat" => Ok(OutputLayout::Flat),
            other => bail!("Unknown output layout '{}' (expected 'nested' or 'flat')", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    // Input
    pub locales_dir: PathBuf,

    // Output
    pub output_dir: PathBuf,
    pub target_format: InterpolationFormat,
    pub layout: OutputLayout,
    pub key_separator: String,
}

impl ExportConfig {
    pub fn from_env() -> Result<Self> {
        let key_separator =
            std::env::var("KEY_SEPARATOR").unwrap_or_else(|_| DEFAULT_SEPARATOR.to_string());
        if key_separator.is_empty() {
            bail!("KEY_SEPARATOR must not be empty");
        }

        Ok(Self {
            // Input
            locales_dir: std::env::var("LOCALES_DIR")
                .context("LOCALES_DIR not set")?
                .into(),

            // Output
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "dist/locales".to_string())
                .into(),
            target_format: match std::env::var("TARGET_FORMAT") {
                Ok(value) => value
                    .parse::<InterpolationFormat>()
                    .with_context(|| format!("Invalid TARGET_FORMAT '{}'", value))?,
                Err(_) => InterpolationFormat::I18next,
            },
            layout: match std::env::var("OUTPUT_LAYOUT") {
                Ok(value) => value
                    .parse::<OutputLayout>()
                    .context("Invalid OUTPUT_LAYOUT")?,
                Err(_) => OutputLayout::Nested,
            },
            key_separator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "LOCALES_DIR",
        "OUTPUT_DIR",
        "TARGET_FORMAT",
        "OUTPUT_LAYOUT",
        "KEY_SEPARATOR",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    // ==================== from_env Tests ====================

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("LOCALES_DIR", "locales");

        let config = ExportConfig::from_env().unwrap();
        assert_eq!(config.locales_dir, PathBuf::from("locales"));
        assert_eq!(config.output_dir, PathBuf::from("dist/locales"));
        assert_eq!(config.target_format, InterpolationFormat::I18next);
        assert_eq!(config.layout, OutputLayout::Nested);
        assert_eq!(config.key_separator, ".");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("LOCALES_DIR", "src/locales");
        std::env::set_var("OUTPUT_DIR", "out");
        std::env::set_var("TARGET_FORMAT", "icu");
        std::env::set_var("OUTPUT_LAYOUT", "flat");
        std::env::set_var("KEY_SEPARATOR", "__");

        let config = ExportConfig::from_env().unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.target_format, InterpolationFormat::Icu);
        assert_eq!(config.layout, OutputLayout::Flat);
        assert_eq!(config.key_separator, "__");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_requires_locales_dir() {
        clear_env();
        let err = ExportConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("LOCALES_DIR"));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unknown_format() {
        clear_env();
        std::env::set_var("LOCALES_DIR", "locales");
        std::env::set_var("TARGET_FORMAT", "mustache");

        let err = ExportConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("TARGET_FORMAT"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_empty_separator() {
        clear_env();
        std::env::set_var("LOCALES_DIR", "locales");
        std::env::set_var("KEY_SEPARATOR", "");

        assert!(ExportConfig::from_env().is_err());

        clear_env();
    }

    // ==================== OutputLayout Tests ====================

    #[test]
    fn test_output_layout_from_str() {
        assert_eq!("Nested".parse::<OutputLayout>().unwrap(), OutputLayout::Nested);
        assert_eq!("flat".parse::<OutputLayout>().unwrap(), OutputLayout::Flat);
        assert!("tree".parse::<OutputLayout>().is_err());
    }
}
