use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::PressError;

/// Default output file of the principles sheet, relative to the working directory.
pub const DEFAULT_PDF_PATH: &str = "George_Washington_Carver_Principles.pdf";

/// Default directory receiving the roadmap tables and their archive.
pub const DEFAULT_TABLES_DIR: &str = "out_revised_tables";

/// Levels accepted in `log_level`, compared case-insensitively.
pub(crate) const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

// ---------------------------------------------------------------------------
// PressConfig
// ---------------------------------------------------------------------------

/// Runtime settings shared by both generators.
///
/// Every field has a default, so both binaries run without a config file.
/// A JSON file may override any subset of fields:
///
/// ```json
/// { "tables_dir": "build/tables", "log_level": "debug" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressConfig {
    /// Where the principles sheet PDF is written.
    pub pdf_path: PathBuf,
    /// Directory receiving the CSV tables and the ZIP bundle.
    pub tables_dir: PathBuf,
    /// Fallback filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Optional directory for daily-rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            pdf_path: PathBuf::from(DEFAULT_PDF_PATH),
            tables_dir: PathBuf::from(DEFAULT_TABLES_DIR),
            log_level: "warn".into(),
            log_dir: None,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub pdf_path: Option<PathBuf>,
    pub tables_dir: Option<PathBuf>,
}

impl PressConfig {
    /// Load config from a specific file path.
    ///
    /// Unlike a per-user settings file, an explicitly named file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Builds the effective config: defaults, then the optional file, then overrides.
    pub fn resolve(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Replaces fields for which an override was supplied.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(pdf_path) = overrides.pdf_path {
            self.pdf_path = pdf_path;
        }
        if let Some(tables_dir) = overrides.tables_dir {
            self.tables_dir = tables_dir;
        }
    }

    pub fn validate(&self) -> Result<(), PressError> {
        if self.pdf_path.as_os_str().is_empty() {
            return Err(PressError::Config("pdf_path is empty".into()));
        }
        if self.tables_dir.as_os_str().is_empty() {
            return Err(PressError::Config("tables_dir is empty".into()));
        }
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(PressError::LogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = PressConfig::default();
        assert_eq!(config.pdf_path, PathBuf::from(DEFAULT_PDF_PATH));
        assert_eq!(config.tables_dir, PathBuf::from(DEFAULT_TABLES_DIR));
        assert_eq!(config.log_level, "warn");
        assert!(config.log_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PressConfig = serde_json::from_str(r#"{"tables_dir": "elsewhere"}"#).unwrap();
        assert_eq!(config.tables_dir, PathBuf::from("elsewhere"));
        assert_eq!(config.pdf_path, PathBuf::from(DEFAULT_PDF_PATH));
    }

    #[test]
    fn test_load_written_config_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("press.json");

        let config = PressConfig {
            log_level: "debug".into(),
            log_dir: Some(tmp.path().join("logs")),
            ..PressConfig::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = PressConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = PressConfig::load_from_path(&tmp.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = PressConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("press.json");
        std::fs::write(&path, r#"{"pdf_path": "from_file.pdf"}"#).unwrap();

        let overrides = ConfigOverrides {
            pdf_path: Some(PathBuf::from("from_cli.pdf")),
            tables_dir: None,
        };
        let config = PressConfig::resolve(Some(&path), overrides).unwrap();
        assert_eq!(config.pdf_path, PathBuf::from("from_cli.pdf"));
        assert_eq!(config.tables_dir, PathBuf::from(DEFAULT_TABLES_DIR));
    }

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let config = PressConfig::resolve(None, ConfigOverrides::default()).unwrap();
        assert_eq!(config, PressConfig::default());
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let config = PressConfig {
            log_level: "chatty".into(),
            ..PressConfig::default()
        };
        assert!(matches!(config.validate(), Err(PressError::LogLevel(level)) if level == "chatty"));
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        let config = PressConfig {
            tables_dir: PathBuf::new(),
            ..PressConfig::default()
        };
        assert!(matches!(config.validate(), Err(PressError::Config(_))));
    }

    #[test]
    fn test_validate_accepts_uppercase_level() {
        let config = PressConfig {
            log_level: "DEBUG".into(),
            ..PressConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
