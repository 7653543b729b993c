// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ConvertError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_CREATED_AT: &str = "2025-07-01 00:00:00+00:00";
pub const DEFAULT_UPDATED_AT: &str = "2025-07-01 12:34:56+00:00";
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const DEFAULT_DB_QUERY_TIME: &str = "1.234";
pub const DEFAULT_ICON_SIZES: [u32; 9] = [32, 72, 96, 128, 144, 152, 192, 384, 512];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub records: RecordConfig,
    #[serde(default)]
    pub icons: IconConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Matched against the end of each file name, without the leading dot.
    pub extension: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("csv"),
            output_dir: PathBuf::from("json"),
            extension: "csv".to_string(),
        }
    }
}

/// Constant values stamped into every converted document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RecordConfig {
    pub created_at: String,
    pub updated_at: String,
    pub page_size: u32,
    pub db_query_time: String,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            created_at: DEFAULT_CREATED_AT.to_string(),
            updated_at: DEFAULT_UPDATED_AT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            db_query_time: DEFAULT_DB_QUERY_TIME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IconConfig {
    pub assets_dir: PathBuf,
    pub sizes: Vec<u32>,
    /// RGBA fill colour.
    pub color: [u8; 4],
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            sizes: DEFAULT_ICON_SIZES.to_vec(),
            color: [10, 132, 255, 255],
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("NOCODB_FIXTURES")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ConvertError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ConvertError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when it exists. Any load or validation failure falls
    /// back to the built-in defaults so a bad setting never stops a run.
    pub fn load_or_default(path: &Path) -> Self {
        let source = path.exists().then_some(path);
        if source.is_none() {
            debug!(
                "Config file {} not found, using default configuration",
                path.display()
            );
        }

        Self::load(source).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Self::default_config()
        })
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        let extension = self.paths.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(ConvertError::Config(
                "paths.extension must not be empty".to_string(),
            ));
        }

        if self.records.page_size == 0 {
            return Err(ConvertError::Config(
                "records.page_size must be greater than 0".to_string(),
            ));
        }

        if self.icons.sizes.is_empty() {
            return Err(ConvertError::Config(
                "icons.sizes must list at least one size".to_string(),
            ));
        }

        if self.icons.sizes.contains(&0) {
            return Err(ConvertError::Config(
                "icons.sizes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.paths.input_dir, PathBuf::from("csv"));
        assert_eq!(config.paths.output_dir, PathBuf::from("json"));
        assert_eq!(config.records.page_size, 50);
        assert_eq!(config.icons.sizes, DEFAULT_ICON_SIZES.to_vec());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            "[paths]\ninput_dir = \"exports\"\n\n[records]\ncreated_at = \"2024-01-01 00:00:00+00:00\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.paths.input_dir, PathBuf::from("exports"));
        assert_eq!(config.paths.output_dir, PathBuf::from("json"));
        assert_eq!(config.records.created_at, "2024-01-01 00:00:00+00:00");
        assert_eq!(config.records.updated_at, DEFAULT_UPDATED_AT);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[records]\npage_size = \"abc\"\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());

        let config = Config::load_or_default(&path);
        assert_eq!(config.records.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.paths.input_dir, PathBuf::from("csv"));
    }

    #[test]
    fn test_rejected_values_fall_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("zero.toml");
        fs::write(&path, "[records]\npage_size = 0\n").unwrap();

        let config = Config::load_or_default(&path);
        assert_eq!(config.records.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_or_default(&temp.path().join("absent.toml"));
        assert_eq!(config.records.created_at, DEFAULT_CREATED_AT);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default_config();
        config.records.page_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.paths.extension = ".".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.icons.sizes = vec![16, 0];
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.icons.sizes.clear();
        assert!(config.validate().is_err());
    }
}
