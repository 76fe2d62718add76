//! Persisted application settings.
//!
//! Settings live in `config.toml` inside the application directory. The file
//! is optional: every field has a default, and the defaults reproduce the
//! fixed model path and download name the app ships with.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Model artifact loaded at startup unless the settings override it.
pub const DEFAULT_MODEL_PATH: &str = "Champion_model.json";
/// Column that receives batch predictions.
pub const DEFAULT_PREDICTION_COLUMN: &str = "PredictedClass";
/// Suggested filename for the downloadable batch result.
pub const DEFAULT_DOWNLOAD_FILE_NAME: &str = "predicted_classes.csv";
/// Rows shown in the uploaded and augmented table previews.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;
const MAX_PREVIEW_ROWS: usize = 100;

/// Settings loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub batch: BatchSettings,
}

/// Where the classifier artifact is read from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelSettings {
    /// Path to the model artifact, relative paths resolve against the working directory.
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

/// Batch prediction presentation and export options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchSettings {
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
    #[serde(default = "default_prediction_column")]
    pub prediction_column: String,
    #[serde(default = "default_download_file_name")]
    pub download_file_name: String,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            preview_rows: default_preview_rows(),
            prediction_column: default_prediction_column(),
            download_file_name: default_download_file_name(),
        }
    }
}

impl AppSettings {
    fn normalized(mut self) -> Self {
        self.batch.preview_rows = self.batch.preview_rows.clamp(1, MAX_PREVIEW_ROWS);
        if self.batch.prediction_column.trim().is_empty() {
            self.batch.prediction_column = default_prediction_column();
        }
        if self.batch.download_file_name.trim().is_empty() {
            self.batch.download_file_name = default_download_file_name();
        }
        self
    }
}

/// Errors that can occur while resolving or reading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be prepared.
    #[error("Config directory unavailable: {0}")]
    Directory(#[from] app_dirs::AppDirError),
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from the application directory, returning defaults if missing.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    load_from_path(&config_path()?)
}

/// Load settings from a specific file, returning defaults if it does not exist.
pub fn load_from_path(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file; using defaults");
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppSettings>(&text)
        .map(AppSettings::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}

fn default_preview_rows() -> usize {
    DEFAULT_PREVIEW_ROWS
}

fn default_prediction_column() -> String {
    DEFAULT_PREDICTION_COLUMN.to_string()
}

fn default_download_file_name() -> String {
    DEFAULT_DOWNLOAD_FILE_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_dirs::test_support::OverrideGuard;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_from_path(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.model.path, PathBuf::from("Champion_model.json"));
        assert_eq!(settings.batch.download_file_name, "predicted_classes.csv");
        assert_eq!(settings.batch.prediction_column, "PredictedClass");
        assert_eq!(settings.batch.preview_rows, 5);
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[model]\npath = \"models/custom.json\"\n").unwrap();

        let settings = load_from_path(&path).unwrap();

        assert_eq!(settings.model.path, PathBuf::from("models/custom.json"));
        assert_eq!(settings.batch, BatchSettings::default());
    }

    #[test]
    fn preview_rows_are_clamped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[batch]\npreview_rows = 0\n").unwrap();
        assert_eq!(load_from_path(&path).unwrap().batch.preview_rows, 1);

        std::fs::write(&path, "[batch]\npreview_rows = 5000\n").unwrap();
        assert_eq!(load_from_path(&path).unwrap().batch.preview_rows, 100);
    }

    #[test]
    fn invalid_toml_is_reported_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[batch\npreview_rows = ").unwrap();

        let err = load_from_path(&path).unwrap_err();

        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn load_or_default_reads_app_dir() {
        let base = tempdir().unwrap();
        let _guard = OverrideGuard::set(base.path().to_path_buf());
        let path = config_path().unwrap();
        std::fs::write(&path, "[batch]\nprediction_column = \"Label\"\n").unwrap();

        let settings = load_or_default().unwrap();

        assert_eq!(settings.batch.prediction_column, "Label");
    }
}
