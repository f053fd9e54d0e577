//! Deploy-time settings read from `config.toml`.
//!
//! Every key is optional. A missing file means the built-in defaults, which
//! point at the production spreadsheet.

mod error;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

pub use error::ConfigError;

/// Spreadsheet receiving inspection rows.
pub const DEFAULT_SPREADSHEET_ID: &str = "1cG1KTzTUTf6A_DhWC6NIwRdAdLjaCTUYr9VgS4X03fU";
/// Worksheet (tab) inside the spreadsheet.
pub const DEFAULT_WORKSHEET: &str = "Base";
/// Service-account key file, relative to the working directory.
pub const DEFAULT_CREDENTIALS_PATH: &str = "google_credentials.json";
/// Google Sheets API root.
pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";

/// Application directory name under the platform config and data dirs.
pub const APP_DIR: &str = "inspection-form";

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub spreadsheet_id: String,
    pub worksheet: String,
    pub credentials_path: PathBuf,
    pub api_base: String,
    /// Per-request timeout for the Sheets and token calls. Unset means none.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
            worksheet: DEFAULT_WORKSHEET.to_string(),
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Loads `<config_dir>/inspection-form/config.toml`, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no platform config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            worksheet = %config.worksheet,
            "loaded config"
        );
        Ok(config)
    }

    /// The configured request timeout, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Platform location of `config.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn defaults_point_at_production_sheet() {
        let config = Config::default();
        assert_eq!(config.spreadsheet_id, DEFAULT_SPREADSHEET_ID);
        assert_eq!(config.worksheet, "Base");
        assert_eq!(
            config.credentials_path,
            PathBuf::from("google_credentials.json")
        );
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_overrides_named_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "worksheet = \"Teste\"\nrequest_timeout_secs = 30\n",
        )
        .unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.worksheet, "Teste");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.spreadsheet_id, DEFAULT_SPREADSHEET_ID);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "worksheets = \"Base\"\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "worksheet = ").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        if let Some(path) = default_path() {
            assert!(path.ends_with("inspection-form/config.toml"));
        }
    }
}
