//! Global taqweem configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{TaqweemError, TaqweemResult};
use crate::store::EventStore;

static DEFAULT_SITE_URL: &str = "https://ksa-school-calendar.app/";

fn default_site_url() -> String {
    DEFAULT_SITE_URL.to_string()
}

/// Configuration at ~/.config/taqweem/config.toml
///
/// Every key can be overridden with a `TAQWEEM_`-prefixed environment
/// variable, e.g. `TAQWEEM_SITE_URL`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TaqweemConfig {
    /// Replacement dataset; the bundled events are used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Base URL that share links point at.
    #[serde(default = "default_site_url")]
    pub site_url: String,
}

impl Default for TaqweemConfig {
    fn default() -> Self {
        TaqweemConfig {
            data_file: None,
            site_url: default_site_url(),
        }
    }
}

impl TaqweemConfig {
    /// ~/.config/taqweem
    pub fn config_dir() -> TaqweemResult<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| TaqweemError::Config("Could not determine config directory".into()))?
            .join("taqweem");
        Ok(dir)
    }

    pub fn config_path() -> TaqweemResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the global config, writing a commented default on first run.
    pub fn load() -> TaqweemResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit file (which may be missing) plus the environment.
    pub fn load_from(path: &Path) -> TaqweemResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("TAQWEEM"))
            .build()
            .map_err(|e| TaqweemError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TaqweemError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TaqweemResult<()> {
        let contents = format!(
            "\
# taqweem configuration

# Base URL used in share links:
# site_url = \"{}\"

# Use your own events file instead of the bundled calendar:
# data_file = \"~/calendar/events.json\"
",
            DEFAULT_SITE_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TaqweemError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TaqweemError::Config(format!("Could not write config file: {e}")))?;

        tracing::info!(path = %path.display(), "created default config");
        Ok(())
    }

    /// `data_file` with `~` expanded.
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_file.as_ref().map(|file| {
            let expanded = shellexpand::tilde(&file.to_string_lossy()).into_owned();
            PathBuf::from(expanded)
        })
    }

    /// The configured dataset, or the bundled one.
    pub fn load_store(&self) -> TaqweemResult<EventStore> {
        match self.data_path() {
            Some(path) => EventStore::from_path(&path),
            None => EventStore::bundled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TaqweemConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_default_file_is_all_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        TaqweemConfig::create_default_config(&path).unwrap();

        let config = TaqweemConfig::load_from(&path).unwrap();
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert!(!config.load_store().unwrap().is_empty());
    }

    #[test]
    fn test_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("events.json");
        std::fs::write(
            &data,
            r#"[{"id": "x", "year": 1460, "name": "X", "type": "extra", "hijriStart": "1/1/1460",
                 "gregorianStart": "2038-01-01T00:00:00+03:00",
                 "gregorianEnd": "2038-01-01T00:00:00+03:00"}]"#,
        )
        .unwrap();

        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            format!(
                "site_url = \"https://school.example/\"\ndata_file = \"{}\"\n",
                data.display()
            ),
        )
        .unwrap();

        let config = TaqweemConfig::load_from(&path).unwrap();
        assert_eq!(config.site_url, "https://school.example/");

        let store = config.load_store().unwrap();
        assert_eq!(store.years(), &[1460]);
    }

    #[test]
    fn test_data_path_expands_tilde() {
        let config = TaqweemConfig {
            data_file: Some(PathBuf::from("~/events.json")),
            ..Default::default()
        };
        let path = config.data_path().unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("events.json"));
    }
}
