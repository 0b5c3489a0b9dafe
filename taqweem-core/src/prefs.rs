//! Persisted user preferences: the selected year and the theme.
//!
//! Stored as a small TOML file next to the config. Writes simply replace
//! the file; there is only ever one writer.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::TaqweemConfig;
use crate::error::{TaqweemError, TaqweemResult};
use crate::store::EventStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = TaqweemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(TaqweemError::InvalidTheme(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_year: Option<i32>,

    #[serde(default)]
    pub theme: Theme,
}

impl Preferences {
    /// ~/.config/taqweem/prefs.toml
    pub fn path() -> TaqweemResult<PathBuf> {
        Ok(TaqweemConfig::config_dir()?.join("prefs.toml"))
    }

    /// Read preferences, falling back to defaults when the file is missing
    /// or unreadable.
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read preferences");
                return Self::default();
            }
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed preferences");
            Self::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> TaqweemResult<()> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| TaqweemError::Serialization(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// The stored year if the store still has it, otherwise the earliest year.
    pub fn resolve_year(&self, store: &EventStore) -> Option<i32> {
        self.selected_year
            .filter(|year| store.has_year(*year))
            .or_else(|| store.earliest_year())
    }
}
