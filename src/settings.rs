/// User settings
///
/// Read once at start-up from `settings.json` in the platform config
/// directory:
/// - Linux: ~/.config/artisan-market/settings.json
/// - macOS: ~/Library/Application Support/artisan-market/settings.json
/// - Windows: %APPDATA%\artisan-market\settings.json
///
/// Every field is optional; a missing file means defaults.
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::filter::SortBy;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("page_size must be at least 1")]
    InvalidPageSize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn theme(self) -> iced::Theme {
        match self {
            ThemePreference::Dark => iced::Theme::Dark,
            ThemePreference::Light => iced::Theme::Light,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemePreference,
    /// How many artworks "Load More" reveals at a time
    pub page_size: usize,
    /// Sort selected when the catalog opens
    pub default_sort: SortBy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Dark,
            page_size: 6,
            default_sort: SortBy::Newest,
        }
    }
}

impl Settings {
    /// Where the settings file is expected, if the platform has a config dir
    pub fn path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("artisan-market");
        path.push("settings.json");
        Some(path)
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        if settings.page_size == 0 {
            return Err(SettingsError::InvalidPageSize);
        }
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Load settings from `path`. A missing file yields the defaults.
pub async fn load(path: PathBuf) -> Result<Settings, SettingsError> {
    match tokio::fs::read_to_string(&path).await {
        Ok(json) => {
            log::debug!("Read settings from {}", path.display());
            Settings::from_json(&json)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No settings at {}, using defaults", path.display());
            Ok(Settings::default())
        }
        Err(source) => Err(SettingsError::Io { path, source }),
    }
}

/// Load from the platform location, falling back to defaults on any error
pub async fn load_or_default(path: Option<PathBuf>) -> Settings {
    let Some(path) = path else {
        log::warn!("Could not determine config directory, using default settings");
        return Settings::default();
    };

    load(path).await.unwrap_or_else(|e| {
        log::warn!("⚠️  Ignoring settings: {}", e);
        Settings::default()
    })
}

/// Human-readable location for the status line
pub fn describe(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<no config dir>".to_string(),
    }
}
