//! Application settings - persisted user preferences.
//!
//! Stored as TOML in the platform config directory. Loaded at startup and
//! saved when the theme is changed from the header. A missing file means
//! defaults; an invalid one is reported and replaced by defaults in memory.
//! The thread itself is never written to disk.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::ThemeMode;

/// Errors reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Ok(toml::from_str(&content)?)
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_err)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "CommentTree", "comment-tree")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Display settings for the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Theme mode (light/dark/system).
    pub theme_mode: ThemeMode,
    /// Horizontal offset per reply level, in pixels.
    pub indent: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            indent: 24.0,
        }
    }
}

/// Logging settings. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `info` or `thread_core=debug`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
