//! Configuration loading for numvault.
//!
//! The config file lives at `~/.numvault/config.toml`. Every section is
//! optional; raw structs here resolve into [`RoomSettings`] and a
//! [`Curriculum`] at the parse boundary.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use numvault_types::{Curriculum, DEFAULT_TRANSITION, RoomSettings};

#[derive(Debug, Default, Deserialize)]
pub struct NumvaultConfig {
    pub room: Option<RoomConfig>,
    pub curriculum: Option<CurriculumConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoomConfig {
    /// Borrow fade length in milliseconds.
    pub transition_ms: Option<u64>,
    /// Settle borrows on the next frame instead of fading.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Use ASCII-only glyphs for markers and arrows.
    #[serde(default)]
    pub ascii_only: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct CurriculumConfig {
    /// Level file replacing the built-in curriculum. `~/` is expanded.
    pub path: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl NumvaultConfig {
    /// Load the config from its default location.
    ///
    /// `Ok(None)` means there is no home directory or no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve the `[room]` section, filling gaps with defaults.
    #[must_use]
    pub fn room_settings(&self) -> RoomSettings {
        let Some(room) = self.room.as_ref() else {
            return RoomSettings::default();
        };
        let transition = room
            .transition_ms
            .map_or(DEFAULT_TRANSITION, Duration::from_millis);
        RoomSettings::new(transition, room.reduced_motion, room.ascii_only)
    }

    /// Path of a custom curriculum file, if configured.
    #[must_use]
    pub fn curriculum_path(&self) -> Option<PathBuf> {
        let raw = self.curriculum.as_ref()?.path.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        Some(expand_home(raw))
    }
}

/// Parse a curriculum from TOML text (`[[levels]]` tables).
pub fn parse_curriculum(content: &str) -> Result<Curriculum, toml::de::Error> {
    toml::from_str(content)
}

pub fn load_curriculum(path: &Path) -> Result<Curriculum, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let curriculum = parse_curriculum(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), levels = curriculum.len(), "Curriculum loaded");
    Ok(curriculum)
}

fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(raw)
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// `~/.numvault`, the parent of the config file and the log directory.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".numvault"))
}
