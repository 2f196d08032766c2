//! Persistent configuration.
//!
//! A small TOML file at `<config dir>/claude-rewind/config.toml` holding
//! defaults that would otherwise be passed as flags on every run. Every field
//! is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RewindError};
use crate::util::atomic_write;

/// User configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default output directory for generated reports.
    pub output_dir: Option<PathBuf>,

    /// Override for the Claude Code data directory.
    pub claude_dir: Option<PathBuf>,

    /// Enable colored terminal output.
    pub color: Option<bool>,
}

impl Config {
    /// Default config file path (`<config dir>/claude-rewind/config.toml`).
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            RewindError::config("Could not determine the user configuration directory")
        })?;
        Ok(base.join("claude-rewind").join("config.toml"))
    }

    /// Load from a path. A missing file yields the default config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            RewindError::io(format!("Failed to read config: {}", path.display()), e)
        })?;

        toml::from_str(&content).map_err(|e| {
            RewindError::config(format!("Invalid config at {}: {e}", path.display()))
        })
    }

    /// Load from the default path.
    pub fn load_default() -> Result<Self> {
        Self::load(Self::default_path()?)
    }

    /// Save to a path, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RewindError::config(format!("Failed to serialize config: {e}")))?;
        atomic_write(path, content.as_bytes())
    }
}
