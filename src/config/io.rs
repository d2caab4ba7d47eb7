//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use super::Config;
use crate::store::write_locked;

impl Config {
    /// Get the global config directory path (~/.aura/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".aura")
    }

    /// Get the global config file path (~/.aura/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Write the config atomically under a lock, creating the directory
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        write_locked(path, content.as_bytes())
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Load global configuration from ~/.aura/config.toml.
    /// If no config exists, writes one with defaults first.
    pub fn load() -> Result<Self> {
        let global_path = Self::global_config_path();

        if !global_path.exists() {
            let config = Self::default();
            config.save_to_file(&global_path)?;
            info!("Created default config at {}", global_path.display());
            return Ok(config);
        }

        Self::from_file(&global_path)
    }

    /// Load from an explicit path, or the global config when none is given
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }
}
