//! Configuration sections

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;

/// API server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Base URL of the leaderboard API
    /// Default: http://127.0.0.1:5000
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Root of the static assets (badges, videos).
    /// Empty means `{base_url}/static`.
    #[serde(default)]
    pub assets_url: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            assets_url: String::new(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_read_timeout_secs() -> u64 {
    30
}

/// Poll loop settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSettings {
    /// Seconds between two refreshes of profile and leaderboard
    #[serde(default = "default_poll_interval_secs")]
    pub interval_secs: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_poll_interval_secs(),
        }
    }
}

fn default_poll_interval_secs() -> u64 {
    30
}

/// Historical leaderboard settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySettings {
    /// First year offered in the year selector
    #[serde(default = "default_epoch_year")]
    pub epoch_year: i32,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            epoch_year: default_epoch_year(),
        }
    }
}

fn default_epoch_year() -> i32 {
    2025
}

/// Milestone video playback
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSettings {
    /// Player command (e.g. "mpv"). Empty uses the platform opener.
    ///
    /// With a dedicated player the overlay closes when the player exits;
    /// with the platform opener it stays until dismissed.
    #[serde(default)]
    pub player: String,

    /// Extra arguments placed before the video URL
    #[serde(default)]
    pub player_args: Vec<String>,
}

/// Client state location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Path of the client state file. Empty means `~/.aura/state.json`.
    #[serde(default)]
    pub state_file: String,
}

impl StorageSettings {
    pub fn state_file(&self) -> Option<PathBuf> {
        let trimmed = self.state_file.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
