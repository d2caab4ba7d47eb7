//! Configuration loading and management

mod io;
mod settings;

pub use settings::{HistorySettings, PollSettings, ServerSettings, StorageSettings, VideoSettings};

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, AssetUrls};

/// Main configuration structure (`~/.aura/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub poll: PollSettings,

    #[serde(default)]
    pub history: HistorySettings,

    #[serde(default)]
    pub video: VideoSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

impl Config {
    /// HTTP client for the configured server
    pub fn api_client(&self) -> ApiClient {
        ApiClient::with_timeouts(
            &self.server.base_url,
            Duration::from_secs(self.server.connect_timeout_secs.max(1)),
            Duration::from_secs(self.server.read_timeout_secs.max(1)),
        )
    }

    /// Static asset root, derived from the base URL unless set explicitly
    pub fn asset_urls(&self) -> AssetUrls {
        let assets = self.server.assets_url.trim();
        if assets.is_empty() {
            AssetUrls::new(format!(
                "{}/static",
                self.server.base_url.trim_end_matches('/')
            ))
        } else {
            AssetUrls::new(assets)
        }
    }

    /// Poll interval, never below one second
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll.interval_secs.max(1))
    }

    /// Client state file location
    pub fn state_path(&self) -> PathBuf {
        self.storage
            .state_file()
            .unwrap_or_else(|| Self::global_config_dir().join("state.json"))
    }
}
