use crate::error::{Result, WitchError};
use crate::model::DEFAULT_RECENT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SHARE_URL: &str = "https://witchweb3.com";

/// Configuration for witchterm, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WitchConfig {
    /// Candidate `cards.json` files, tried in order
    #[serde(default = "default_catalog_paths")]
    pub catalog_paths: Vec<String>,

    /// Page reference handed to `share`
    #[serde(default = "default_share_url")]
    pub share_url: String,

    #[serde(default = "default_prompt_user")]
    pub prompt_user: String,

    #[serde(default = "default_prompt_host")]
    pub prompt_host: String,

    /// Rows printed by `history`
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_catalog_paths() -> Vec<String> {
    vec!["cards/cards.json".to_string(), "./cards.json".to_string()]
}

fn default_share_url() -> String {
    DEFAULT_SHARE_URL.to_string()
}

fn default_prompt_user() -> String {
    "witch".to_string()
}

fn default_prompt_host() -> String {
    "web3".to_string()
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT
}

impl Default for WitchConfig {
    fn default() -> Self {
        Self {
            catalog_paths: default_catalog_paths(),
            share_url: default_share_url(),
            prompt_user: default_prompt_user(),
            prompt_host: default_prompt_host(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl WitchConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: WitchConfig = serde_json::from_str(&content).map_err(|e| {
            WitchError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }
}
