use crate::error::{Result, TrafficAppError};
use crate::global_variables::{
    CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE, DEFAULT_GRAPH_OUTPUT, DEFAULT_MAP_IMAGE,
    DEFAULT_MAP_OUTPUT, DEFAULT_VOLUME_SEED,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime settings for a session. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seed for the traffic volume column.
    pub volume_seed: u64,
    /// Seed for road condition and weather draws. `None` draws from OS entropy.
    pub category_seed: Option<u64>,
    /// CSV dataset used instead of the generator.
    pub data_file: Option<PathBuf>,
    pub map_image: PathBuf,
    pub graph_output: PathBuf,
    pub map_output: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            volume_seed: DEFAULT_VOLUME_SEED,
            category_seed: None,
            data_file: None,
            map_image: PathBuf::from(DEFAULT_MAP_IMAGE),
            graph_output: PathBuf::from(DEFAULT_GRAPH_OUTPUT),
            map_output: PathBuf::from(DEFAULT_MAP_OUTPUT),
        }
    }
}

impl AppConfig {
    /// Resolves the configuration for this process: the file named by
    /// `TRAFFIC_APP_CONFIG`, else `traffic_app.json` if it exists, else defaults.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            log::info!("Loading configuration from {} ({})", path, CONFIG_ENV_VAR);
            return Self::from_file(Path::new(&path));
        }
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            log::info!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
            return Self::from_file(default_path);
        }
        log::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| TrafficAppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| TrafficAppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
