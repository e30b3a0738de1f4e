use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILE: &str = "tip.ron";

/// Client settings, read from a RON file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Preview area in logical units.
    pub container_width: f64,
    pub container_height: f64,
    pub device_pixel_ratio: f64,
    /// Defaults for `start` when the user leaves fields out.
    pub points: u32,
    pub max_time_seconds: u32,
    pub max_size_bytes: u32,
    /// PNG written after every painted frame.
    pub snapshot_path: Option<PathBuf>,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            container_width: 720.0,
            container_height: 560.0,
            device_pixel_ratio: 1.0,
            points: 600,
            max_time_seconds: 60,
            max_size_bytes: 0,
            snapshot_path: None,
            log_destination: LogDestination::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn start_defaults(&self) -> StartDefaults {
        StartDefaults {
            points: self.points,
            max_time_seconds: self.max_time_seconds,
            max_size_bytes: self.max_size_bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartDefaults {
    pub points: u32,
    pub max_time_seconds: u32,
    pub max_size_bytes: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Loads the configuration. A missing file is not an error.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
