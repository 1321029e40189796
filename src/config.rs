//! Startup configuration read from the environment.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_IMAGE_URL: &str = "assets/hotels/";
pub const DEFAULT_RESOURCES_DIR: &str = "Resources";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("HOTEL_DATA_PATH is not configured")]
    MissingDataPath,

    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding `Hotels.json`.
    pub data_path: PathBuf,
    /// Prefix prepended to every image path in a response.
    pub image_url: String,
    pub resources_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Reads settings from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = lookup("HOTEL_DATA_PATH")
            .filter(|p| !p.trim().is_empty())
            .ok_or(ConfigError::MissingDataPath)?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            data_path: PathBuf::from(data_path),
            image_url: lookup("HOTEL_IMAGE_URL").unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            resources_dir: lookup("HOTEL_RESOURCES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCES_DIR)),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }
}
