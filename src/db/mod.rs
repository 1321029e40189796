use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::ConfigError;
use crate::models::hotel::Hotel;

pub const HOTELS_FILE: &str = "Hotels.json";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed hotel source. The file is read again on every `load`.
#[derive(Debug, Clone)]
pub struct HotelStore {
    path: PathBuf,
}

impl HotelStore {
    pub fn new(base_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let base_path = base_path.as_ref();
        if base_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingDataPath);
        }

        Ok(Self {
            path: base_path.join(HOTELS_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every hotel in the file. Blank files yield an empty list.
    pub async fn load(&self) -> Result<Vec<Hotel>, SourceError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        let hotels = parse_hotels(&json).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })?;

        log::debug!("Loaded {} hotels from {}", hotels.len(), self.path.display());
        Ok(hotels)
    }
}

/// Parses a JSON array of hotels, matching field names case-insensitively.
pub fn parse_hotels(json: &str) -> Result<Vec<Hotel>, serde_json::Error> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(json)?;
    serde_json::from_value(normalize_keys(value))
}

// Lower-cases the keys of each top-level record and drops null values so
// they take the field default. Every field of `Hotel` is a single word, so
// its camelCase name is already lower case.
fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Object(fields) => Value::Object(
                        fields
                            .into_iter()
                            .filter(|(_, v)| !v.is_null())
                            .map(|(key, v)| (key.to_lowercase(), v))
                            .collect::<Map<String, Value>>(),
                    ),
                    other => other,
                })
                .collect(),
        ),
        other => other,
    }
}
