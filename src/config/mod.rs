// Configuration loading and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::db::router::HashKind;
use crate::db::storage::DEFAULT_SHARD_COUNT;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to resolve absolute config filepath {path:?}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("read config yaml file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unmarshal yaml from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
    pub logs: Option<Logs>,
}

/// Construction parameters of a sharded map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MapConfig {
    /// Number of shards; zero or absent means the default of 64.
    pub shards: Option<usize>,
    pub hasher: Option<HashKind>,
    /// Initial capacity of each shard's table.
    #[serde(rename = "shard_capacity")]
    pub shard_capacity: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Logs {
    pub level: Option<String>,
}

impl Config {
    /// Loads configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        // Resolve absolute path
        let abs_path = path.canonicalize().map_err(|source| ConfigError::Resolve {
            path: path.to_path_buf(),
            source,
        })?;

        // Read file
        let data = std::fs::read_to_string(&abs_path).map_err(|source| ConfigError::Read {
            path: abs_path.clone(),
            source,
        })?;

        Self::parse(&data, &abs_path.display().to_string())
    }

    /// Parses configuration from a YAML document.
    pub fn from_yaml(data: &str) -> Result<Self, ConfigError> {
        Self::parse(data, "<inline>")
    }

    fn parse(data: &str, origin: &str) -> Result<Self, ConfigError> {
        let mut cfg: Config = serde_yaml::from_str(data).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })?;

        // Zero shards means "use the default".
        if cfg.map.shards == Some(0) {
            cfg.map.shards = Some(DEFAULT_SHARD_COUNT);
        }

        Ok(cfg)
    }

    pub fn logs(&self) -> Option<&Logs> {
        self.logs.as_ref()
    }

    /// Log level, falling back to "info".
    pub fn log_level(&self) -> &str {
        self.logs
            .as_ref()
            .and_then(|logs| logs.level.as_deref())
            .unwrap_or("info")
    }
}

// Test config is always available for integration tests
mod test_config;
#[allow(dead_code)]
pub use test_config::new_test_config;
