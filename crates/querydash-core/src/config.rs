//! Configuration file for the querydash server
//!
//! Loaded from `<config_dir>/querydash/config.toml` unless a path is given.
//! Every field has a default, so an absent default file is not an error.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
}

/// Settings for hosting the compiled frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    pub port: u16,
    /// Directory holding the trunk build output (index.html + assets)
    pub dist_dir: PathBuf,
    /// Permissive CORS for a frontend dev server on another port
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3333,
            dist_dir: PathBuf::from("crates/querydash-web/dist"),
            cors: true,
        }
    }
}

impl Config {
    /// Default location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("querydash").join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if explicit {
                return Err(CoreError::ConfigNotFound { path });
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| CoreError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&content, &path)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(CoreError::InvalidConfig {
                message: "server.host must not be empty".to_string(),
            });
        }
        if self.server.port == 0 {
            return Err(CoreError::InvalidConfig {
                message: "server.port must be between 1 and 65535".to_string(),
            });
        }
        Ok(())
    }

    /// Address string suitable for binding, e.g. `127.0.0.1:3333`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
