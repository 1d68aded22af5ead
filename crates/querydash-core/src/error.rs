//! Error types for querydash-core

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for querydash operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Config Errors
    // ===================
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse TOML in {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // ===================
    // Routing Errors
    // ===================
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidRoutePattern { pattern: String, reason: String },

    #[error("Redirect loop while resolving {path} ({hops} hops)")]
    RedirectLoop { path: String, hops: usize },
}

pub type Result<T> = std::result::Result<T, CoreError>;
