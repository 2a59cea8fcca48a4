//! Error types for the normalizer CLI.

use tx_normalizer::error::{LookupError, ResolveError};

use crate::config::ConfigError;

/// Main error type for the normalizer CLI.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Environment configuration error: {0}")]
    EnvConfig(#[from] envy::Error),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load asset descriptors: {0}")]
    Assets(#[from] LookupError),

    #[error("Failed to resolve assets: {0}")]
    Resolve(#[from] ResolveError),
}

pub type Result<T> = std::result::Result<T, Error>;
