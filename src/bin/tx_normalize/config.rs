//! Configuration for the normalizer CLI.
//!
//! Configuration comes from two sources:
//! - Environment variables (via .env file or shell): asset descriptors source
//! - CLI arguments: input and parse options

use std::path::PathBuf;

use clap::Parser;
use tx_normalizer::{ParseOptions, normalize::ExchangeUnits};

/// Environment configuration, variables are prefixed with `TXN_`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct EnvConfig {
    /// JSON file with asset descriptors
    pub assets_file: Option<PathBuf>,

    /// Pretty-print the output
    #[serde(default)]
    pub pretty: bool,
}

impl EnvConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("TXN_").from_env()
    }
}

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(name = "tx_normalize")]
#[command(about = "Normalize raw node transactions into canonical JSON")]
pub struct CliConfig {
    /// JSON file with an array of raw transactions
    pub input: PathBuf,

    /// JSON file with asset descriptors, overrides TXN_ASSETS_FILE
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Transactions are pending (not yet in a block)
    #[arg(long)]
    pub unconfirmed: bool,

    /// Exchange prices, amounts and fees are decimal tokens
    #[arg(long)]
    pub token_amounts: bool,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
}

/// Resolved run configuration.
#[derive(Debug)]
pub struct RunConfig {
    pub input: PathBuf,
    pub assets_file: PathBuf,
    pub options: ParseOptions,
    pub pretty: bool,
}

impl CliConfig {
    /// Merge CLI arguments with the environment configuration.
    pub fn to_run_config(&self, env: &EnvConfig) -> Result<RunConfig, ConfigError> {
        let assets_file = self
            .assets
            .clone()
            .or_else(|| env.assets_file.clone())
            .ok_or(ConfigError::MissingAssetsFile)?;

        if assets_file == self.input {
            return Err(ConfigError::SameInputAndAssets);
        }

        let units = if self.token_amounts {
            ExchangeUnits::Tokens
        } else {
            ExchangeUnits::Coins
        };

        Ok(RunConfig {
            input: self.input.clone(),
            assets_file,
            options: ParseOptions::from(self.unconfirmed).with_exchange_units(units),
            pretty: self.pretty || env.pretty,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("asset descriptors file is not set, use --assets or TXN_ASSETS_FILE")]
    MissingAssetsFile,

    #[error("input and asset descriptors must be different files")]
    SameInputAndAssets,
}
