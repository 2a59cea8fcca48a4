//! Transaction normalizer CLI.
//!
//! Reads a JSON array of raw transactions and a JSON array of asset
//! descriptors, prints canonical transactions as a JSON array. Items that
//! fail to decode or normalize are printed as `{"error": "..."}` in place.

mod config;
mod error;

use std::process::exit;

use clap::Parser;
use serde::Serialize;
use tracing::{error, info, warn};
use tx_normalizer::{
    parse_transactions, raw::RawTransaction, resolver::StaticAssets, transaction::Transaction,
};

use config::{CliConfig, EnvConfig, RunConfig};

/// Per-item output.
#[derive(Serialize)]
#[serde(untagged)]
enum Outcome {
    Parsed(Transaction),
    Failed { error: String },
}

#[tokio::main]
async fn main() {
    // Load .env file
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Warning: Failed to load .env file: {}", e);
    }

    // Parse environment configuration
    let env_config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to parse environment configuration: {}", e);
            exit(1);
        }
    };

    // Parse CLI arguments
    let cli_config = CliConfig::parse();

    let run_config = match cli_config.to_run_config(&env_config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            exit(1);
        }
    };

    // Set up logging
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(run_config).await {
        error!(%e, "Normalization failed");
        exit(1);
    }
}

async fn run(config: RunConfig) -> error::Result<()> {
    let lookup = StaticAssets::load(&config.assets_file).await?;
    info!(assets = lookup.len(), file = %config.assets_file.display(), "loaded asset descriptors");

    let input: Vec<serde_json::Value> = serde_json::from_slice(&tokio::fs::read(&config.input).await?)?;

    // Items that do not decode keep their slot in the output
    let mut outcomes: Vec<Option<Outcome>> = Vec::with_capacity(input.len());
    let mut decoded = Vec::with_capacity(input.len());
    for (index, value) in input.into_iter().enumerate() {
        match RawTransaction::from_value(value) {
            Ok(tx) => {
                decoded.push(tx);
                outcomes.push(None);
            }
            Err(e) => {
                warn!(index, %e, "failed to decode transaction");
                outcomes.push(Some(Outcome::Failed {
                    error: format!("decode: {e}"),
                }));
            }
        }
    }

    let mut parsed = parse_transactions(&decoded, &lookup, config.options)
        .await?
        .into_iter();
    let outcomes: Vec<Outcome> = outcomes
        .into_iter()
        .filter_map(|slot| {
            slot.or_else(|| {
                parsed.next().map(|result| match result {
                    Ok(tx) => Outcome::Parsed(tx),
                    Err(e) => Outcome::Failed {
                        error: e.to_string(),
                    },
                })
            })
        })
        .collect();

    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::Failed { .. }))
        .count();
    info!(total = outcomes.len(), failed, "normalized transactions");

    let output = if config.pretty {
        serde_json::to_string_pretty(&outcomes)?
    } else {
        serde_json::to_string(&outcomes)?
    };
    println!("{output}");

    Ok(())
}
