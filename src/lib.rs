//! Blockchain transaction normalization SDK.
//!
//! # Overview
//!
//! Turns raw transactions, as served by node and matcher APIs, into canonical
//! strongly-typed transactions: amounts become [`types::Money`] bound to
//! resolved asset descriptors, recipients are parsed, attachments decoded and
//! exchange orders reconciled into buy/sell roles.
//!
//! Use [`parse::parse_transactions`] to process a batch: it resolves all
//! referenced assets with a single [`resolver::AssetLookup`] call and then
//! normalizes each transaction independently with [`normalize::Normalizer`].
//!
//! ```ignore
//! let txs: Vec<RawTransaction> = serde_json::from_slice(&body)?;
//! let lookup = CachedLookup::new(my_asset_service);
//! for result in parse_transactions(&txs, &lookup, ParseOptions::confirmed()).await? {
//!     match result {
//!         Ok(tx) => println!("{:?} fee {}", tx.id(), tx.fee().map(|f| f.to_string()).unwrap_or_default()),
//!         Err(e) => eprintln!("skipped: {e}"),
//!     }
//! }
//! ```
//!
//! # Limitations/follow-ups
//!
//! * Only transaction types up to mass transfer are normalized, newer ones
//!   (data, scripts, invocations) are passed through as JSON.
//!
//! # Testing
//!
//! [`testing`] module provides a small asset universe and builders of raw
//! transactions in wire format.

pub mod attachment;
pub mod error;
pub mod normalize;
pub mod num;
pub mod parse;
pub mod raw;
pub mod resolver;
pub mod testing;
pub mod transaction;
pub mod types;

pub use normalize::{Normalizer, normalize};
pub use parse::{ParseOptions, parse_transactions};
