//! Batch entry point: resolve assets once, then normalize every transaction.

use tracing::{debug, warn};

use crate::{
    error::{NormalizeError, ResolveError},
    normalize::{ExchangeUnits, Normalizer},
    raw::RawTransaction,
    resolver::{self, AssetLookup},
    transaction::Transaction,
};

/// Options of a batch parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    is_unconfirmed: bool,
    exchange_units: ExchangeUnits,
}

impl ParseOptions {
    /// Batch of transactions already in blocks.
    pub fn confirmed() -> Self {
        Self::default()
    }

    /// Batch of pending transactions.
    pub fn unconfirmed() -> Self {
        Self {
            is_unconfirmed: true,
            ..Default::default()
        }
    }

    pub fn with_exchange_units(mut self, units: ExchangeUnits) -> Self {
        self.exchange_units = units;
        self
    }

    pub fn is_unconfirmed(&self) -> bool {
        self.is_unconfirmed
    }

    pub fn exchange_units(&self) -> ExchangeUnits {
        self.exchange_units
    }
}

impl From<bool> for ParseOptions {
    fn from(is_unconfirmed: bool) -> Self {
        if is_unconfirmed {
            Self::unconfirmed()
        } else {
            Self::confirmed()
        }
    }
}

/// Parse a batch of raw transactions.
///
/// Assets of the whole batch are resolved with a single lookup; a lookup
/// failure fails the batch. Transactions are then normalized one by one and
/// each gets its own result, in input order.
pub async fn parse_transactions<L: AssetLookup>(
    transactions: &[RawTransaction],
    lookup: &L,
    options: impl Into<ParseOptions>,
) -> Result<Vec<Result<Transaction, NormalizeError>>, ResolveError> {
    let options = options.into();
    let assets = resolver::resolve(transactions, lookup).await?;
    let normalizer = Normalizer::new(&assets, options.is_unconfirmed)
        .with_exchange_units(options.exchange_units);

    let parsed: Vec<_> = transactions
        .iter()
        .map(|tx| {
            normalizer.normalize(tx).inspect_err(|e| {
                warn!(id = tx.id().unwrap_or_default(), %e, "failed to normalize transaction");
            })
        })
        .collect();

    debug!(
        total = parsed.len(),
        failed = parsed.iter().filter(|r| r.is_err()).count(),
        "parsed transactions"
    );
    Ok(parsed)
}
