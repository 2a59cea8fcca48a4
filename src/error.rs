use crate::types::{AssetId, OrderRole};

/// Error normalizing a single transaction.
///
/// Reported per transaction; a batch keeps going when one of its
/// transactions fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("missing asset descriptor: {0}")]
    MissingAssetDescriptor(AssetId),

    #[error("malformed numeric field `{field}`: {value:?}")]
    MalformedNumericField { field: &'static str, value: String },

    #[error("exchange orders carry the same role: {0}")]
    TaggedOrderRoleConflict(OrderRole),

    #[error("asset mismatch, expected: {expected}, got: {actual}")]
    AssetMismatch { expected: AssetId, actual: AssetId },
}

/// Error returned by an [`crate::resolver::AssetLookup`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("asset service unavailable: {0}")]
    Unavailable(String),

    #[error("malformed asset descriptor: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("lookup error: {0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Error resolving assets of a transaction batch.
///
/// The whole batch fails, no partial mapping is produced.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("asset lookup failed: {0}")]
    Lookup(#[from] LookupError),
}
