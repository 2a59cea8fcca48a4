use std::{cmp::Ordering, fmt, sync::Arc};

use fastnum::UD128;
use serde::{Serialize, ser::SerializeStruct};

use super::Asset;
use crate::{error::NormalizeError, num};

/// Amount of a specific asset.
///
/// Holds the integer amount in coins (the on-chain representation) next to
/// the asset descriptor; tokens are derived from the asset precision.
/// Arithmetic is done on coins and only between amounts of the same asset.
#[derive(Clone, derive_more::Debug, PartialEq)]
pub struct Money {
    #[debug("{coins}")]
    coins: UD128,
    asset: Arc<Asset>,
}

impl Money {
    pub fn from_coins(coins: UD128, asset: Arc<Asset>) -> Self {
        Self {
            coins: coins.rescale(0),
            asset,
        }
    }

    /// Amount from decimal tokens, truncated to the asset precision.
    ///
    /// `None` if the amount is too large to be held in coins.
    pub fn from_tokens(tokens: UD128, asset: Arc<Asset>) -> Option<Self> {
        let coins = asset.converter().to_coins(tokens)?;
        Some(Self { coins, asset })
    }

    /// Parse a string-encoded integer amount of coins.
    pub fn parse(field: &'static str, raw: &str, asset: &Arc<Asset>) -> Result<Self, NormalizeError> {
        Ok(Self::from_coins(num::parse_coins(field, raw)?, asset.clone()))
    }

    /// Parse a string-encoded decimal amount of tokens.
    pub fn parse_tokens(
        field: &'static str,
        raw: &str,
        asset: &Arc<Asset>,
    ) -> Result<Self, NormalizeError> {
        Self::from_tokens(num::parse_tokens(field, raw)?, asset.clone()).ok_or_else(|| {
            NormalizeError::MalformedNumericField {
                field,
                value: raw.to_string(),
            }
        })
    }

    pub fn coins(&self) -> UD128 {
        self.coins
    }

    pub fn tokens(&self) -> UD128 {
        self.asset.converter().from_coins(self.coins)
    }

    pub fn asset(&self) -> &Arc<Asset> {
        &self.asset
    }

    pub fn checked_add(&self, other: &Money) -> Result<Money, NormalizeError> {
        self.ensure_same_asset(other)?;
        Ok(Self {
            coins: self.coins + other.coins,
            asset: self.asset.clone(),
        })
    }

    pub fn checked_cmp(&self, other: &Money) -> Result<Ordering, NormalizeError> {
        self.ensure_same_asset(other)?;
        Ok(if self.coins < other.coins {
            Ordering::Less
        } else if self.coins > other.coins {
            Ordering::Greater
        } else {
            Ordering::Equal
        })
    }

    /// The smaller of two amounts, in this amount's asset.
    pub fn checked_min(&self, other: &Money) -> Result<Money, NormalizeError> {
        Ok(match self.checked_cmp(other)? {
            Ordering::Greater => Self {
                coins: other.coins,
                asset: self.asset.clone(),
            },
            _ => self.clone(),
        })
    }

    fn ensure_same_asset(&self, other: &Money) -> Result<(), NormalizeError> {
        if self.asset.id != other.asset.id {
            return Err(NormalizeError::AssetMismatch {
                expected: self.asset.id.clone(),
                actual: other.asset.id.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tokens(), self.asset.display_name())
    }
}

impl Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Money", 3)?;
        s.serialize_field("assetId", &self.asset.id)?;
        s.serialize_field("coins", &self.coins.to_string())?;
        s.serialize_field("tokens", &self.tokens().to_string())?;
        s.end()
    }
}
