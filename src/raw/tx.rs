use serde::Deserialize;

use super::{RawAmount, RawHeader};
use crate::types::{NATIVE_ASSET_ID, OrderRole, TxType};

/// Pre-asset payment. Carries no asset, no fee asset and no attachment.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLegacySend {
    #[serde(flatten)]
    pub header: RawHeader,
    pub recipient: String,
    pub amount: RawAmount,
    pub fee: RawAmount,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIssue {
    #[serde(flatten)]
    pub header: RawHeader,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: RawAmount,
    pub decimals: u8,
    #[serde(default)]
    pub reissuable: bool,
    #[serde(default)]
    pub script: Option<String>,
    pub fee: RawAmount,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransfer {
    #[serde(flatten)]
    pub header: RawHeader,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default, alias = "feeAssetId")]
    pub fee_asset: Option<String>,
    pub recipient: String,
    pub amount: RawAmount,
    pub fee: RawAmount,
    /// Base58-encoded attachment bytes.
    #[serde(default)]
    pub attachment: String,
}

impl RawTransfer {
    /// Remap a legacy payment into a native-asset transfer.
    pub fn from_legacy(tx: RawLegacySend) -> Self {
        Self {
            header: RawHeader {
                type_code: TxType::Transfer.code(),
                ..tx.header
            },
            asset_id: Some(NATIVE_ASSET_ID.to_string()),
            fee_asset: Some(NATIVE_ASSET_ID.to_string()),
            recipient: tx.recipient,
            amount: tx.amount,
            fee: tx.fee,
            attachment: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReissue {
    #[serde(flatten)]
    pub header: RawHeader,
    #[serde(default)]
    pub asset_id: Option<String>,
    pub quantity: RawAmount,
    #[serde(default)]
    pub reissuable: bool,
    pub fee: RawAmount,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBurn {
    #[serde(flatten)]
    pub header: RawHeader,
    #[serde(default)]
    pub asset_id: Option<String>,
    pub amount: RawAmount,
    pub fee: RawAmount,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAssetPair {
    #[serde(default)]
    pub amount_asset: Option<String>,
    #[serde(default)]
    pub price_asset: Option<String>,
}

/// Order as embedded into an exchange transaction.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrder {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub sender_public_key: Option<String>,
    #[serde(default)]
    pub matcher_public_key: Option<String>,
    pub asset_pair: RawAssetPair,
    pub order_type: OrderRole,
    /// Price in matcher scale, see [`crate::num::Converter::matcher_price`].
    pub price: RawAmount,
    pub amount: RawAmount,
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub expiration: u64,
    pub matcher_fee: RawAmount,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub proofs: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExchange {
    #[serde(flatten)]
    pub header: RawHeader,
    pub order1: RawOrder,
    pub order2: RawOrder,
    pub price: RawAmount,
    pub amount: RawAmount,
    pub buy_matcher_fee: RawAmount,
    pub sell_matcher_fee: RawAmount,
    pub fee: RawAmount,
}

/// Lease, either as a transaction or embedded into a lease cancellation.
///
/// A lease transaction always carries its fee, see [`RawEmbeddedLease`] for
/// the embedded form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLease<F = RawAmount> {
    #[serde(flatten)]
    pub header: RawHeader,
    pub recipient: String,
    pub amount: RawAmount,
    pub fee: F,
    #[serde(default)]
    pub status: Option<String>,
}

/// Lease embedded into a lease cancellation, which may come without a fee.
pub type RawEmbeddedLease = RawLease<Option<RawAmount>>;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCancelLease {
    #[serde(flatten)]
    pub header: RawHeader,
    #[serde(default)]
    pub lease_id: String,
    pub lease: RawEmbeddedLease,
    pub fee: RawAmount,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCreateAlias {
    #[serde(flatten)]
    pub header: RawHeader,
    pub alias: String,
    pub fee: RawAmount,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMassTransferItem {
    pub recipient: String,
    pub amount: RawAmount,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMassTransfer {
    #[serde(flatten)]
    pub header: RawHeader,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub attachment: String,
    pub transfers: Vec<RawMassTransferItem>,
    pub total_amount: RawAmount,
    #[serde(default)]
    pub transfer_count: Option<u32>,
    pub fee: RawAmount,
}
