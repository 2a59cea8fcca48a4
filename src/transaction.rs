//! Canonical, normalized transactions.
//!
//! Every amount and fee is a [`Money`] bound to its resolved asset, recipients
//! are parsed into [`Recipient`] and each transaction records whether it came
//! from an unconfirmed batch.

use serde::Serialize;

use crate::{
    attachment::Attachment,
    raw::RawHeader,
    types::{AssetId, AssetPair, Money, OrderRole, Recipient, TxType},
};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Transaction {
    Issue(Issue),
    /// Transfers, including remapped legacy payments.
    Transfer(Transfer),
    Reissue(Reissue),
    Burn(Burn),
    Exchange(Box<Exchange>),
    Lease(Lease),
    CancelLease(CancelLease),
    CreateAlias(CreateAlias),
    MassTransfer(MassTransfer),
    /// Unrecognized type, exactly as received.
    Unknown(serde_json::Value),
}

impl Transaction {
    fn header(&self) -> Option<&RawHeader> {
        Some(match self {
            Self::Issue(tx) => &tx.header,
            Self::Transfer(tx) => &tx.header,
            Self::Reissue(tx) => &tx.header,
            Self::Burn(tx) => &tx.header,
            Self::Exchange(tx) => &tx.header,
            Self::Lease(tx) => &tx.header,
            Self::CancelLease(tx) => &tx.header,
            Self::CreateAlias(tx) => &tx.header,
            Self::MassTransfer(tx) => &tx.header,
            Self::Unknown(_) => return None,
        })
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Unknown(value) => value.get("id").and_then(serde_json::Value::as_str),
            _ => self.header().map(|h| h.id.as_str()),
        }
    }

    pub fn tx_type(&self) -> Option<TxType> {
        self.header()
            .and_then(|h| TxType::from_code(h.type_code as u64))
    }

    pub fn timestamp(&self) -> Option<u64> {
        self.header().map(|h| h.timestamp)
    }

    /// Fee paid by the sender; `None` for unrecognized types.
    pub fn fee(&self) -> Option<&Money> {
        Some(match self {
            Self::Issue(tx) => &tx.fee,
            Self::Transfer(tx) => &tx.fee,
            Self::Reissue(tx) => &tx.fee,
            Self::Burn(tx) => &tx.fee,
            Self::Exchange(tx) => &tx.fee,
            Self::Lease(tx) => return tx.fee.as_ref(),
            Self::CancelLease(tx) => &tx.fee,
            Self::CreateAlias(tx) => &tx.fee,
            Self::MassTransfer(tx) => &tx.fee,
            Self::Unknown(_) => return None,
        })
    }

    pub fn is_unconfirmed(&self) -> Option<bool> {
        Some(match self {
            Self::Issue(tx) => tx.is_unconfirmed,
            Self::Transfer(tx) => tx.is_unconfirmed,
            Self::Reissue(tx) => tx.is_unconfirmed,
            Self::Burn(tx) => tx.is_unconfirmed,
            Self::Exchange(tx) => tx.is_unconfirmed,
            Self::Lease(tx) => tx.is_unconfirmed,
            Self::CancelLease(tx) => tx.is_unconfirmed,
            Self::CreateAlias(tx) => tx.is_unconfirmed,
            Self::MassTransfer(tx) => tx.is_unconfirmed,
            Self::Unknown(_) => return None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(flatten)]
    pub header: RawHeader,
    pub name: String,
    pub description: String,
    pub decimals: u8,
    pub reissuable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    /// Issued amount of the new asset.
    pub quantity: Money,
    pub fee: Money,
    pub is_unconfirmed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    #[serde(flatten)]
    pub header: RawHeader,
    pub asset_id: AssetId,
    pub fee_asset: AssetId,
    pub recipient: Recipient,
    pub amount: Money,
    pub fee: Money,
    #[serde(flatten)]
    pub attachment: Attachment,
    pub is_unconfirmed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reissue {
    #[serde(flatten)]
    pub header: RawHeader,
    pub asset_id: AssetId,
    pub reissuable: bool,
    pub quantity: Money,
    pub fee: Money,
    pub is_unconfirmed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Burn {
    #[serde(flatten)]
    pub header: RawHeader,
    pub asset_id: AssetId,
    pub amount: Money,
    pub fee: Money,
    pub is_unconfirmed: bool,
}

/// Exchange order with resolved pair and scaled values.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matcher_public_key: Option<String>,
    pub asset_pair: AssetPair,
    pub order_type: OrderRole,
    /// Price in the price asset.
    pub price: Money,
    /// Requested amount in the amount asset.
    pub amount: Money,
    /// Matcher fee in the native asset.
    pub matcher_fee: Money,
    pub timestamp: u64,
    pub expiration: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    #[serde(flatten)]
    pub header: RawHeader,
    pub order1: Order,
    pub order2: Order,
    pub buy_order: Order,
    pub sell_order: Order,
    /// Trade price, carried by the first order.
    pub price: Money,
    /// Actually matched amount.
    pub amount: Money,
    pub buy_matcher_fee: Money,
    pub sell_matcher_fee: Money,
    pub fee: Money,
    pub is_unconfirmed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    #[serde(flatten)]
    pub header: RawHeader,
    pub recipient: Recipient,
    pub amount: Money,
    /// Absent only for leases embedded into a cancellation without a fee.
    pub fee: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub is_active: bool,
    pub is_unconfirmed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelLease {
    #[serde(flatten)]
    pub header: RawHeader,
    pub lease_id: String,
    pub lease: Lease,
    pub fee: Money,
    pub is_unconfirmed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlias {
    #[serde(flatten)]
    pub header: RawHeader,
    pub alias: String,
    pub fee: Money,
    pub is_unconfirmed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MassTransferItem {
    pub recipient: Recipient,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MassTransfer {
    #[serde(flatten)]
    pub header: RawHeader,
    pub asset_id: AssetId,
    pub total_amount: Money,
    pub transfers: Vec<MassTransferItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_count: Option<u32>,
    pub fee: Money,
    #[serde(flatten)]
    pub attachment: Attachment,
    pub is_unconfirmed: bool,
}
