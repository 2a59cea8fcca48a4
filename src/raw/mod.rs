//! Wire-format transactions as returned by the node and matcher APIs.
//!
//! [`RawTransaction`] is decoded by looking at the numeric `type` field
//! first. Recognized types are decoded into their own structs, any other
//! type code is kept as the untouched JSON value.

mod fields;
mod tx;

pub use fields::{RawAmount, RawHeader};
pub use tx::*;

use serde::{Deserialize, Deserializer, de};

use crate::types::{AssetId, TxType};

#[derive(Clone, Debug, PartialEq)]
pub enum RawTransaction {
    LegacySend(RawLegacySend),
    Issue(RawIssue),
    Transfer(RawTransfer),
    Reissue(RawReissue),
    Burn(RawBurn),
    Exchange(Box<RawExchange>),
    Lease(RawLease),
    CancelLease(RawCancelLease),
    CreateAlias(RawCreateAlias),
    MassTransfer(RawMassTransfer),
    /// Type this crate does not normalize.
    Unknown(serde_json::Value),
}

impl RawTransaction {
    /// Decode a transaction from its JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let Some(tx_type) = value
            .get("type")
            .and_then(serde_json::Value::as_u64)
            .and_then(TxType::from_code)
        else {
            return Ok(Self::Unknown(value));
        };

        Ok(match tx_type {
            TxType::LegacySend => Self::LegacySend(serde_json::from_value(value)?),
            TxType::Issue => Self::Issue(serde_json::from_value(value)?),
            TxType::Transfer => Self::Transfer(serde_json::from_value(value)?),
            TxType::Reissue => Self::Reissue(serde_json::from_value(value)?),
            TxType::Burn => Self::Burn(serde_json::from_value(value)?),
            TxType::Exchange => Self::Exchange(Box::new(serde_json::from_value(value)?)),
            TxType::Lease => Self::Lease(serde_json::from_value(value)?),
            TxType::CancelLease => Self::CancelLease(serde_json::from_value(value)?),
            TxType::CreateAlias => Self::CreateAlias(serde_json::from_value(value)?),
            TxType::MassTransfer => Self::MassTransfer(serde_json::from_value(value)?),
        })
    }

    pub fn tx_type(&self) -> Option<TxType> {
        Some(match self {
            Self::LegacySend(_) => TxType::LegacySend,
            Self::Issue(_) => TxType::Issue,
            Self::Transfer(_) => TxType::Transfer,
            Self::Reissue(_) => TxType::Reissue,
            Self::Burn(_) => TxType::Burn,
            Self::Exchange(_) => TxType::Exchange,
            Self::Lease(_) => TxType::Lease,
            Self::CancelLease(_) => TxType::CancelLease,
            Self::CreateAlias(_) => TxType::CreateAlias,
            Self::MassTransfer(_) => TxType::MassTransfer,
            Self::Unknown(_) => return None,
        })
    }

    /// Transaction ID, if present.
    pub fn id(&self) -> Option<&str> {
        let header = match self {
            Self::LegacySend(tx) => &tx.header,
            Self::Issue(tx) => &tx.header,
            Self::Transfer(tx) => &tx.header,
            Self::Reissue(tx) => &tx.header,
            Self::Burn(tx) => &tx.header,
            Self::Exchange(tx) => &tx.header,
            Self::Lease(tx) => &tx.header,
            Self::CancelLease(tx) => &tx.header,
            Self::CreateAlias(tx) => &tx.header,
            Self::MassTransfer(tx) => &tx.header,
            Self::Unknown(value) => return value.get("id").and_then(serde_json::Value::as_str),
        };
        Some(header.id.as_str())
    }

    /// Non-native asset identifiers the transaction references, normalized.
    ///
    /// Fees of every type but transfer are always paid in the native asset,
    /// which the resolver requests anyway. Both orders of an exchange trade
    /// the same pair, only the first one is scanned.
    pub fn asset_ids(&self) -> Vec<AssetId> {
        let ids = match self {
            Self::Issue(tx) => vec![AssetId::normalize(Some(&tx.header.id))],
            Self::Reissue(tx) => vec![AssetId::normalize(tx.asset_id.as_deref())],
            Self::Burn(tx) => vec![AssetId::normalize(tx.asset_id.as_deref())],
            Self::MassTransfer(tx) => vec![AssetId::normalize(tx.asset_id.as_deref())],
            Self::Transfer(tx) => vec![
                AssetId::normalize(tx.asset_id.as_deref()),
                AssetId::normalize(tx.fee_asset.as_deref()),
            ],
            Self::Exchange(tx) => vec![
                AssetId::normalize(tx.order1.asset_pair.amount_asset.as_deref()),
                AssetId::normalize(tx.order1.asset_pair.price_asset.as_deref()),
            ],
            Self::LegacySend(_)
            | Self::Lease(_)
            | Self::CancelLease(_)
            | Self::CreateAlias(_)
            | Self::Unknown(_) => vec![],
        };
        ids.into_iter().filter(|id| !id.is_native()).collect()
    }
}

impl<'de> Deserialize<'de> for RawTransaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::OrderRole;

    #[test]
    fn test_decode_transfer() {
        let tx = RawTransaction::from_value(json!({
            "type": 4,
            "id": "tx1",
            "sender": "3PAWwWa6GbwcJaFzwqXQN5KQm7H96Y7SHTQ",
            "timestamp": 1_520_000_000_000u64,
            "assetId": null,
            "feeAssetId": "BTC",
            "recipient": "alias:W:merry",
            "amount": 100,
            "fee": "100000",
            "attachment": "",
        }))
        .unwrap();

        let RawTransaction::Transfer(transfer) = &tx else {
            panic!("expected transfer, got {tx:?}");
        };
        assert_eq!(transfer.header.id, "tx1");
        assert_eq!(transfer.header.type_code, 4);
        assert_eq!(transfer.asset_id, None);
        assert_eq!(transfer.fee_asset.as_deref(), Some("BTC"));
        assert_eq!(transfer.amount, RawAmount::from("100"));
        assert_eq!(tx.tx_type(), Some(TxType::Transfer));
        assert_eq!(tx.id(), Some("tx1"));
        assert_eq!(tx.asset_ids(), vec![AssetId::from("BTC")]);
    }

    #[test]
    fn test_decode_exchange() {
        let order = |role: &str| {
            json!({
                "id": format!("order-{role}"),
                "assetPair": {"amountAsset": null, "priceAsset": "USD"},
                "orderType": role,
                "price": 250,
                "amount": "100000000",
                "matcherFee": 300000,
            })
        };
        let tx = RawTransaction::from_value(json!({
            "type": 7,
            "id": "ex1",
            "order1": order("buy"),
            "order2": order("sell"),
            "price": 250,
            "amount": 100000000,
            "buyMatcherFee": 300000,
            "sellMatcherFee": 300000,
            "fee": 300000,
        }))
        .unwrap();

        let RawTransaction::Exchange(exchange) = &tx else {
            panic!("expected exchange, got {tx:?}");
        };
        assert_eq!(exchange.order1.order_type, OrderRole::Buy);
        assert_eq!(exchange.order2.order_type, OrderRole::Sell);
        assert_eq!(tx.asset_ids(), vec![AssetId::from("USD")]);
    }

    #[test]
    fn test_unknown_types_pass_through() {
        for value in [
            json!({"type": 12, "id": "data", "data": [{"key": "k", "value": 1}]}),
            json!({"type": 1, "id": "genesis", "amount": 1}),
            json!({"id": "no-type"}),
            json!({"type": "4", "id": "string-type"}),
        ] {
            assert_eq!(
                RawTransaction::from_value(value.clone()).unwrap(),
                RawTransaction::Unknown(value)
            );
        }
    }

    #[test]
    fn test_malformed_known_type_is_an_error() {
        assert!(RawTransaction::from_value(json!({"type": 4, "id": "t"})).is_err());
    }

    #[test]
    fn test_asset_ids_per_type() {
        let issue = RawTransaction::from_value(json!({
            "type": 3, "id": "NEW", "name": "Token", "quantity": 1000,
            "decimals": 2, "fee": 100000000,
        }))
        .unwrap();
        assert_eq!(issue.asset_ids(), vec![AssetId::from("NEW")]);

        let lease = RawTransaction::from_value(json!({
            "type": 8, "id": "l", "recipient": "3P", "amount": 1, "fee": 1,
        }))
        .unwrap();
        assert!(lease.asset_ids().is_empty());

        let legacy = RawTransaction::from_value(json!({
            "type": 2, "id": "p", "recipient": "3P", "amount": 1, "fee": 1,
        }))
        .unwrap();
        assert!(legacy.asset_ids().is_empty());
    }
}
