//! Fixtures for tests: a small asset universe and JSON builders of raw
//! transactions in the node's wire format.
//!
//! [`asset_map`] and [`static_assets`] know the native asset plus
//! [`usd`] (2 decimals), [`btc`] (8 decimals) and [`token`] (no decimals).

use serde_json::{Value, json};

use crate::{
    raw::RawTransaction,
    resolver::StaticAssets,
    types::{Asset, AssetMap, OrderRole},
};

pub const USD_ID: &str = "Ft8X1v1LTa1ABafufpaCWyVj8KkaxUWE6xBhW6sNFJck";
pub const BTC_ID: &str = "8LQW8f7P5d5PZM7GtZEBgaqRPGSzS3DfPuiXrURJ4AJS";
pub const TOKEN_ID: &str = "HZk1mbfuJpmxU1Fs4AX5MWLVYtctsNcg6e2C6VKqK8zk";

pub const SENDER: &str = "3PAWwWa6GbwcJaFzwqXQN5KQm7H96Y7SHTQ";
pub const RECIPIENT: &str = "3P5fcV3eLDNgi1vXfLiZqaHNcPzKTB6w6Jk";

const TIMESTAMP: u64 = 1_528_000_000_000;

pub fn usd() -> Asset {
    Asset::new(USD_ID, "US Dollar", 2).with_ticker("USD")
}

pub fn btc() -> Asset {
    Asset::new(BTC_ID, "Bitcoin", 8).with_ticker("BTC")
}

pub fn token() -> Asset {
    Asset::new(TOKEN_ID, "Token", 0)
}

pub fn asset_map() -> AssetMap {
    [Asset::native(), usd(), btc(), token()].into_iter().collect()
}

pub fn static_assets() -> StaticAssets {
    StaticAssets::new().with(usd()).with(btc()).with(token())
}

/// Decode a JSON fixture, panicking on malformed input.
pub fn raw(value: Value) -> RawTransaction {
    RawTransaction::from_value(value).expect("valid raw transaction fixture")
}

fn header(id: &str, type_code: u8) -> Value {
    json!({
        "id": id,
        "type": type_code,
        "sender": SENDER,
        "senderPublicKey": "4EP6Ysu9pvJ7L4YbYTS2mJgtPA7rWr6rrjdDfMpnmA7y",
        "timestamp": TIMESTAMP,
        "height": 1_000_000,
    })
}

fn with(mut base: Value, fields: Value) -> Value {
    if let (Some(base), Some(fields)) = (base.as_object_mut(), fields.as_object()) {
        base.extend(fields.clone());
    }
    base
}

pub fn legacy_send_json(id: &str, amount: u64) -> Value {
    with(
        header(id, 2),
        json!({"recipient": RECIPIENT, "amount": amount, "fee": 100_000}),
    )
}

pub fn transfer_json(
    id: &str,
    asset_id: Option<&str>,
    fee_asset: Option<&str>,
    amount: u64,
) -> Value {
    with(
        header(id, 4),
        json!({
            "assetId": asset_id,
            "feeAsset": fee_asset,
            "recipient": RECIPIENT,
            "amount": amount,
            "fee": 100_000,
            "attachment": "",
        }),
    )
}

pub fn issue_json(id: &str, quantity: u64, decimals: u8) -> Value {
    with(
        header(id, 3),
        json!({
            "name": "Token",
            "description": "test token",
            "quantity": quantity,
            "decimals": decimals,
            "reissuable": true,
            "fee": 100_000_000,
        }),
    )
}

pub fn reissue_json(id: &str, asset_id: &str, quantity: u64) -> Value {
    with(
        header(id, 5),
        json!({"assetId": asset_id, "quantity": quantity, "reissuable": false, "fee": 100_000}),
    )
}

pub fn burn_json(id: &str, asset_id: &str, amount: u64) -> Value {
    with(
        header(id, 6),
        json!({"assetId": asset_id, "amount": amount, "fee": 100_000}),
    )
}

pub fn lease_json(id: &str, amount: u64, status: &str) -> Value {
    with(
        header(id, 8),
        json!({"recipient": RECIPIENT, "amount": amount, "fee": 100_000, "status": status}),
    )
}

pub fn cancel_lease_json(id: &str, lease: Value) -> Value {
    let lease_id = lease["id"].clone();
    with(
        header(id, 9),
        json!({"leaseId": lease_id, "lease": lease, "fee": 100_000}),
    )
}

pub fn create_alias_json(id: &str, alias: &str) -> Value {
    with(header(id, 10), json!({"alias": alias, "fee": 100_000}))
}

pub fn mass_transfer_json(
    id: &str,
    asset_id: Option<&str>,
    transfers: &[(&str, u64)],
    total_amount: u64,
) -> Value {
    let transfers: Vec<Value> = transfers
        .iter()
        .map(|(recipient, amount)| json!({"recipient": recipient, "amount": amount}))
        .collect();
    with(
        header(id, 11),
        json!({
            "assetId": asset_id,
            "attachment": "",
            "transfers": transfers,
            "transferCount": transfers.len(),
            "totalAmount": total_amount,
            "fee": 200_000,
        }),
    )
}

/// Order of a pair, price and amount in raw (matcher/coin) units.
pub fn order_json(
    role: OrderRole,
    amount_asset: Option<&str>,
    price_asset: Option<&str>,
    price: u64,
    amount: u64,
) -> Value {
    json!({
        "id": format!("order-{role}-{price}-{amount}"),
        "senderPublicKey": "4EP6Ysu9pvJ7L4YbYTS2mJgtPA7rWr6rrjdDfMpnmA7y",
        "matcherPublicKey": "7kPFrHDiGw1rCm7LPszuECwWYL3dMf6iMifLRDJQZMzy",
        "assetPair": {"amountAsset": amount_asset, "priceAsset": price_asset},
        "orderType": role,
        "price": price,
        "amount": amount,
        "timestamp": TIMESTAMP,
        "expiration": TIMESTAMP + 86_400_000,
        "matcherFee": 300_000,
    })
}

pub fn exchange_json(id: &str, order1: Value, order2: Value) -> Value {
    let price = order1["price"].clone();
    let amount = order1["amount"].clone();
    with(
        header(id, 7),
        json!({
            "order1": order1,
            "order2": order2,
            "price": price,
            "amount": amount,
            "buyMatcherFee": 300_000,
            "sellMatcherFee": 150_000,
            "fee": 300_000,
        }),
    )
}
