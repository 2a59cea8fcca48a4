//! Tests for the transaction normalizer.

use fastnum::udec128;
use serde_json::{Value, json};

use super::*;
use crate::{
    testing::{self, BTC_ID, RECIPIENT, TOKEN_ID, USD_ID},
    transaction::Exchange,
    types::{NATIVE_ASSET_ID, OrderRole, TxType},
};

fn normalize_json(value: Value, is_unconfirmed: bool) -> Result<Transaction, NormalizeError> {
    normalize(&testing::raw(value), &testing::asset_map(), is_unconfirmed)
}

macro_rules! expect {
    ($tx:expr, $variant:ident) => {
        match $tx {
            Transaction::$variant(tx) => tx,
            other => panic!("expected {}, got {:?}", stringify!($variant), other),
        }
    };
}

fn exchange(value: Value) -> Result<Exchange, NormalizeError> {
    normalize_json(value, false).map(|tx| *expect!(tx, Exchange))
}

// ============================================================================
// TRANSFERS
// ============================================================================

#[test]
fn transfer_scales_amount_and_fee_by_their_assets() {
    let tx = normalize_json(
        testing::transfer_json("t1", Some(USD_ID), Some(BTC_ID), 12345),
        true,
    )
    .unwrap();
    assert_eq!(tx.tx_type(), Some(TxType::Transfer));
    assert_eq!(tx.id(), Some("t1"));
    assert_eq!(tx.is_unconfirmed(), Some(true));

    let transfer = expect!(tx, Transfer);
    assert_eq!(transfer.asset_id.as_str(), USD_ID);
    assert_eq!(transfer.fee_asset.as_str(), BTC_ID);
    assert_eq!(transfer.amount.tokens(), udec128!(123.45));
    assert_eq!(transfer.amount.asset().id.as_str(), USD_ID);
    assert_eq!(transfer.fee.tokens(), udec128!(0.001));
    assert_eq!(transfer.fee.asset().id.as_str(), BTC_ID);
    assert_eq!(transfer.recipient, Recipient::Address(RECIPIENT.to_string()));
}

#[test]
fn transfer_without_assets_is_native() {
    let transfer = expect!(
        normalize_json(testing::transfer_json("t1", None, Some(""), 100_000_000), false).unwrap(),
        Transfer
    );
    assert!(transfer.asset_id.is_native());
    assert!(transfer.fee_asset.is_native());
    assert_eq!(transfer.amount.tokens(), udec128!(1));
    assert!(!transfer.is_unconfirmed);
}

#[test]
fn transfer_alias_recipient_is_normalized() {
    let mut value = testing::transfer_json("t1", None, None, 1);
    value["recipient"] = json!("alias:W:merry");
    let transfer = expect!(normalize_json(value, false).unwrap(), Transfer);
    assert_eq!(
        transfer.recipient,
        Recipient::Alias {
            chain_id: 'W',
            name: "merry".to_string()
        }
    );
}

#[test]
fn transfer_attachment_is_decoded() {
    let mut value = testing::transfer_json("t1", None, None, 1);
    value["attachment"] = json!(bs58::encode("thanks!").into_string());
    let transfer = expect!(normalize_json(value, false).unwrap(), Transfer);
    assert_eq!(transfer.attachment.text.as_deref(), Some("thanks!"));
}

#[test]
fn transfer_binary_attachment_keeps_raw_form() {
    let raw = bs58::encode([0xc3, 0x28, 0xa0, 0xa1]).into_string();
    let mut value = testing::transfer_json("t1", None, None, 1);
    value["attachment"] = json!(raw);

    let transfer = expect!(normalize_json(value, false).unwrap(), Transfer);
    assert_eq!(transfer.attachment.text, None);
    assert_eq!(transfer.attachment.raw, raw);
}

#[test]
fn transfer_uses_custom_decoder() {
    let assets = testing::asset_map();
    let normalizer = Normalizer::new(&assets, false).with_decoder(|_: &str| None);

    let mut value = testing::transfer_json("t1", None, None, 1);
    value["attachment"] = json!(bs58::encode("text").into_string());
    let transfer = expect!(normalizer.normalize(&testing::raw(value)).unwrap(), Transfer);
    assert_eq!(transfer.attachment.text, None);
}

#[test]
fn legacy_send_equals_native_transfer() {
    let legacy = normalize_json(testing::legacy_send_json("p1", 500), true).unwrap();

    let mut transfer = testing::transfer_json("p1", Some(NATIVE_ASSET_ID), Some(NATIVE_ASSET_ID), 500);
    transfer["attachment"] = json!("");
    let transfer = normalize_json(transfer, true).unwrap();

    assert_eq!(legacy, transfer);
    assert_eq!(legacy.tx_type(), Some(TxType::Transfer));
    let legacy = expect!(legacy, Transfer);
    assert_eq!(legacy.attachment.text.as_deref(), Some(""));
    assert_eq!(legacy.amount.coins(), udec128!(500));
}

// ============================================================================
// ASSET LIFECYCLE
// ============================================================================

#[test]
fn issue_scales_quantity_by_issued_asset() {
    let issue = expect!(
        normalize_json(testing::issue_json(TOKEN_ID, 1000, 0), false).unwrap(),
        Issue
    );
    assert_eq!(issue.quantity.asset().id.as_str(), TOKEN_ID);
    assert_eq!(issue.quantity.tokens(), udec128!(1000));
    assert!(issue.fee.asset().id.is_native());
    assert_eq!(issue.fee.tokens(), udec128!(1));
    assert_eq!(issue.name, "Token");
    assert!(issue.reissuable);
}

#[test]
fn reissue_and_burn_scale_by_their_asset() {
    let reissue = expect!(
        normalize_json(testing::reissue_json("r1", USD_ID, 250), false).unwrap(),
        Reissue
    );
    assert_eq!(reissue.quantity.tokens(), udec128!(2.5));
    assert!(reissue.fee.asset().id.is_native());
    assert!(!reissue.reissuable);

    let burn = expect!(
        normalize_json(testing::burn_json("b1", BTC_ID, 1), false).unwrap(),
        Burn
    );
    assert_eq!(burn.amount.tokens(), udec128!(0.00000001));
    assert_eq!(burn.asset_id.as_str(), BTC_ID);
    assert!(burn.fee.asset().id.is_native());
}

// ============================================================================
// LEASING / ALIASES
// ============================================================================

#[test]
fn lease_is_native_and_tracks_status() {
    let active = expect!(
        normalize_json(testing::lease_json("l1", 100_000_000, "active"), true).unwrap(),
        Lease
    );
    assert!(active.is_active);
    assert!(active.is_unconfirmed);
    assert_eq!(active.amount.tokens(), udec128!(1));
    assert!(active.amount.asset().id.is_native());
    assert_eq!(active.fee.as_ref().unwrap().tokens(), udec128!(0.001));

    let canceled = expect!(
        normalize_json(testing::lease_json("l1", 1, "canceled"), false).unwrap(),
        Lease
    );
    assert!(!canceled.is_active);
}

#[test]
fn cancel_lease_embeds_confirmed_lease() {
    let lease = testing::lease_json("l1", 100_000_000, "canceled");
    let tx = normalize_json(testing::cancel_lease_json("c1", lease), true).unwrap();
    assert_eq!(tx.fee().unwrap().tokens(), udec128!(0.001));

    let cancel = expect!(tx, CancelLease);
    assert!(cancel.is_unconfirmed);
    assert!(!cancel.lease.is_unconfirmed);
    assert!(!cancel.lease.is_active);
    assert_eq!(cancel.lease_id, "l1");
    assert_eq!(cancel.lease.amount.tokens(), udec128!(1));
}

#[test]
fn cancel_lease_accepts_embedded_lease_without_fee() {
    let mut lease = testing::lease_json("l1", 1, "canceled");
    lease.as_object_mut().unwrap().remove("fee");

    let cancel = expect!(
        normalize_json(testing::cancel_lease_json("c1", lease), false).unwrap(),
        CancelLease
    );
    assert_eq!(cancel.lease.fee, None);
}

#[test]
fn lease_transaction_without_fee_is_rejected() {
    let mut value = testing::lease_json("l1", 1, "active");
    value.as_object_mut().unwrap().remove("fee");
    assert!(RawTransaction::from_value(value.clone()).is_err());

    // The same lease is accepted when embedded into a cancellation.
    let cancel = testing::raw(testing::cancel_lease_json("c1", value));
    assert!(normalize(&cancel, &testing::asset_map(), false).is_ok());
}

#[test]
fn create_alias_only_scales_fee() {
    let alias = expect!(
        normalize_json(testing::create_alias_json("a1", "merry"), false).unwrap(),
        CreateAlias
    );
    assert_eq!(alias.alias, "merry");
    assert!(alias.fee.asset().id.is_native());
    assert_eq!(alias.fee.tokens(), udec128!(0.001));
}

// ============================================================================
// MASS TRANSFERS
// ============================================================================

#[test]
fn mass_transfer_scales_every_item_by_shared_asset() {
    let mt = expect!(
        normalize_json(
            testing::mass_transfer_json(
                "m1",
                Some(USD_ID),
                &[(RECIPIENT, 150), ("alias:W:merry", 250)],
                400,
            ),
            false,
        )
        .unwrap(),
        MassTransfer
    );
    assert_eq!(mt.total_amount.tokens(), udec128!(4.00));
    assert_eq!(mt.transfers[0].amount.tokens(), udec128!(1.5));
    assert_eq!(mt.transfers[1].amount.tokens(), udec128!(2.5));
    assert!(mt.transfers[1].recipient.is_alias());
    assert_eq!(mt.transfer_count, Some(2));
    assert!(mt.fee.asset().id.is_native());
    assert_eq!(mt.fee.tokens(), udec128!(0.002));

    let total = mt.transfers[0]
        .amount
        .checked_add(&mt.transfers[1].amount)
        .unwrap();
    assert_eq!(total, mt.total_amount);
}

#[test]
fn mass_transfer_malformed_item_fails() {
    let mut value = testing::mass_transfer_json("m1", Some(USD_ID), &[(RECIPIENT, 150)], 150);
    value["transfers"][0]["amount"] = json!("1.5");
    assert_eq!(
        normalize_json(value, false),
        Err(NormalizeError::MalformedNumericField {
            field: "transfers.amount",
            value: "1.5".to_string()
        })
    );
}

// ============================================================================
// EXCHANGES
// ============================================================================

/// BTC/USD order: price in USD cents (matcher scale 10^2), amount in BTC.
fn btc_usd_order(role: OrderRole, price_usd: u64, amount_btc: u64) -> Value {
    testing::order_json(
        role,
        Some(BTC_ID),
        Some(USD_ID),
        price_usd * 100,
        amount_btc * 100_000_000,
    )
}

#[test]
fn exchange_trade_amount_is_smaller_order() {
    let ex = exchange(testing::exchange_json(
        "e1",
        btc_usd_order(OrderRole::Buy, 7000, 500),
        btc_usd_order(OrderRole::Sell, 6990, 300),
    ))
    .unwrap();

    assert_eq!(ex.amount.tokens(), udec128!(300));
    assert_eq!(ex.amount.asset().id.as_str(), BTC_ID);
    assert_eq!(ex.price, ex.order1.price);
    assert_eq!(ex.price.tokens(), udec128!(7000));
    assert_eq!(ex.price.asset().id.as_str(), USD_ID);
    assert_eq!(ex.order2.price.tokens(), udec128!(6990));
    assert_eq!(ex.order1.amount.tokens(), udec128!(500));
}

#[test]
fn exchange_exposes_buy_and_sell_orders() {
    let ex = exchange(testing::exchange_json(
        "e1",
        btc_usd_order(OrderRole::Sell, 7000, 1),
        btc_usd_order(OrderRole::Buy, 7010, 2),
    ))
    .unwrap();

    assert_eq!(ex.buy_order, ex.order2);
    assert_eq!(ex.sell_order, ex.order1);
    assert_eq!(ex.price.tokens(), udec128!(7000));
    assert_eq!(ex.amount.tokens(), udec128!(1));
}

#[test]
fn exchange_fees_are_native() {
    let ex = exchange(testing::exchange_json(
        "e1",
        btc_usd_order(OrderRole::Buy, 7000, 1),
        btc_usd_order(OrderRole::Sell, 7000, 1),
    ))
    .unwrap();

    for fee in [&ex.buy_matcher_fee, &ex.sell_matcher_fee, &ex.fee, &ex.order1.matcher_fee] {
        assert!(fee.asset().id.is_native());
    }
    assert_eq!(ex.buy_matcher_fee.tokens(), udec128!(0.003));
    assert_eq!(ex.sell_matcher_fee.tokens(), udec128!(0.0015));
    assert_eq!(ex.fee.tokens(), udec128!(0.003));
}

#[test]
fn exchange_price_uses_pair_decimals_spread() {
    // Token without decimals priced in WAVES: matcher scale is 10^16.
    let order = |role| {
        testing::order_json(role, Some(TOKEN_ID), None, 15_000_000_000_000_000, 10)
    };
    let ex = exchange(testing::exchange_json("e1", order(OrderRole::Buy), order(OrderRole::Sell)))
        .unwrap();

    assert_eq!(ex.price.tokens(), udec128!(1.5));
    assert_eq!(ex.price.coins(), udec128!(150000000));
    assert!(ex.price.asset().id.is_native());
    assert_eq!(ex.amount.tokens(), udec128!(10));
    assert_eq!(ex.order1.asset_pair.amount_asset.id.as_str(), TOKEN_ID);
    assert!(ex.order1.asset_pair.price_asset.id.is_native());
}

#[test]
fn exchange_with_same_roles_is_rejected() {
    assert_eq!(
        exchange(testing::exchange_json(
            "e1",
            btc_usd_order(OrderRole::Buy, 7000, 1),
            btc_usd_order(OrderRole::Buy, 7000, 1),
        )),
        Err(NormalizeError::TaggedOrderRoleConflict(OrderRole::Buy))
    );
    assert_eq!(
        exchange(testing::exchange_json(
            "e1",
            btc_usd_order(OrderRole::Sell, 7000, 1),
            btc_usd_order(OrderRole::Sell, 7000, 1),
        )),
        Err(NormalizeError::TaggedOrderRoleConflict(OrderRole::Sell))
    );
}

#[test]
fn exchange_with_mismatched_amount_assets_fails() {
    let order2 = testing::order_json(OrderRole::Sell, Some(TOKEN_ID), Some(USD_ID), 100, 1);
    assert_eq!(
        exchange(testing::exchange_json(
            "e1",
            btc_usd_order(OrderRole::Buy, 7000, 1),
            order2
        )),
        Err(NormalizeError::AssetMismatch {
            expected: BTC_ID.into(),
            actual: TOKEN_ID.into(),
        })
    );
}

#[test]
fn exchange_in_token_units() {
    let mut value = testing::exchange_json(
        "e1",
        btc_usd_order(OrderRole::Buy, 0, 0),
        btc_usd_order(OrderRole::Sell, 0, 0),
    );
    value["order1"]["price"] = json!("7000.5");
    value["order1"]["amount"] = json!("0.5");
    value["order1"]["matcherFee"] = json!("0.003");
    value["order2"]["price"] = json!("7000.5");
    value["order2"]["amount"] = json!("0.25");
    value["order2"]["matcherFee"] = json!("0.003");
    value["buyMatcherFee"] = json!("0.003");
    value["sellMatcherFee"] = json!("0.0015");
    value["fee"] = json!("0.003");

    let assets = testing::asset_map();
    let normalizer = Normalizer::new(&assets, false).with_exchange_units(ExchangeUnits::Tokens);
    let ex = *expect!(normalizer.normalize(&testing::raw(value)).unwrap(), Exchange);

    assert_eq!(ex.price.coins(), udec128!(700050));
    assert_eq!(ex.amount.tokens(), udec128!(0.25));
    assert_eq!(ex.amount.coins(), udec128!(25000000));
    assert_eq!(ex.order1.matcher_fee.coins(), udec128!(300000));
    assert_eq!(ex.sell_matcher_fee.coins(), udec128!(150000));
}

#[test]
fn exchange_price_overflowing_price_asset_fails() {
    // 10 decimals priced in USD: matcher scale is 10^0, coins need 10^2 more.
    let mut assets = testing::asset_map();
    assets.insert(Asset::new("FINE", "Fine", 10));

    let raw_price = "9".repeat(38);
    let order = |role| {
        let mut order = testing::order_json(role, Some("FINE"), Some(USD_ID), 0, 1);
        order["price"] = json!(raw_price);
        order
    };
    let value = testing::exchange_json("e1", order(OrderRole::Buy), order(OrderRole::Sell));

    assert_eq!(
        normalize(&testing::raw(value), &assets, false),
        Err(NormalizeError::MalformedNumericField {
            field: "order.price",
            value: raw_price.clone()
        })
    );
}

// ============================================================================
// ERRORS / PASS-THROUGH
// ============================================================================

#[test]
fn missing_asset_descriptor() {
    assert_eq!(
        normalize_json(testing::transfer_json("t1", Some("ETH"), None, 1), false),
        Err(NormalizeError::MissingAssetDescriptor("ETH".into()))
    );
    assert_eq!(
        normalize_json(testing::burn_json("b1", "ETH", 1), false),
        Err(NormalizeError::MissingAssetDescriptor("ETH".into()))
    );
}

#[test]
fn malformed_numeric_field() {
    let mut value = testing::transfer_json("t1", None, None, 1);
    value["amount"] = json!(-5);
    assert_eq!(
        normalize_json(value, false),
        Err(NormalizeError::MalformedNumericField {
            field: "amount",
            value: "-5".to_string()
        })
    );

    let mut value = testing::lease_json("l1", 1, "active");
    value["fee"] = json!("1e5");
    assert_eq!(
        normalize_json(value, false),
        Err(NormalizeError::MalformedNumericField {
            field: "fee",
            value: "1e5".to_string()
        })
    );
}

#[test]
fn unknown_type_is_identity() {
    let value = json!({
        "type": 12,
        "id": "d1",
        "data": [{"key": "k", "type": "integer", "value": 1}],
        "fee": 100_000,
    });
    let tx = normalize_json(value.clone(), true).unwrap();
    assert_eq!(tx, Transaction::Unknown(value));
    assert_eq!(tx.id(), Some("d1"));
    assert_eq!(tx.tx_type(), None);
    assert_eq!(tx.fee(), None);
    assert_eq!(tx.is_unconfirmed(), None);

    let again = normalize(
        &testing::raw(serde_json::to_value(&tx).unwrap()),
        &testing::asset_map(),
        true,
    )
    .unwrap();
    assert_eq!(again, tx);
}

#[test]
fn normalizer_is_shared_across_threads() {
    let assets = testing::asset_map();
    let normalizer = &Normalizer::new(&assets, false);
    let txs: Vec<_> = (0..8)
        .map(|i| testing::raw(testing::transfer_json(&format!("t{i}"), Some(USD_ID), None, i * 100)))
        .collect();

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = txs
            .iter()
            .map(|tx| s.spawn(move || normalizer.normalize(tx)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, result) in results.into_iter().enumerate() {
        let transfer = expect!(result.unwrap(), Transfer);
        assert_eq!(transfer.amount.coins(), fastnum::UD128::from(i as u64 * 100));
    }
}
