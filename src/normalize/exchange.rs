//! Exchange reconciliation.
//!
//! Both orders of an exchange are normalized independently, then matched
//! into buy/sell roles. The trade price is the first order's price and the
//! trade amount the smaller of the two orders' amounts.

use std::sync::Arc;

use super::{ExchangeUnits, Normalizer};
use crate::{
    attachment::AttachmentDecoder,
    error::NormalizeError,
    num,
    raw::{RawAmount, RawExchange, RawOrder},
    transaction::{Exchange, Order},
    types::{Asset, AssetPair, Money, OrderRole},
};

impl<D: AttachmentDecoder> Normalizer<'_, D> {
    pub(super) fn exchange(&self, tx: &RawExchange) -> Result<Exchange, NormalizeError> {
        let order1 = self.order(&tx.order1)?;
        let order2 = self.order(&tx.order2)?;
        let (buy_order, sell_order) = split_roles(&order1, &order2)?;

        let price = order1.price.clone();
        let amount = order1.amount.checked_min(&order2.amount)?;

        let native = self.native_asset()?;
        Ok(Exchange {
            header: tx.header.clone(),
            buy_order: buy_order.clone(),
            sell_order: sell_order.clone(),
            price,
            amount,
            buy_matcher_fee: self.exchange_value("buyMatcherFee", &tx.buy_matcher_fee, native)?,
            sell_matcher_fee: self.exchange_value("sellMatcherFee", &tx.sell_matcher_fee, native)?,
            fee: self.exchange_value("fee", &tx.fee, native)?,
            order1,
            order2,
            is_unconfirmed: self.is_unconfirmed,
        })
    }

    fn order(&self, order: &RawOrder) -> Result<Order, NormalizeError> {
        let pair = AssetPair::new(
            self.assets
                .get_raw(order.asset_pair.amount_asset.as_deref())?
                .clone(),
            self.assets
                .get_raw(order.asset_pair.price_asset.as_deref())?
                .clone(),
        );

        let price = match self.exchange_units {
            ExchangeUnits::Coins => {
                let raw = num::parse_coins("order.price", order.price.as_str())?;
                let tokens = pair.price_converter().from_coins(raw);
                Money::from_tokens(tokens, pair.price_asset.clone()).ok_or_else(|| {
                    NormalizeError::MalformedNumericField {
                        field: "order.price",
                        value: order.price.to_string(),
                    }
                })?
            }
            ExchangeUnits::Tokens => {
                Money::parse_tokens("order.price", order.price.as_str(), &pair.price_asset)?
            }
        };
        let amount = self.exchange_value("order.amount", &order.amount, &pair.amount_asset)?;
        let matcher_fee =
            self.exchange_value("order.matcherFee", &order.matcher_fee, self.native_asset()?)?;

        Ok(Order {
            id: order.id.clone(),
            sender_public_key: order.sender_public_key.clone(),
            matcher_public_key: order.matcher_public_key.clone(),
            asset_pair: pair,
            order_type: order.order_type,
            price,
            amount,
            matcher_fee,
            timestamp: order.timestamp,
            expiration: order.expiration,
        })
    }

    fn exchange_value(
        &self,
        field: &'static str,
        raw: &RawAmount,
        asset: &Arc<Asset>,
    ) -> Result<Money, NormalizeError> {
        match self.exchange_units {
            ExchangeUnits::Coins => Money::parse(field, raw.as_str(), asset),
            ExchangeUnits::Tokens => Money::parse_tokens(field, raw.as_str(), asset),
        }
    }
}

/// Buy and sell orders of an exchange.
///
/// Exactly one order must be a buy and the other a sell.
fn split_roles<'o>(
    order1: &'o Order,
    order2: &'o Order,
) -> Result<(&'o Order, &'o Order), NormalizeError> {
    match (order1.order_type, order2.order_type) {
        (OrderRole::Buy, OrderRole::Sell) => Ok((order1, order2)),
        (OrderRole::Sell, OrderRole::Buy) => Ok((order2, order1)),
        (role, _) => Err(NormalizeError::TaggedOrderRoleConflict(role)),
    }
}
