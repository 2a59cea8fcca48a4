//! Transaction normalizer.
//!
//! [`Normalizer`] turns a [`RawTransaction`] into a canonical
//! [`Transaction`] given the asset descriptors resolved for its batch.
//! Normalization is pure: it only reads the asset map and the transaction,
//! so a single normalizer can be shared across threads.

mod exchange;

use std::sync::Arc;

use crate::{
    attachment::{Attachment, AttachmentDecoder, Base58Text},
    error::NormalizeError,
    raw::{
        RawAmount, RawBurn, RawCancelLease, RawCreateAlias, RawIssue, RawLease, RawMassTransfer,
        RawReissue, RawTransaction, RawTransfer,
    },
    transaction::{
        Burn, CancelLease, CreateAlias, Issue, Lease, MassTransfer, MassTransferItem, Reissue,
        Transaction, Transfer,
    },
    types::{Asset, AssetId, AssetMap, Money, Recipient},
};

/// Status of an active lease.
const LEASE_ACTIVE: &str = "active";

/// Units exchange prices, amounts and fees are expressed in on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExchangeUnits {
    /// Integer coins; prices in matcher scale.
    #[default]
    Coins,
    /// Decimal tokens, as served by data services.
    Tokens,
}

/// Normalizes transactions of one batch.
#[derive(Clone, Debug)]
pub struct Normalizer<'a, D = Base58Text> {
    assets: &'a AssetMap,
    is_unconfirmed: bool,
    exchange_units: ExchangeUnits,
    decoder: D,
}

impl<'a> Normalizer<'a> {
    pub fn new(assets: &'a AssetMap, is_unconfirmed: bool) -> Self {
        Self {
            assets,
            is_unconfirmed,
            exchange_units: ExchangeUnits::default(),
            decoder: Base58Text,
        }
    }
}

impl<'a, D: AttachmentDecoder> Normalizer<'a, D> {
    /// Replace the attachment decoder.
    pub fn with_decoder<E: AttachmentDecoder>(self, decoder: E) -> Normalizer<'a, E> {
        Normalizer {
            assets: self.assets,
            is_unconfirmed: self.is_unconfirmed,
            exchange_units: self.exchange_units,
            decoder,
        }
    }

    pub fn with_exchange_units(mut self, units: ExchangeUnits) -> Self {
        self.exchange_units = units;
        self
    }

    pub fn assets(&self) -> &AssetMap {
        self.assets
    }

    /// Normalize a single transaction.
    ///
    /// Unrecognized transaction types are returned unchanged.
    pub fn normalize(&self, tx: &RawTransaction) -> Result<Transaction, NormalizeError> {
        Ok(match tx {
            RawTransaction::LegacySend(tx) => {
                Transaction::Transfer(self.transfer(&RawTransfer::from_legacy(tx.clone()))?)
            }
            RawTransaction::Issue(tx) => Transaction::Issue(self.issue(tx)?),
            RawTransaction::Transfer(tx) => Transaction::Transfer(self.transfer(tx)?),
            RawTransaction::Reissue(tx) => Transaction::Reissue(self.reissue(tx)?),
            RawTransaction::Burn(tx) => Transaction::Burn(self.burn(tx)?),
            RawTransaction::Exchange(tx) => Transaction::Exchange(Box::new(self.exchange(tx)?)),
            RawTransaction::Lease(tx) => {
                Transaction::Lease(self.lease(tx, Some(&tx.fee), self.is_unconfirmed)?)
            }
            RawTransaction::CancelLease(tx) => Transaction::CancelLease(self.cancel_lease(tx)?),
            RawTransaction::CreateAlias(tx) => Transaction::CreateAlias(self.create_alias(tx)?),
            RawTransaction::MassTransfer(tx) => {
                Transaction::MassTransfer(self.mass_transfer(tx)?)
            }
            RawTransaction::Unknown(value) => Transaction::Unknown(value.clone()),
        })
    }

    fn issue(&self, tx: &RawIssue) -> Result<Issue, NormalizeError> {
        let asset = self.assets.get(&AssetId::normalize(Some(&tx.header.id)))?;
        Ok(Issue {
            header: tx.header.clone(),
            name: tx.name.clone(),
            description: tx.description.clone(),
            decimals: tx.decimals,
            reissuable: tx.reissuable,
            script: tx.script.clone(),
            quantity: Money::parse("quantity", tx.quantity.as_str(), asset)?,
            fee: self.native("fee", &tx.fee)?,
            is_unconfirmed: self.is_unconfirmed,
        })
    }

    fn transfer(&self, tx: &RawTransfer) -> Result<Transfer, NormalizeError> {
        let asset_id = AssetId::normalize(tx.asset_id.as_deref());
        let fee_asset = AssetId::normalize(tx.fee_asset.as_deref());
        Ok(Transfer {
            header: tx.header.clone(),
            recipient: Recipient::parse(&tx.recipient),
            amount: Money::parse("amount", tx.amount.as_str(), self.assets.get(&asset_id)?)?,
            fee: Money::parse("fee", tx.fee.as_str(), self.assets.get(&fee_asset)?)?,
            attachment: Attachment::decode(&tx.attachment, &self.decoder),
            asset_id,
            fee_asset,
            is_unconfirmed: self.is_unconfirmed,
        })
    }

    fn reissue(&self, tx: &RawReissue) -> Result<Reissue, NormalizeError> {
        let asset_id = AssetId::normalize(tx.asset_id.as_deref());
        Ok(Reissue {
            header: tx.header.clone(),
            reissuable: tx.reissuable,
            quantity: Money::parse("quantity", tx.quantity.as_str(), self.assets.get(&asset_id)?)?,
            fee: self.native("fee", &tx.fee)?,
            asset_id,
            is_unconfirmed: self.is_unconfirmed,
        })
    }

    fn burn(&self, tx: &RawBurn) -> Result<Burn, NormalizeError> {
        let asset_id = AssetId::normalize(tx.asset_id.as_deref());
        Ok(Burn {
            header: tx.header.clone(),
            amount: Money::parse("amount", tx.amount.as_str(), self.assets.get(&asset_id)?)?,
            fee: self.native("fee", &tx.fee)?,
            asset_id,
            is_unconfirmed: self.is_unconfirmed,
        })
    }

    /// Leases embedded into cancellations are normalized as confirmed.
    fn lease<F>(
        &self,
        tx: &RawLease<F>,
        fee: Option<&RawAmount>,
        is_unconfirmed: bool,
    ) -> Result<Lease, NormalizeError> {
        let fee = fee.map(|fee| self.native("fee", fee)).transpose()?;
        Ok(Lease {
            header: tx.header.clone(),
            recipient: Recipient::parse(&tx.recipient),
            amount: self.native("amount", &tx.amount)?,
            fee,
            status: tx.status.clone(),
            is_active: tx.status.as_deref() == Some(LEASE_ACTIVE),
            is_unconfirmed,
        })
    }

    fn cancel_lease(&self, tx: &RawCancelLease) -> Result<CancelLease, NormalizeError> {
        Ok(CancelLease {
            header: tx.header.clone(),
            lease_id: tx.lease_id.clone(),
            lease: self.lease(&tx.lease, tx.lease.fee.as_ref(), false)?,
            fee: self.native("fee", &tx.fee)?,
            is_unconfirmed: self.is_unconfirmed,
        })
    }

    fn create_alias(&self, tx: &RawCreateAlias) -> Result<CreateAlias, NormalizeError> {
        Ok(CreateAlias {
            header: tx.header.clone(),
            alias: tx.alias.clone(),
            fee: self.native("fee", &tx.fee)?,
            is_unconfirmed: self.is_unconfirmed,
        })
    }

    fn mass_transfer(&self, tx: &RawMassTransfer) -> Result<MassTransfer, NormalizeError> {
        let asset_id = AssetId::normalize(tx.asset_id.as_deref());
        let asset = self.assets.get(&asset_id)?;
        let transfers = tx
            .transfers
            .iter()
            .map(|item| {
                Ok(MassTransferItem {
                    recipient: Recipient::parse(&item.recipient),
                    amount: Money::parse("transfers.amount", item.amount.as_str(), asset)?,
                })
            })
            .collect::<Result<Vec<_>, NormalizeError>>()?;
        Ok(MassTransfer {
            header: tx.header.clone(),
            total_amount: Money::parse("totalAmount", tx.total_amount.as_str(), asset)?,
            transfers,
            transfer_count: tx.transfer_count,
            fee: self.native("fee", &tx.fee)?,
            attachment: Attachment::decode(&tx.attachment, &self.decoder),
            asset_id,
            is_unconfirmed: self.is_unconfirmed,
        })
    }

    fn native_asset(&self) -> Result<&Arc<Asset>, NormalizeError> {
        self.assets.native()
    }

    fn native(&self, field: &'static str, raw: &RawAmount) -> Result<Money, NormalizeError> {
        Money::parse(field, raw.as_str(), self.native_asset()?)
    }
}

/// Normalize a single transaction with the default attachment decoder.
pub fn normalize(
    tx: &RawTransaction,
    assets: &AssetMap,
    is_unconfirmed: bool,
) -> Result<Transaction, NormalizeError> {
    Normalizer::new(assets, is_unconfirmed).normalize(tx)
}

#[cfg(test)]
mod tests;
