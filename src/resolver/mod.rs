//! Asset resolver.
//!
//! Collects every asset a batch of transactions references and fetches all
//! their descriptors with a single [`AssetLookup`] call.

mod lookup;

pub use lookup::{AssetLookup, CachedLookup, StaticAssets};

use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
    error::ResolveError,
    raw::RawTransaction,
    types::{Asset, AssetId, AssetMap},
};

/// Distinct asset identifiers referenced by the batch.
///
/// The native asset comes first and is always present, the rest follow in
/// order of first appearance.
pub fn collect_asset_ids(transactions: &[RawTransaction]) -> Vec<AssetId> {
    std::iter::once(AssetId::native())
        .chain(transactions.iter().flat_map(RawTransaction::asset_ids))
        .unique()
        .collect()
}

/// Resolve descriptors of every asset the batch references.
///
/// Completeness is not enforced: identifiers the lookup does not return are
/// reported when a transaction needs them. The native asset falls back to the
/// built-in descriptor if the lookup omits it.
pub async fn resolve<L: AssetLookup>(
    transactions: &[RawTransaction],
    lookup: &L,
) -> Result<AssetMap, ResolveError> {
    let ids = collect_asset_ids(transactions);
    debug!(transactions = transactions.len(), assets = ids.len(), "resolving assets");

    let mut assets: AssetMap = lookup.fetch(&ids).await?.into_iter().collect();

    if !assets.contains(&AssetId::native()) {
        assets.insert(Asset::native());
    }

    let missing = ids.iter().filter(|id| !assets.contains(id)).collect_vec();
    if !missing.is_empty() {
        warn!(?missing, "asset lookup omitted descriptors");
    }

    Ok(assets)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{error::LookupError, testing};

    struct Failing;

    impl AssetLookup for Failing {
        async fn fetch(&self, _ids: &[AssetId]) -> Result<Vec<Asset>, LookupError> {
            Err(LookupError::Unavailable("connection refused".to_string()))
        }
    }

    #[test]
    fn test_collect_asset_ids() {
        let txs = vec![
            testing::raw(testing::transfer_json("t1", Some(testing::USD_ID), None, 100)),
            testing::raw(testing::transfer_json("t2", None, Some(testing::BTC_ID), 100)),
            testing::raw(testing::transfer_json("t3", Some(testing::USD_ID), None, 100)),
            testing::raw(json!({"type": 16, "id": "invoke", "dApp": "3P"})),
        ];
        assert_eq!(
            collect_asset_ids(&txs),
            vec![
                AssetId::native(),
                AssetId::from(testing::USD_ID),
                AssetId::from(testing::BTC_ID),
            ]
        );
    }

    #[test]
    fn test_empty_batch_resolves_native() {
        assert_eq!(collect_asset_ids(&[]), vec![AssetId::native()]);

        let assets = tokio_test::block_on(resolve(&[], &StaticAssets::new())).unwrap();
        assert_eq!(assets.len(), 1);
        assert!(assets.contains(&AssetId::native()));
    }

    #[test]
    fn test_native_falls_back_to_builtin() {
        struct Nothing;
        impl AssetLookup for Nothing {
            async fn fetch(&self, _ids: &[AssetId]) -> Result<Vec<Asset>, LookupError> {
                Ok(vec![])
            }
        }

        let txs = vec![testing::raw(testing::transfer_json(
            "t1",
            Some(testing::USD_ID),
            None,
            100,
        ))];
        let assets = tokio_test::block_on(resolve(&txs, &Nothing)).unwrap();
        assert_eq!(assets.native().unwrap().as_ref(), &Asset::native());
        assert!(!assets.contains(&AssetId::from(testing::USD_ID)));
    }

    #[test]
    fn test_lookup_failure_fails_batch() {
        let txs = vec![testing::raw(testing::transfer_json("t1", None, None, 1))];
        assert!(matches!(
            tokio_test::block_on(resolve(&txs, &Failing)),
            Err(ResolveError::Lookup(LookupError::Unavailable(_)))
        ));
    }
}
