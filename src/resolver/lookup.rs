use std::{collections::HashMap, future::Future, path::Path};

use dashmap::DashMap;

use crate::{
    error::LookupError,
    types::{Asset, AssetId},
};

/// Asset metadata service.
///
/// Given a list of distinct asset identifiers, returns the descriptors it
/// knows about, in any order. Implementations are expected to accept the
/// native asset identifier.
pub trait AssetLookup {
    fn fetch(
        &self,
        ids: &[AssetId],
    ) -> impl Future<Output = Result<Vec<Asset>, LookupError>> + Send;
}

/// In-memory set of asset descriptors.
///
/// Always knows the native asset.
#[derive(Clone, Debug)]
pub struct StaticAssets {
    assets: HashMap<AssetId, Asset>,
}

impl Default for StaticAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticAssets {
    pub fn new() -> Self {
        Self {
            assets: HashMap::from([(AssetId::native(), Asset::native())]),
        }
    }

    pub fn with(mut self, asset: Asset) -> Self {
        self.insert(asset);
        self
    }

    pub fn insert(&mut self, asset: Asset) {
        self.assets.insert(asset.id.clone(), asset);
    }

    /// Descriptors from a JSON array, e.g. a saved asset service response.
    pub fn from_json(json: &[u8]) -> Result<Self, LookupError> {
        let assets: Vec<Asset> = serde_json::from_slice(json)?;
        Ok(assets.into_iter().fold(Self::new(), Self::with))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        Self::from_json(&tokio::fs::read(path).await?)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetLookup for StaticAssets {
    async fn fetch(&self, ids: &[AssetId]) -> Result<Vec<Asset>, LookupError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.assets.get(id).cloned())
            .collect())
    }
}

/// Caches descriptors of another lookup.
///
/// Descriptors never change once issued, so cached entries are never
/// invalidated. Only identifiers missing from the cache are forwarded, in a
/// single call.
#[derive(Debug)]
pub struct CachedLookup<L> {
    inner: L,
    cache: DashMap<AssetId, Asset>,
}

impl<L> CachedLookup<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: AssetLookup + Sync> AssetLookup for CachedLookup<L> {
    async fn fetch(&self, ids: &[AssetId]) -> Result<Vec<Asset>, LookupError> {
        let misses: Vec<AssetId> = ids
            .iter()
            .filter(|id| !self.cache.contains_key(*id))
            .cloned()
            .collect();

        if !misses.is_empty() {
            for asset in self.inner.fetch(&misses).await? {
                self.cache.insert(asset.id.clone(), asset);
            }
        }

        Ok(ids
            .iter()
            .filter_map(|id| self.cache.get(id).map(|entry| entry.value().clone()))
            .collect())
    }
}
