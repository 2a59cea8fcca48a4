use std::{collections::HashMap, fmt, sync::Arc};

use serde::{Deserialize, Serialize, ser::SerializeStruct};

use crate::{error::NormalizeError, num};

/// Identifier of the chain's native asset.
pub const NATIVE_ASSET_ID: &str = "WAVES";

/// Asset identifier.
///
/// Absent and empty identifiers on the wire denote the native asset,
/// [`AssetId::normalize`] maps them to [`NATIVE_ASSET_ID`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn native() -> Self {
        Self(NATIVE_ASSET_ID.to_string())
    }

    /// Normalize a raw (possibly absent) asset identifier.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::native(),
            Some(id) => Self(id.to_string()),
        }
    }

    pub fn is_native(&self) -> bool {
        self.0 == NATIVE_ASSET_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self::normalize(Some(value))
    }
}

impl From<String> for AssetId {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Self::native()
        } else {
            Self(value)
        }
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Asset descriptor as provided by the asset lookup service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    /// Number of fractional digits.
    pub precision: u8,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reissuable: bool,
    /// Total issued quantity, in coins.
    #[serde(default)]
    pub quantity: Option<String>,
}

impl Asset {
    pub fn new(id: impl Into<AssetId>, name: impl Into<String>, precision: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            precision,
            ticker: None,
            description: None,
            reissuable: false,
            quantity: None,
        }
    }

    /// Built-in descriptor of the native asset.
    pub fn native() -> Self {
        Self {
            id: AssetId::native(),
            name: "Waves".to_string(),
            precision: 8,
            ticker: Some(NATIVE_ASSET_ID.to_string()),
            description: None,
            reissuable: false,
            quantity: None,
        }
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Ticker if the asset has one, name otherwise.
    pub fn display_name(&self) -> &str {
        self.ticker.as_deref().unwrap_or(&self.name)
    }

    pub fn converter(&self) -> num::Converter {
        num::Converter::new(self.precision)
    }
}

/// Resolved pair of an exchange order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPair {
    pub amount_asset: Arc<Asset>,
    pub price_asset: Arc<Asset>,
}

impl AssetPair {
    pub fn new(amount_asset: Arc<Asset>, price_asset: Arc<Asset>) -> Self {
        Self {
            amount_asset,
            price_asset,
        }
    }

    /// Converter for raw matcher prices of the pair.
    pub fn price_converter(&self) -> num::Converter {
        num::Converter::matcher_price(self.amount_asset.precision, self.price_asset.precision)
    }
}

impl Serialize for AssetPair {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("AssetPair", 2)?;
        s.serialize_field("amountAsset", &self.amount_asset.id)?;
        s.serialize_field("priceAsset", &self.price_asset.id)?;
        s.end()
    }
}

/// Resolved mapping from asset identifier to asset descriptor.
#[derive(Clone, Debug, Default)]
pub struct AssetMap {
    assets: HashMap<AssetId, Arc<Asset>>,
}

impl AssetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor keyed by its own identifier.
    pub fn insert(&mut self, asset: Asset) -> Option<Arc<Asset>> {
        self.assets.insert(asset.id.clone(), Arc::new(asset))
    }

    pub fn get(&self, id: &AssetId) -> Result<&Arc<Asset>, NormalizeError> {
        self.assets
            .get(id)
            .ok_or_else(|| NormalizeError::MissingAssetDescriptor(id.clone()))
    }

    /// Descriptor for a raw, not yet normalized identifier.
    pub fn get_raw(&self, raw: Option<&str>) -> Result<&Arc<Asset>, NormalizeError> {
        self.get(&AssetId::normalize(raw))
    }

    pub fn native(&self) -> Result<&Arc<Asset>, NormalizeError> {
        self.get(&AssetId::native())
    }

    pub fn contains(&self, id: &AssetId) -> bool {
        self.assets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, &Arc<Asset>)> {
        self.assets.iter()
    }
}

impl FromIterator<Asset> for AssetMap {
    fn from_iter<T: IntoIterator<Item = Asset>>(iter: T) -> Self {
        let mut map = Self::new();
        for asset in iter {
            map.insert(asset);
        }
        map
    }
}
