mod asset;
mod money;
mod order;
mod recipient;
mod tx_type;

pub use asset::{Asset, AssetId, AssetMap, AssetPair, NATIVE_ASSET_ID};
pub use money::Money;
pub use order::OrderRole;
pub use recipient::Recipient;
pub use tx_type::TxType;
