use amm_pool::state::AssetInfo;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const INSTANTIATE_POOL_REPLY_ID: u64 = 1;
pub const CONTRACT_NAME: &str = "crates.io:cw-pool-factory";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    /// Code ID of the pool contract
    pub pool_code_id: u64,
    /// Address with power to update the config
    pub admin: Addr,
}

#[cw_serde]
pub struct PoolRecord {
    pub asset_x: AssetInfo,
    pub asset_y: AssetInfo,
    pub address: Addr,
}

/// Registry key of an asset pair, identical for both orderings.
pub type PoolKey = (String, String);

// Assets of the pool whose instantiation reply is outstanding
pub const PENDING_POOL_INSTANCE: Item<(AssetInfo, AssetInfo)> = Item::new("pending_pool_instance");

pub const CONFIG: Item<Config> = Item::new("config");
pub const POOLS: Map<PoolKey, PoolRecord> = Map::new("pools");

/// Returns asset keys in a canonical (alphabetical) order.
pub(crate) fn pool_key(asset_x: &AssetInfo, asset_y: &AssetInfo) -> PoolKey {
    let (a, b) = (asset_x.key(), asset_y.key());
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
