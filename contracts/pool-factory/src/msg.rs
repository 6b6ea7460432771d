use amm_pool::msg::PoolKindMsg;
use amm_pool::state::{AssetInfo, FeeConfig, SeedShares};
use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::state::{Config, PoolRecord};

/// Instantiate message for the Factory contract.
#[cw_serde]
pub struct InstantiateMsg {
    pub pool_code_id: u64,
    pub admin: String,
}

/// Execute messages for the Factory contract.
#[cw_serde]
pub enum ExecuteMsg {
    /// Instantiate a new pool. At most one pool exists per asset pair.
    CreatePool {
        kind: PoolKindMsg,
        fee: Option<FeeConfig>,
        seed_shares: Option<SeedShares>,
    },
    /// Update admin.
    UpdateAdmin { new_admin: String },
    /// Update the code ID used for new pools.
    UpdatePoolCodeId { new_code_id: u64 },
}

/// Factory Query Messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get the pool registered for an asset pair, in either order.
    #[returns(PoolRecord)]
    PoolAddress {
        asset_x: AssetInfo,
        asset_y: AssetInfo,
    },
    /// Get the factory configuration.
    #[returns(Config)]
    Config {},
    /// List registered pools ordered by key.
    #[returns(PoolsResponse)]
    Pools {
        start_after: Option<(AssetInfo, AssetInfo)>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct PoolsResponse {
    pub pools: Vec<PoolRecord>,
}
