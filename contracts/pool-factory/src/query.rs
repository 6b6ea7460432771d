use amm_pool::state::AssetInfo;
use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::PoolsResponse;
use crate::state::{pool_key, Config, PoolRecord, CONFIG, POOLS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

// --- Query Handlers ---

pub(crate) fn query_pool_address(
    deps: Deps,
    asset_x: AssetInfo,
    asset_y: AssetInfo,
) -> StdResult<PoolRecord> {
    POOLS.load(deps.storage, pool_key(&asset_x, &asset_y))
}

pub(crate) fn query_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub(crate) fn query_pools(
    deps: Deps,
    start_after: Option<(AssetInfo, AssetInfo)>,
    limit: Option<u32>,
) -> StdResult<PoolsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(|(x, y)| Bound::exclusive(pool_key(&x, &y)));
    let pools = POOLS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| record))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(PoolsResponse { pools })
}
