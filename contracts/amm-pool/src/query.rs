use cosmwasm_std::{Decimal, Deps, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    LiquidityResponse, PoolInfoResponse, ProviderShares, ProvidersResponse, ReservesResponse,
    SimulateSwapResponse, SpotPriceResponse,
};
use crate::pool::SwapDirection;
use crate::state::{LIQUIDITY, POOL_CONFIG, POOL_STATE};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

// --- Query Handler Implementations ---

pub(crate) fn query_liquidity(deps: Deps, provider: String) -> StdResult<LiquidityResponse> {
    let provider = deps.api.addr_validate(&provider)?;
    let shares = LIQUIDITY
        .may_load(deps.storage, &provider)?
        .unwrap_or_default();
    Ok(LiquidityResponse { shares })
}

pub(crate) fn query_total_liquidity(deps: Deps) -> StdResult<LiquidityResponse> {
    let pool = POOL_STATE.load(deps.storage)?;
    Ok(LiquidityResponse {
        shares: pool.total_shares,
    })
}

pub(crate) fn query_reserves(deps: Deps) -> StdResult<ReservesResponse> {
    let (reserve_x, reserve_y) = POOL_STATE.load(deps.storage)?.reserves();
    Ok(ReservesResponse {
        reserve_x,
        reserve_y,
    })
}

pub(crate) fn query_pool_info(deps: Deps) -> StdResult<PoolInfoResponse> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let pool = POOL_STATE.load(deps.storage)?;
    Ok(PoolInfoResponse {
        kind: cfg.kind,
        fee: cfg.fee,
        seed_shares: cfg.seed_shares,
        factory: cfg.factory,
        initialized: pool.initialized,
    })
}

pub(crate) fn query_simulate_swap(
    deps: Deps,
    direction: SwapDirection,
    amount: Uint128,
) -> StdResult<SimulateSwapResponse> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let pool = POOL_STATE.load(deps.storage)?;
    let outcome = pool
        .quote_swap(cfg.fee, direction, amount)
        .map_err(into_std_error)?;
    Ok(SimulateSwapResponse {
        output: outcome.output,
        reserve_x: outcome.reserve_x,
        reserve_y: outcome.reserve_y,
    })
}

pub(crate) fn query_spot_price(deps: Deps) -> StdResult<SpotPriceResponse> {
    let pool = POOL_STATE.load(deps.storage)?;
    if !pool.initialized || pool.reserve_x.is_zero() || pool.reserve_y.is_zero() {
        return Err(into_std_error(ContractError::NotInitialized {}));
    }
    let price_x_in_y = Decimal::checked_from_ratio(pool.reserve_y, pool.reserve_x)
        .map_err(|e| into_std_error(e.into()))?;
    let price_y_in_x = Decimal::checked_from_ratio(pool.reserve_x, pool.reserve_y)
        .map_err(|e| into_std_error(e.into()))?;
    Ok(SpotPriceResponse {
        price_x_in_y,
        price_y_in_x,
    })
}

pub(crate) fn query_providers(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ProvidersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let providers = LIQUIDITY
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(provider, shares)| ProviderShares { provider, shares }))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(ProvidersResponse { providers })
}

// --- Internal Helpers ---

fn into_std_error(err: ContractError) -> StdError {
    match err {
        ContractError::Std(err) => err,
        other => StdError::generic_err(other.to_string()),
    }
}
