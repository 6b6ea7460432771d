use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Api, Decimal, StdResult, Uint128};

use crate::pool::SwapDirection;
use crate::state::{FeeConfig, PoolKind, SeedShares};

/// Unvalidated pool kind as it arrives in an instantiate message.
#[cw_serde]
pub enum PoolKindMsg {
    SingleAsset { native_denom: String, token: String },
    Pair { token_a: String, token_b: String },
}

impl PoolKindMsg {
    /// Validates contract addresses. Does not check for identical assets.
    pub fn validate(&self, api: &dyn Api) -> StdResult<PoolKind> {
        Ok(match self {
            PoolKindMsg::SingleAsset {
                native_denom,
                token,
            } => PoolKind::SingleAsset {
                native_denom: native_denom.clone(),
                token: api.addr_validate(token)?,
            },
            PoolKindMsg::Pair { token_a, token_b } => PoolKind::Pair {
                token_a: api.addr_validate(token_a)?,
                token_b: api.addr_validate(token_b)?,
            },
        })
    }
}

#[cw_serde]
pub struct InstantiateMsg {
    pub kind: PoolKindMsg,
    /// Defaults to 3/1000.
    pub fee: Option<FeeConfig>,
    /// Defaults to `SeedShares::AssetX`.
    pub seed_shares: Option<SeedShares>,
    /// Set by the factory that creates the pool.
    pub factory_addr: Option<String>,
}

/// Native-side amounts must be attached as funds. Token-side amounts are pulled with
/// `TransferFrom`, so the caller has to approve the pool beforehand.
#[cw_serde]
pub enum ExecuteMsg {
    /// Seeds an empty pool.
    Init {
        amount_x: Uint128,
        amount_y: Uint128,
    },
    /// Adds liquidity at the current ratio. `amount_y` caps the Y side; omitted means uncapped.
    Deposit {
        amount_x: Uint128,
        amount_y: Option<Uint128>,
    },
    Withdraw {
        shares: Uint128,
    },
    EthToToken {
        amount: Uint128,
        min_output: Option<Uint128>,
    },
    TokenToEth {
        amount: Uint128,
        min_output: Option<Uint128>,
    },
    TokenAToTokenB {
        amount: Uint128,
        min_output: Option<Uint128>,
    },
    TokenBToTokenA {
        amount: Uint128,
        min_output: Option<Uint128>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(LiquidityResponse)]
    GetLiquidity { provider: String },
    #[returns(LiquidityResponse)]
    TotalLiquidity {},
    #[returns(ReservesResponse)]
    GetReserves {},
    #[returns(PoolInfoResponse)]
    PoolInfo {},
    #[returns(SimulateSwapResponse)]
    SimulateSwap {
        direction: SwapDirection,
        amount: Uint128,
    },
    #[returns(SpotPriceResponse)]
    SpotPrice {},
    #[returns(ProvidersResponse)]
    Providers {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct LiquidityResponse {
    pub shares: Uint128,
}

#[cw_serde]
pub struct ReservesResponse {
    pub reserve_x: Uint128,
    pub reserve_y: Uint128,
}

#[cw_serde]
pub struct PoolInfoResponse {
    pub kind: PoolKind,
    pub fee: FeeConfig,
    pub seed_shares: SeedShares,
    pub factory: Option<Addr>,
    pub initialized: bool,
}

#[cw_serde]
pub struct SimulateSwapResponse {
    pub output: Uint128,
    pub reserve_x: Uint128,
    pub reserve_y: Uint128,
}

/// Display-only prices. Never used for reserve math.
#[cw_serde]
pub struct SpotPriceResponse {
    /// Units of Y per unit of X.
    pub price_x_in_y: Decimal,
    /// Units of X per unit of Y.
    pub price_y_in_x: Decimal,
}

#[cw_serde]
pub struct ProviderShares {
    pub provider: Addr,
    pub shares: Uint128,
}

#[cw_serde]
pub struct ProvidersResponse {
    pub providers: Vec<ProviderShares>,
}
