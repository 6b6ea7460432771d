use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;
use crate::pool::{PoolState, ShareLedger, SwapDirection};

/// One side of a pool: either a bank denom or a cw20 token contract.
#[cw_serde]
pub enum AssetInfo {
    Native { denom: String },
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    /// Stable identifier used for registry keys and event attributes.
    pub fn key(&self) -> String {
        match self {
            AssetInfo::Native { denom } => format!("native:{}", denom),
            AssetInfo::Cw20 { contract_addr } => format!("cw20:{}", contract_addr),
        }
    }

    pub fn native_denom(&self) -> Option<&str> {
        match self {
            AssetInfo::Native { denom } => Some(denom),
            AssetInfo::Cw20 { .. } => None,
        }
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::Native { denom } => write!(f, "{}", denom),
            AssetInfo::Cw20 { contract_addr } => write!(f, "{}", contract_addr),
        }
    }
}

/// Which assets a pool holds. Chosen once at instantiation.
///
/// Asset X is the native side of a single-asset pool and token A of a pair pool.
#[cw_serde]
pub enum PoolKind {
    SingleAsset { native_denom: String, token: Addr },
    Pair { token_a: Addr, token_b: Addr },
}

impl PoolKind {
    /// Returns `(asset_x, asset_y)`.
    pub fn assets(&self) -> (AssetInfo, AssetInfo) {
        match self {
            PoolKind::SingleAsset {
                native_denom,
                token,
            } => (
                AssetInfo::Native {
                    denom: native_denom.clone(),
                },
                AssetInfo::Cw20 {
                    contract_addr: token.clone(),
                },
            ),
            PoolKind::Pair { token_a, token_b } => (
                AssetInfo::Cw20 {
                    contract_addr: token_a.clone(),
                },
                AssetInfo::Cw20 {
                    contract_addr: token_b.clone(),
                },
            ),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PoolKind::SingleAsset { .. } => "single-asset",
            PoolKind::Pair { .. } => "pair",
        }
    }
}

/// Named swap entry points. Each one is bound to a pool kind and a direction.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum SwapRoute {
    EthToToken,
    TokenToEth,
    TokenAToTokenB,
    TokenBToTokenA,
}

impl SwapRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapRoute::EthToToken => "eth_to_token",
            SwapRoute::TokenToEth => "token_to_eth",
            SwapRoute::TokenAToTokenB => "token_a_to_token_b",
            SwapRoute::TokenBToTokenA => "token_b_to_token_a",
        }
    }

    /// Resolves the route against the pool kind.
    pub fn direction_for(&self, kind: &PoolKind) -> Result<SwapDirection, ContractError> {
        match (self, kind) {
            (SwapRoute::EthToToken, PoolKind::SingleAsset { .. })
            | (SwapRoute::TokenAToTokenB, PoolKind::Pair { .. }) => Ok(SwapDirection::XToY),
            (SwapRoute::TokenToEth, PoolKind::SingleAsset { .. })
            | (SwapRoute::TokenBToTokenA, PoolKind::Pair { .. }) => Ok(SwapDirection::YToX),
            _ => Err(ContractError::UnsupportedOperation {
                operation: self.as_str().to_string(),
                pool_kind: kind.name().to_string(),
            }),
        }
    }
}

/// Proportional swap fee, `numerator / denominator` of the input.
#[cw_serde]
#[derive(Copy, Eq)]
pub struct FeeConfig {
    pub numerator: u64,
    pub denominator: u64,
}

impl Default for FeeConfig {
    fn default() -> Self {
        FeeConfig {
            numerator: DEFAULT_FEE_NUMERATOR,
            denominator: DEFAULT_FEE_DENOMINATOR,
        }
    }
}

/// How many shares the first provider receives.
#[cw_serde]
#[derive(Copy, Eq, Default)]
pub enum SeedShares {
    /// Seed shares equal the X-side amount.
    #[default]
    AssetX,
    /// Seed shares equal the Y-side amount.
    AssetY,
    /// Seed shares equal `isqrt(amount_x * amount_y)`.
    GeometricMean,
}

#[cw_serde]
pub struct PoolConfig {
    pub kind: PoolKind,
    pub fee: FeeConfig,
    pub seed_shares: SeedShares,
    pub factory: Option<Addr>,
}

pub const DEFAULT_FEE_NUMERATOR: u64 = 3;
pub const DEFAULT_FEE_DENOMINATOR: u64 = 1000;

// Reserves, total shares and the lifecycle flag live in one item so reads never tear.
pub const POOL_STATE: Item<PoolState> = Item::new("pool_state");
pub const POOL_CONFIG: Item<PoolConfig> = Item::new("pool_config");
pub const LIQUIDITY: Map<&Addr, Uint128> = Map::new("liquidity");

pub const CONTRACT_NAME: &str = "crates.io:cw-amm-pool";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Share ledger backed by contract storage.
pub struct StorageLedger<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> StorageLedger<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        StorageLedger { storage }
    }
}

impl ShareLedger for StorageLedger<'_> {
    fn shares_of(&self, provider: &Addr) -> Result<Uint128, ContractError> {
        Ok(LIQUIDITY
            .may_load(self.storage, provider)?
            .unwrap_or_default())
    }

    fn set_shares(&mut self, provider: &Addr, shares: Uint128) -> Result<(), ContractError> {
        if shares.is_zero() {
            LIQUIDITY.remove(self.storage, provider);
        } else {
            LIQUIDITY.save(self.storage, provider, &shares)?;
        }
        Ok(())
    }
}

/// Sums every provider balance.
#[cfg(test)]
pub(crate) fn sum_liquidity(storage: &dyn Storage) -> cosmwasm_std::StdResult<Uint128> {
    LIQUIDITY
        .range(storage, None, None, cosmwasm_std::Order::Ascending)
        .try_fold(Uint128::zero(), |acc, item| {
            let (_, shares) = item?;
            Ok(acc.checked_add(shares)?)
        })
}
