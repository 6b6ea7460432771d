use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event, Uint128};

use crate::state::SwapRoute;

// Events specific to this pool contract

#[cw_serde]
pub struct PoolInitializedEvent {
    pub provider: Addr,
    pub amount_x: Uint128,
    pub amount_y: Uint128,
    pub shares_minted: Uint128,
}

impl From<PoolInitializedEvent> for Event {
    fn from(val: PoolInitializedEvent) -> Self {
        Event::new("pool_initialized")
            .add_attribute("provider", val.provider.into_string())
            .add_attribute("amount_x", val.amount_x.to_string())
            .add_attribute("amount_y", val.amount_y.to_string())
            .add_attribute("shares_minted", val.shares_minted.to_string())
    }
}

#[cw_serde]
pub struct LiquidityAddedEvent {
    pub provider: Addr,
    pub amount_x: Uint128,
    pub amount_y: Uint128,
    pub shares_minted: Uint128,
}

impl From<LiquidityAddedEvent> for Event {
    fn from(val: LiquidityAddedEvent) -> Self {
        Event::new("liquidity_added")
            .add_attribute("provider", val.provider.into_string())
            .add_attribute("amount_x", val.amount_x.to_string())
            .add_attribute("amount_y", val.amount_y.to_string())
            .add_attribute("shares_minted", val.shares_minted.to_string())
    }
}

#[cw_serde]
pub struct LiquidityRemovedEvent {
    pub provider: Addr,
    pub shares_burned: Uint128,
    pub amount_x: Uint128,
    pub amount_y: Uint128,
}

impl From<LiquidityRemovedEvent> for Event {
    fn from(val: LiquidityRemovedEvent) -> Self {
        Event::new("liquidity_removed")
            .add_attribute("provider", val.provider.into_string())
            .add_attribute("shares_burned", val.shares_burned.to_string())
            .add_attribute("amount_x", val.amount_x.to_string())
            .add_attribute("amount_y", val.amount_y.to_string())
    }
}

/// Emitted once per executed swap. The event type carries the route, e.g. `eth_to_token_swap`.
#[cw_serde]
pub struct SwapEvent {
    pub route: SwapRoute,
    pub trader: Addr,
    pub input: Uint128,
    pub output: Uint128,
    pub reserve_x: Uint128,
    pub reserve_y: Uint128,
}

impl From<SwapEvent> for Event {
    fn from(val: SwapEvent) -> Self {
        Event::new(format!("{}_swap", val.route.as_str()))
            .add_attribute("trader", val.trader.into_string())
            .add_attribute("input", val.input.to_string())
            .add_attribute("output", val.output.to_string())
            .add_attribute("reserve_x", val.reserve_x.to_string())
            .add_attribute("reserve_y", val.reserve_y.to_string())
    }
}
