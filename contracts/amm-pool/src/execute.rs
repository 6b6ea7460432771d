use cosmwasm_std::{Addr, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::custody::{create_collect_message, create_payout_message};
use crate::error::ContractError;
use crate::events::{LiquidityAddedEvent, LiquidityRemovedEvent, PoolInitializedEvent, SwapEvent};
use crate::msg::InstantiateMsg;
use crate::pool::{PoolState, SwapDirection};
use crate::state::{
    AssetInfo, PoolConfig, PoolKind, StorageLedger, SwapRoute, CONTRACT_NAME, CONTRACT_VERSION,
    POOL_CONFIG, POOL_STATE,
};
use crate::validation::{validate_fee, validate_native_funds, validate_pool_kind};

// --- Instantiate Handler ---
pub(crate) fn execute_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let kind = msg.kind.validate(deps.api)?;
    validate_pool_kind(&kind)?;
    let fee = msg.fee.unwrap_or_default();
    validate_fee(&fee)?;
    let factory = msg
        .factory_addr
        .as_deref()
        .map(|addr| deps.api.addr_validate(addr))
        .transpose()?;

    let (asset_x, asset_y) = kind.assets();
    let cfg = PoolConfig {
        kind,
        fee,
        seed_shares: msg.seed_shares.unwrap_or_default(),
        factory,
    };
    POOL_CONFIG.save(deps.storage, &cfg)?;
    POOL_STATE.save(deps.storage, &PoolState::default())?;
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate_pool_contract")
        .add_attribute("pool_kind", cfg.kind.name())
        .add_attribute("asset_x", asset_x.key())
        .add_attribute("asset_y", asset_y.key())
        .add_attribute(
            "fee",
            format!("{}/{}", cfg.fee.numerator, cfg.fee.denominator),
        ))
}

// --- Execute Handler Implementations ---

pub(crate) fn execute_init(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount_x: Uint128,
    amount_y: Uint128,
) -> Result<Response, ContractError> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let mut pool = POOL_STATE.load(deps.storage)?;
    let (asset_x, asset_y) = cfg.kind.assets();
    validate_native_funds(&info, expected_native(&asset_x, amount_x))?;

    let shares = pool.initialize(
        &mut StorageLedger::new(deps.storage),
        &info.sender,
        amount_x,
        amount_y,
        cfg.seed_shares,
    )?;
    POOL_STATE.save(deps.storage, &pool)?;

    let messages = collect_messages(
        &[(&asset_x, amount_x), (&asset_y, amount_y)],
        &info.sender,
        &env.contract.address,
    )?;
    let event = PoolInitializedEvent {
        provider: info.sender.clone(),
        amount_x,
        amount_y,
        shares_minted: shares,
    };

    Ok(Response::new()
        .add_messages(messages)
        .add_event(event)
        .add_attribute("action", "init")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("shares_minted", shares.to_string()))
}

pub(crate) fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount_x: Uint128,
    max_amount_y: Option<Uint128>,
) -> Result<Response, ContractError> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    // Only the single-asset pool derives the token side without a cap
    if matches!(cfg.kind, PoolKind::Pair { .. }) && max_amount_y.is_none() {
        return Err(ContractError::invalid_amount(
            "pair pool deposit requires amount_y",
        ));
    }
    let mut pool = POOL_STATE.load(deps.storage)?;
    let (asset_x, asset_y) = cfg.kind.assets();
    validate_native_funds(&info, expected_native(&asset_x, amount_x))?;

    let outcome = pool.deposit(
        &mut StorageLedger::new(deps.storage),
        &info.sender,
        amount_x,
        max_amount_y,
    )?;
    POOL_STATE.save(deps.storage, &pool)?;

    let messages = collect_messages(
        &[(&asset_x, outcome.amount_x), (&asset_y, outcome.amount_y)],
        &info.sender,
        &env.contract.address,
    )?;
    let event = LiquidityAddedEvent {
        provider: info.sender.clone(),
        amount_x: outcome.amount_x,
        amount_y: outcome.amount_y,
        shares_minted: outcome.shares_minted,
    };

    Ok(Response::new()
        .add_messages(messages)
        .add_event(event)
        .add_attribute("action", "deposit")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("shares_minted", outcome.shares_minted.to_string()))
}

pub(crate) fn execute_withdraw(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    shares: Uint128,
) -> Result<Response, ContractError> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let mut pool = POOL_STATE.load(deps.storage)?;
    validate_native_funds(&info, None)?;

    let outcome = pool.withdraw(&mut StorageLedger::new(deps.storage), &info.sender, shares)?;
    POOL_STATE.save(deps.storage, &pool)?;

    let (asset_x, asset_y) = cfg.kind.assets();
    let messages: Vec<CosmosMsg> = [
        create_payout_message(&asset_x, &info.sender, outcome.payout_x)?,
        create_payout_message(&asset_y, &info.sender, outcome.payout_y)?,
    ]
    .into_iter()
    .flatten()
    .collect();
    let event = LiquidityRemovedEvent {
        provider: info.sender.clone(),
        shares_burned: outcome.shares_burned,
        amount_x: outcome.payout_x,
        amount_y: outcome.payout_y,
    };

    Ok(Response::new()
        .add_messages(messages)
        .add_event(event)
        .add_attribute("action", "withdraw")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("shares_burned", outcome.shares_burned.to_string()))
}

pub(crate) fn execute_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    route: SwapRoute,
    amount: Uint128,
    min_output: Option<Uint128>,
) -> Result<Response, ContractError> {
    let cfg = POOL_CONFIG.load(deps.storage)?;
    let direction = route.direction_for(&cfg.kind)?;
    let mut pool = POOL_STATE.load(deps.storage)?;

    let (asset_x, asset_y) = cfg.kind.assets();
    let (offer_asset, ask_asset) = match direction {
        SwapDirection::XToY => (asset_x, asset_y),
        SwapDirection::YToX => (asset_y, asset_x),
    };
    validate_native_funds(&info, expected_native(&offer_asset, amount))?;

    let outcome = pool.swap(cfg.fee, direction, amount, min_output)?;
    POOL_STATE.save(deps.storage, &pool)?;

    let mut messages = collect_messages(
        &[(&offer_asset, outcome.input)],
        &info.sender,
        &env.contract.address,
    )?;
    messages.extend(create_payout_message(&ask_asset, &info.sender, outcome.output)?);
    let event = SwapEvent {
        route,
        trader: info.sender.clone(),
        input: outcome.input,
        output: outcome.output,
        reserve_x: outcome.reserve_x,
        reserve_y: outcome.reserve_y,
    };

    Ok(Response::new()
        .add_messages(messages)
        .add_event(event)
        .add_attribute("action", route.as_str())
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("offer_asset", offer_asset.key())
        .add_attribute("ask_asset", ask_asset.key())
        .add_attribute("input", outcome.input.to_string())
        .add_attribute("output", outcome.output.to_string()))
}

// --- Internal Helpers ---

/// The native coin a message must carry when `asset` is the side being paid in.
fn expected_native(asset: &AssetInfo, amount: Uint128) -> Option<(&str, Uint128)> {
    asset.native_denom().map(|denom| (denom, amount))
}

fn collect_messages(
    sides: &[(&AssetInfo, Uint128)],
    owner: &Addr,
    pool: &Addr,
) -> Result<Vec<CosmosMsg>, ContractError> {
    let mut messages = Vec::with_capacity(sides.len());
    for (asset, amount) in sides {
        if let Some(msg) = create_collect_message(asset, owner, pool, *amount)? {
            messages.push(msg);
        }
    }
    Ok(messages)
}
