use amm_pool::msg::{InstantiateMsg as PoolInstantiateMsg, PoolKindMsg};
use amm_pool::state::{FeeConfig, SeedShares};
use amm_pool::validation::{validate_fee, validate_pool_kind};
use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response, SubMsg, WasmMsg};

use crate::error::ContractError;
use crate::state::{pool_key, CONFIG, INSTANTIATE_POOL_REPLY_ID, PENDING_POOL_INSTANCE, POOLS};

// --- Execute Handlers ---

pub(crate) fn execute_create_pool(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    kind: PoolKindMsg,
    fee: Option<FeeConfig>,
    seed_shares: Option<SeedShares>,
) -> Result<Response, ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::FundsSentOnCreatePool {});
    }
    let validated = kind.validate(deps.api)?;
    validate_pool_kind(&validated)?;
    if let Some(fee) = &fee {
        validate_fee(fee)?;
    }

    let (asset_x, asset_y) = validated.assets();
    let key = pool_key(&asset_x, &asset_y);
    if POOLS.has(deps.storage, key.clone()) {
        return Err(ContractError::PoolAlreadyExists {
            asset_x: key.0,
            asset_y: key.1,
        });
    }
    if PENDING_POOL_INSTANCE.may_load(deps.storage)?.is_some() {
        return Err(ContractError::PoolCreationPending {});
    }

    let cfg = CONFIG.load(deps.storage)?;
    let instantiate_pool_msg = PoolInstantiateMsg {
        kind,
        fee,
        seed_shares,
        factory_addr: Some(env.contract.address.to_string()),
    };
    let submsg = SubMsg::reply_on_success(
        WasmMsg::Instantiate {
            admin: Some(env.contract.address.to_string()),
            code_id: cfg.pool_code_id,
            msg: to_json_binary(&instantiate_pool_msg)?,
            funds: vec![],
            label: format!("AMM Pool-{}-{}", asset_x, asset_y),
        },
        INSTANTIATE_POOL_REPLY_ID,
    );

    PENDING_POOL_INSTANCE.save(deps.storage, &(asset_x.clone(), asset_y.clone()))?;

    Ok(Response::new()
        .add_submessage(submsg)
        .add_attribute("action", "create_pool")
        .add_attribute("pool_kind", validated.name())
        .add_attribute("pool_code_id", cfg.pool_code_id.to_string())
        .add_attribute("asset_x", asset_x.key())
        .add_attribute("asset_y", asset_y.key()))
}

// --- Admin Handlers ---

pub(crate) fn execute_update_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    let mut cfg = CONFIG.load(deps.storage)?;
    if cfg.admin != info.sender {
        return Err(ContractError::Unauthorized {});
    }
    cfg.admin = deps.api.addr_validate(&new_admin)?;
    CONFIG.save(deps.storage, &cfg)?;
    Ok(Response::new()
        .add_attribute("action", "update_admin")
        .add_attribute("new_admin", cfg.admin.to_string()))
}

pub(crate) fn execute_update_pool_code_id(
    deps: DepsMut,
    info: MessageInfo,
    new_code_id: u64,
) -> Result<Response, ContractError> {
    let mut cfg = CONFIG.load(deps.storage)?;
    if cfg.admin != info.sender {
        return Err(ContractError::Unauthorized {});
    }
    cfg.pool_code_id = new_code_id;
    CONFIG.save(deps.storage, &cfg)?;
    Ok(Response::new()
        .add_attribute("action", "update_pool_code_id")
        .add_attribute("new_code_id", new_code_id.to_string()))
}
