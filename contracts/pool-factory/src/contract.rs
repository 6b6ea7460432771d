use crate::error::ContractError;
use crate::execute::{execute_create_pool, execute_update_admin, execute_update_pool_code_id};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{query_config, query_pool_address, query_pools};
use crate::reply::handle_pool_instantiate_reply;
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult,
};

// --- Entry Points ---

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    let admin_addr = deps.api.addr_validate(&msg.admin)?;

    let cfg = Config {
        pool_code_id: msg.pool_code_id,
        admin: admin_addr.clone(),
    };

    CONFIG.save(deps.storage, &cfg)?;
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin_addr.to_string())
        .add_attribute("pool_code_id", cfg.pool_code_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreatePool {
            kind,
            fee,
            seed_shares,
        } => execute_create_pool(deps, env, info, kind, fee, seed_shares),
        ExecuteMsg::UpdateAdmin { new_admin } => execute_update_admin(deps, info, new_admin),
        ExecuteMsg::UpdatePoolCodeId { new_code_id } => {
            execute_update_pool_code_id(deps, info, new_code_id)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_pool_instantiate_reply(deps, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::PoolAddress { asset_x, asset_y } => {
            to_json_binary(&query_pool_address(deps, asset_x, asset_y)?)
        }
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Pools { start_after, limit } => {
            to_json_binary(&query_pools(deps, start_after, limit)?)
        }
    }
}
