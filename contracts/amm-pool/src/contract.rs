use crate::execute::{
    execute_deposit, execute_init, execute_instantiate, execute_swap, execute_withdraw,
};
use crate::query::{
    query_liquidity, query_pool_info, query_providers, query_reserves, query_simulate_swap,
    query_spot_price, query_total_liquidity,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::SwapRoute;

// --- Entry Points ---

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    execute_instantiate(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Init { amount_x, amount_y } => execute_init(deps, env, info, amount_x, amount_y),
        ExecuteMsg::Deposit { amount_x, amount_y } => {
            execute_deposit(deps, env, info, amount_x, amount_y)
        }
        ExecuteMsg::Withdraw { shares } => execute_withdraw(deps, env, info, shares),
        ExecuteMsg::EthToToken { amount, min_output } => {
            execute_swap(deps, env, info, SwapRoute::EthToToken, amount, min_output)
        }
        ExecuteMsg::TokenToEth { amount, min_output } => {
            execute_swap(deps, env, info, SwapRoute::TokenToEth, amount, min_output)
        }
        ExecuteMsg::TokenAToTokenB { amount, min_output } => {
            execute_swap(deps, env, info, SwapRoute::TokenAToTokenB, amount, min_output)
        }
        ExecuteMsg::TokenBToTokenA { amount, min_output } => {
            execute_swap(deps, env, info, SwapRoute::TokenBToTokenA, amount, min_output)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetLiquidity { provider } => to_json_binary(&query_liquidity(deps, provider)?),
        QueryMsg::TotalLiquidity {} => to_json_binary(&query_total_liquidity(deps)?),
        QueryMsg::GetReserves {} => to_json_binary(&query_reserves(deps)?),
        QueryMsg::PoolInfo {} => to_json_binary(&query_pool_info(deps)?),
        QueryMsg::SimulateSwap { direction, amount } => {
            to_json_binary(&query_simulate_swap(deps, direction, amount)?)
        }
        QueryMsg::SpotPrice {} => to_json_binary(&query_spot_price(deps)?),
        QueryMsg::Providers { start_after, limit } => {
            to_json_binary(&query_providers(deps, start_after, limit)?)
        }
    }
}
