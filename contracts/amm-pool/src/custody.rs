use cosmwasm_std::{to_json_binary, Addr, BankMsg, Coin, CosmosMsg, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::state::AssetInfo;

/// Builds the message that moves `amount` of a token side from `owner` into the pool.
///
/// Native amounts arrive as attached funds and need no message. Zero amounts need none either.
pub(crate) fn create_collect_message(
    asset: &AssetInfo,
    owner: &Addr,
    pool: &Addr,
    amount: Uint128,
) -> StdResult<Option<CosmosMsg>> {
    if amount.is_zero() {
        return Ok(None);
    }
    match asset {
        AssetInfo::Native { .. } => Ok(None),
        AssetInfo::Cw20 { contract_addr } => Ok(Some(
            WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: owner.to_string(),
                    recipient: pool.to_string(),
                    amount,
                })?,
                funds: vec![],
            }
            .into(),
        )),
    }
}

/// Builds the message that pays `amount` of an asset out of the pool to `recipient`.
pub(crate) fn create_payout_message(
    asset: &AssetInfo,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<Option<CosmosMsg>> {
    if amount.is_zero() {
        return Ok(None);
    }
    match asset {
        AssetInfo::Native { denom } => Ok(Some(
            BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            }
            .into(),
        )),
        AssetInfo::Cw20 { contract_addr } => Ok(Some(
            WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            }
            .into(),
        )),
    }
}
