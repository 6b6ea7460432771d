use crate::error::ContractError;
use crate::events::PoolCreatedEvent;
use crate::state::{
    pool_key, PoolRecord, CONFIG, INSTANTIATE_POOL_REPLY_ID, PENDING_POOL_INSTANCE, POOLS,
};
use cosmwasm_std::{DepsMut, Reply, Response, StdError};
use cw_utils::parse_instantiate_response_data;

pub fn handle_pool_instantiate_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != INSTANTIATE_POOL_REPLY_ID {
        return Err(ContractError::UnknownReplyId { id: msg.id });
    }

    let result = msg.result.into_result().map_err(StdError::generic_err)?;
    #[allow(deprecated)]
    let data = result.data.ok_or(ContractError::MissingReplyData {})?;
    let res = parse_instantiate_response_data(&data)?;

    let pool_contract_addr = deps.api.addr_validate(&res.contract_address)?;

    let (asset_x, asset_y) = PENDING_POOL_INSTANCE.load(deps.storage)?;
    let key = pool_key(&asset_x, &asset_y);
    let record = PoolRecord {
        asset_x: asset_x.clone(),
        asset_y: asset_y.clone(),
        address: pool_contract_addr.clone(),
    };
    POOLS.save(deps.storage, key, &record)?;

    PENDING_POOL_INSTANCE.remove(deps.storage);

    let cfg = CONFIG.load(deps.storage)?;
    let event = PoolCreatedEvent {
        pool_addr: pool_contract_addr.clone(),
        asset_x: asset_x.key(),
        asset_y: asset_y.key(),
        pool_code_id: cfg.pool_code_id,
    };

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "pool_instance_created")
        .add_attribute("pool_contract_address", pool_contract_addr.to_string()))
}
