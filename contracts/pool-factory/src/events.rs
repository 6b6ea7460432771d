use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event};

#[cw_serde]
pub struct PoolCreatedEvent {
    pub pool_addr: Addr,
    pub asset_x: String,
    pub asset_y: String,
    pub pool_code_id: u64,
}

impl From<PoolCreatedEvent> for Event {
    fn from(val: PoolCreatedEvent) -> Self {
        Event::new("pool_created")
            .add_attribute("pool_addr", val.pool_addr.into_string())
            .add_attribute("asset_x", val.asset_x)
            .add_attribute("asset_y", val.asset_y)
            .add_attribute("pool_code_id", val.pool_code_id.to_string())
    }
}
