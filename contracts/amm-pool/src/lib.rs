pub mod calculations;
pub mod contract;
pub mod custody;
pub mod error;
pub mod events;
pub mod execute;
pub mod msg;
pub mod pool;
pub mod query;
pub mod state;
pub mod validation;


pub use crate::error::ContractError;
