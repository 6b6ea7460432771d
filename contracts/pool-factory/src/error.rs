use cosmwasm_std::StdError;
use cw_utils::ParseReplyError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Missing reply data")]
    MissingReplyData {},

    #[error("Error parsing instantiate reply: {0}")]
    ParseInstantiateReplyError(#[from] ParseReplyError),

    #[error("Cannot send funds when calling CreatePool. Seed the pool with Init once it exists.")]
    FundsSentOnCreatePool {},

    #[error("Another pool creation is already pending. Please wait.")]
    PoolCreationPending {},

    #[error("Pool assets must be different")]
    IdenticalAssets {},

    #[error("Native denom must not be empty")]
    EmptyDenom {},

    #[error("Pool already exists for assets {asset_x} and {asset_y}")]
    PoolAlreadyExists { asset_x: String, asset_y: String },
}

impl From<amm_pool::ContractError> for ContractError {
    fn from(err: amm_pool::ContractError) -> Self {
        match err {
            amm_pool::ContractError::IdenticalAssets {} => ContractError::IdenticalAssets {},
            amm_pool::ContractError::EmptyDenom {} => ContractError::EmptyDenom {},
            amm_pool::ContractError::Std(err) => ContractError::Std(err),
            other => ContractError::Std(StdError::generic_err(other.to_string())),
        }
    }
}
