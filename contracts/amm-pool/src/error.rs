use cosmwasm_std::{
    CheckedFromRatioError, CheckedMultiplyRatioError, ConversionOverflowError, DivideByZeroError,
    OverflowError, StdError, Uint128,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    DivideByZeroError(#[from] DivideByZeroError),

    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("{0}")]
    ConversionOverflowError(#[from] ConversionOverflowError),

    #[error("{0}")]
    CheckedMultiplyRatioError(#[from] CheckedMultiplyRatioError),

    #[error("{0}")]
    CheckedFromRatioError(#[from] CheckedFromRatioError),

    #[error("Pool is not initialized")]
    NotInitialized {},

    #[error("Pool is already initialized")]
    AlreadyInitialized {},

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Insufficient amount: deposit requires {required} but only {supplied} was supplied")]
    InsufficientAmount {
        required: Uint128,
        supplied: Uint128,
    },

    #[error("Insufficient shares: requested {requested}, provider holds {available}")]
    InsufficientShares {
        requested: Uint128,
        available: Uint128,
    },

    #[error("Insufficient liquidity: {reason}")]
    InsufficientLiquidity { reason: String },

    #[error("Withdrawal would empty a reserve while shares remain outstanding")]
    EmptyPoolWithdrawal {},

    #[error("Output amount {output} less than minimum requested {min_output}")]
    SlippageExceeded {
        output: Uint128,
        min_output: Uint128,
    },

    #[error("Operation {operation} is not supported by a {pool_kind} pool")]
    UnsupportedOperation {
        operation: String,
        pool_kind: String,
    },

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Invalid fee {numerator}/{denominator}: numerator must be below a non-zero denominator")]
    InvalidFee { numerator: u64, denominator: u64 },

    #[error("Pool assets must be different")]
    IdenticalAssets {},

    #[error("Native denom cannot be empty")]
    EmptyDenom {},

    #[error("Constant product decreased from {before} to {after}")]
    InvariantViolation { before: String, after: String },
}

impl ContractError {
    pub(crate) fn invalid_amount(reason: &str) -> Self {
        ContractError::InvalidAmount {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn insufficient_liquidity(reason: &str) -> Self {
        ContractError::InsufficientLiquidity {
            reason: reason.to_string(),
        }
    }
}
