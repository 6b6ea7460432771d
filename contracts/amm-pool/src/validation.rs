use crate::error::ContractError;
use crate::state::{FeeConfig, PoolKind};
use cosmwasm_std::{MessageInfo, Uint128};

/// Rejects fees that would take the whole input or divide by zero.
pub fn validate_fee(fee: &FeeConfig) -> Result<(), ContractError> {
    if fee.denominator == 0 || fee.numerator >= fee.denominator {
        return Err(ContractError::InvalidFee {
            numerator: fee.numerator,
            denominator: fee.denominator,
        });
    }
    Ok(())
}

/// Rejects pools whose two sides are the same asset or whose native side has no denom.
pub fn validate_pool_kind(kind: &PoolKind) -> Result<(), ContractError> {
    match kind {
        PoolKind::SingleAsset { native_denom, .. } if native_denom.is_empty() => {
            Err(ContractError::EmptyDenom {})
        }
        PoolKind::Pair { token_a, token_b } if token_a == token_b => {
            Err(ContractError::IdenticalAssets {})
        }
        _ => Ok(()),
    }
}

/// Checks the funds attached to a message.
///
/// With `expected = Some((denom, amount))` exactly that coin must be attached and nothing
/// else. With `None` no funds may be attached.
pub(crate) fn validate_native_funds(
    info: &MessageInfo,
    expected: Option<(&str, Uint128)>,
) -> Result<(), ContractError> {
    match expected {
        None => {
            if info.funds.iter().any(|c| !c.amount.is_zero()) {
                return Err(ContractError::InvalidFunds {
                    reason: "this operation does not accept native funds".to_string(),
                });
            }
            Ok(())
        }
        Some((denom, amount)) => {
            let mut sent = Uint128::zero();
            for coin in info.funds.iter() {
                if coin.denom == denom {
                    sent = sent.checked_add(coin.amount)?;
                } else if !coin.amount.is_zero() {
                    return Err(ContractError::InvalidFunds {
                        reason: format!("unexpected denom {}", coin.denom),
                    });
                }
            }
            if sent != amount {
                return Err(ContractError::InvalidFunds {
                    reason: format!("expected {}{} but received {}{}", amount, denom, sent, denom),
                });
            }
            Ok(())
        }
    }
}
