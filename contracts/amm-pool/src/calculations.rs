use crate::error::ContractError;
use crate::state::{FeeConfig, SeedShares};
use crate::validation::validate_fee;
use cosmwasm_std::{Isqrt, Uint128, Uint256, Uint512};

/// Calculates the shares minted to the first provider.
pub(crate) fn calculate_seed_shares(
    amount_x: Uint128,
    amount_y: Uint128,
    policy: SeedShares,
) -> Result<Uint128, ContractError> {
    if amount_x.is_zero() || amount_y.is_zero() {
        return Err(ContractError::invalid_amount(
            "initial amounts must be positive",
        ));
    }
    let shares = match policy {
        SeedShares::AssetX => amount_x,
        SeedShares::AssetY => amount_y,
        SeedShares::GeometricMean => Uint128::try_from(amount_x.full_mul(amount_y).isqrt())?,
    };
    if shares.is_zero() {
        return Err(ContractError::invalid_amount(
            "initial liquidity too low to mint shares",
        ));
    }
    Ok(shares)
}

/// Calculates `(shares_minted, required_y)` for a deposit of `amount_x`.
///
/// Both values truncate, so the pool never mints more than the contribution is worth.
pub(crate) fn calculate_deposit(
    amount_x: Uint128,
    reserve_x: Uint128,
    reserve_y: Uint128,
    total_shares: Uint128,
) -> Result<(Uint128, Uint128), ContractError> {
    if reserve_x.is_zero() || total_shares.is_zero() {
        return Err(ContractError::insufficient_liquidity(
            "pool has been drained",
        ));
    }
    let minted = total_shares.checked_multiply_ratio(amount_x, reserve_x)?;
    let required_y = reserve_y.checked_multiply_ratio(amount_x, reserve_x)?;
    Ok((minted, required_y))
}

/// Calculates the amounts of X and Y paid out for burning `shares`.
pub(crate) fn calculate_withdraw_amounts(
    shares: Uint128,
    reserve_x: Uint128,
    reserve_y: Uint128,
    total_shares: Uint128,
) -> Result<(Uint128, Uint128), ContractError> {
    if total_shares.is_zero() {
        return Err(ContractError::insufficient_liquidity(
            "pool has no outstanding shares",
        ));
    }
    let payout_x = reserve_x.checked_multiply_ratio(shares, total_shares)?;
    let payout_y = reserve_y.checked_multiply_ratio(shares, total_shares)?;
    Ok((payout_x, payout_y))
}

/// Calculates the swap output using the constant product formula with the fee taken on input.
///
/// `output = reserve_out * input * g / (reserve_in * d + input * g)` where `g = d - n`.
/// The effective input is never truncated on its own; only the final division rounds down.
pub(crate) fn calculate_swap_output(
    input: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
    fee: FeeConfig,
) -> Result<Uint128, ContractError> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(ContractError::insufficient_liquidity(
            "cannot swap against empty reserves",
        ));
    }
    validate_fee(&fee)?;
    let retained = Uint512::from(fee.denominator - fee.numerator);
    let input_with_fee = Uint512::from(input.u128()).checked_mul(retained)?;
    let numerator = Uint512::from(reserve_out.u128()).checked_mul(input_with_fee)?;
    let denominator = Uint512::from(reserve_in.u128())
        .checked_mul(Uint512::from(fee.denominator))?
        .checked_add(input_with_fee)?;
    let output = numerator.checked_div(denominator)?;
    Ok(Uint128::try_from(Uint256::try_from(output)?)?)
}

/// `reserve_x * reserve_y` without overflow.
pub(crate) fn constant_product(reserve_x: Uint128, reserve_y: Uint128) -> Uint256 {
    reserve_x.full_mul(reserve_y)
}
