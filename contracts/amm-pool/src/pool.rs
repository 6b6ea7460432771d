//! Pool accounting core.
//!
//! `PoolState` holds the reserves and the share supply. Per-provider balances live behind
//! [`ShareLedger`] so the same state machine runs against contract storage or an in-memory map.
//! Every operation validates and computes the full outcome before it writes anything, so a
//! failed call leaves both the pool and the ledger untouched.

use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128, Uint256};

use crate::calculations::{
    calculate_deposit, calculate_seed_shares, calculate_swap_output, calculate_withdraw_amounts,
    constant_product,
};
use crate::error::ContractError;
use crate::state::{FeeConfig, SeedShares};

/// Per-provider share balances.
pub trait ShareLedger {
    fn shares_of(&self, provider: &Addr) -> Result<Uint128, ContractError>;
    fn set_shares(&mut self, provider: &Addr, shares: Uint128) -> Result<(), ContractError>;
}

impl ShareLedger for BTreeMap<Addr, Uint128> {
    fn shares_of(&self, provider: &Addr) -> Result<Uint128, ContractError> {
        Ok(self.get(provider).copied().unwrap_or_default())
    }

    fn set_shares(&mut self, provider: &Addr, shares: Uint128) -> Result<(), ContractError> {
        if shares.is_zero() {
            self.remove(provider);
        } else {
            self.insert(provider.clone(), shares);
        }
        Ok(())
    }
}

/// Which reserve receives the input of a swap.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum SwapDirection {
    XToY,
    YToX,
}

#[cw_serde]
#[derive(Default)]
pub struct PoolState {
    pub reserve_x: Uint128,
    pub reserve_y: Uint128,
    pub total_shares: Uint128,
    pub initialized: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepositOutcome {
    pub amount_x: Uint128,
    pub amount_y: Uint128,
    pub shares_minted: Uint128,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawOutcome {
    pub shares_burned: Uint128,
    pub payout_x: Uint128,
    pub payout_y: Uint128,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwapOutcome {
    pub direction: SwapDirection,
    pub input: Uint128,
    pub output: Uint128,
    pub reserve_x: Uint128,
    pub reserve_y: Uint128,
}

impl PoolState {
    pub fn reserves(&self) -> (Uint128, Uint128) {
        (self.reserve_x, self.reserve_y)
    }

    pub fn product(&self) -> Uint256 {
        constant_product(self.reserve_x, self.reserve_y)
    }

    fn ensure_initialized(&self) -> Result<(), ContractError> {
        if !self.initialized {
            return Err(ContractError::NotInitialized {});
        }
        Ok(())
    }

    /// Seeds both reserves and credits the seed shares to `provider`. Returns the seed shares.
    pub fn initialize(
        &mut self,
        ledger: &mut impl ShareLedger,
        provider: &Addr,
        amount_x: Uint128,
        amount_y: Uint128,
        seed: SeedShares,
    ) -> Result<Uint128, ContractError> {
        if self.initialized {
            return Err(ContractError::AlreadyInitialized {});
        }
        let shares = calculate_seed_shares(amount_x, amount_y, seed)?;
        let provider_shares = ledger.shares_of(provider)?.checked_add(shares)?;

        ledger.set_shares(provider, provider_shares)?;
        self.reserve_x = amount_x;
        self.reserve_y = amount_y;
        self.total_shares = shares;
        self.initialized = true;
        Ok(shares)
    }

    /// Adds liquidity at the current reserve ratio.
    ///
    /// `max_amount_y` is what the caller is willing to supply on the Y side; `None` means the
    /// Y side is derived from the ratio with no cap.
    pub fn deposit(
        &mut self,
        ledger: &mut impl ShareLedger,
        provider: &Addr,
        amount_x: Uint128,
        max_amount_y: Option<Uint128>,
    ) -> Result<DepositOutcome, ContractError> {
        self.ensure_initialized()?;
        if amount_x.is_zero() {
            return Err(ContractError::invalid_amount("deposit amount must be positive"));
        }
        let (minted, required_y) =
            calculate_deposit(amount_x, self.reserve_x, self.reserve_y, self.total_shares)?;
        if let Some(supplied) = max_amount_y {
            if supplied < required_y {
                return Err(ContractError::InsufficientAmount {
                    required: required_y,
                    supplied,
                });
            }
        }
        if minted.is_zero() {
            return Err(ContractError::invalid_amount(
                "deposit too small to mint shares",
            ));
        }

        let reserve_x = self.reserve_x.checked_add(amount_x)?;
        let reserve_y = self.reserve_y.checked_add(required_y)?;
        let total_shares = self.total_shares.checked_add(minted)?;
        let provider_shares = ledger.shares_of(provider)?.checked_add(minted)?;

        ledger.set_shares(provider, provider_shares)?;
        self.reserve_x = reserve_x;
        self.reserve_y = reserve_y;
        self.total_shares = total_shares;
        Ok(DepositOutcome {
            amount_x,
            amount_y: required_y,
            shares_minted: minted,
        })
    }

    /// Burns `shares` from `provider` and pays out the proportional reserves.
    pub fn withdraw(
        &mut self,
        ledger: &mut impl ShareLedger,
        provider: &Addr,
        shares: Uint128,
    ) -> Result<WithdrawOutcome, ContractError> {
        self.ensure_initialized()?;
        if shares.is_zero() {
            return Err(ContractError::invalid_amount("withdraw amount must be positive"));
        }
        let available = ledger.shares_of(provider)?;
        if shares > available {
            return Err(ContractError::InsufficientShares {
                requested: shares,
                available,
            });
        }
        let (payout_x, payout_y) =
            calculate_withdraw_amounts(shares, self.reserve_x, self.reserve_y, self.total_shares)?;

        let total_shares = self.total_shares.checked_sub(shares)?;
        let reserve_x = self.reserve_x.checked_sub(payout_x)?;
        let reserve_y = self.reserve_y.checked_sub(payout_y)?;
        // Only the withdrawal that burns the last share may empty a reserve.
        if !total_shares.is_zero() && (reserve_x.is_zero() || reserve_y.is_zero()) {
            return Err(ContractError::EmptyPoolWithdrawal {});
        }

        ledger.set_shares(provider, available.checked_sub(shares)?)?;
        self.reserve_x = reserve_x;
        self.reserve_y = reserve_y;
        self.total_shares = total_shares;
        Ok(WithdrawOutcome {
            shares_burned: shares,
            payout_x,
            payout_y,
        })
    }

    /// Prices a swap against the current reserves without committing it.
    pub fn quote_swap(
        &self,
        fee: FeeConfig,
        direction: SwapDirection,
        input: Uint128,
    ) -> Result<SwapOutcome, ContractError> {
        self.ensure_initialized()?;
        if input.is_zero() {
            return Err(ContractError::invalid_amount("swap input must be positive"));
        }
        let (reserve_in, reserve_out) = match direction {
            SwapDirection::XToY => (self.reserve_x, self.reserve_y),
            SwapDirection::YToX => (self.reserve_y, self.reserve_x),
        };
        let output = calculate_swap_output(input, reserve_in, reserve_out, fee)?;
        if output.is_zero() {
            return Err(ContractError::insufficient_liquidity(
                "swap output rounds to zero",
            ));
        }
        if output >= reserve_out {
            return Err(ContractError::insufficient_liquidity(
                "swap would drain the output reserve",
            ));
        }
        let new_in = reserve_in.checked_add(input)?;
        let new_out = reserve_out.checked_sub(output)?;

        let before = constant_product(reserve_in, reserve_out);
        let after = constant_product(new_in, new_out);
        if after < before {
            return Err(ContractError::InvariantViolation {
                before: before.to_string(),
                after: after.to_string(),
            });
        }

        let (reserve_x, reserve_y) = match direction {
            SwapDirection::XToY => (new_in, new_out),
            SwapDirection::YToX => (new_out, new_in),
        };
        Ok(SwapOutcome {
            direction,
            input,
            output,
            reserve_x,
            reserve_y,
        })
    }

    /// Executes a swap. `min_output` rejects the trade if the price moved too far.
    pub fn swap(
        &mut self,
        fee: FeeConfig,
        direction: SwapDirection,
        input: Uint128,
        min_output: Option<Uint128>,
    ) -> Result<SwapOutcome, ContractError> {
        let outcome = self.quote_swap(fee, direction, input)?;
        if let Some(min_output) = min_output {
            if outcome.output < min_output {
                return Err(ContractError::SlippageExceeded {
                    output: outcome.output,
                    min_output,
                });
            }
        }
        self.reserve_x = outcome.reserve_x;
        self.reserve_y = outcome.reserve_y;
        Ok(outcome)
    }
}
