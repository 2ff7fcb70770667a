use anchor_lang::prelude::*;

use crate::errors::{ErrorCode, OpethResult};
use crate::validate;


/// 10^decimals, the number of minor units in one full instrument unit
pub fn unit_for_decimals(decimals: u8) -> OpethResult<u64> {
    10_u64
        .checked_pow(decimals as u32)
        .ok_or(ErrorCode::MathOverflow)
}

/// Collateral minor units deposited per wrapper (= instrument) minor unit
///
/// Example: oToken with 8 decimals against WETH with 18 → 10^10
pub fn calculate_collateral_scale(
    instrument_decimals: u8,
    collateral_decimals: u8,
) -> OpethResult<u64> {
    validate!(
        collateral_decimals >= instrument_decimals,
        ErrorCode::InvalidCollateralDecimals,
        "collateral decimals {} < instrument decimals {}",
        collateral_decimals,
        instrument_decimals
    )?;

    unit_for_decimals(collateral_decimals - instrument_decimals)
}

/// Collateral required (or returned) for `amount` wrapper units
pub fn calculate_collateral_amount(amount: u64, collateral_scale: u64) -> OpethResult<u64> {
    amount
        .checked_mul(collateral_scale)
        .ok_or(ErrorCode::MathOverflow)
}

/// Settlement currency per full instrument unit:
/// unit_payout = floor(proceeds × unit / total_supply)
///
/// Errors if total_supply is 0; callers skip the claim in that case
pub fn calculate_unit_payout(proceeds: u64, total_supply: u64, unit: u64) -> OpethResult<u64> {
    validate!(total_supply > 0, ErrorCode::DivideByZeroGuard)?;

    let unit_payout = (proceeds as u128)
        .checked_mul(unit as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(total_supply as u128)
        .ok_or(ErrorCode::MathOverflow)?;

    u64::try_from(unit_payout).map_err(|_| ErrorCode::MathOverflow)
}

/// Settlement currency owed for `amount` wrapper units:
/// payout = floor(amount × unit_payout / unit)
pub fn calculate_redemption_payout(amount: u64, unit_payout: u64, unit: u64) -> OpethResult<u64> {
    let payout = (amount as u128)
        .checked_mul(unit_payout as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(unit as u128)
        .ok_or(ErrorCode::MathOverflow)?;

    u64::try_from(payout).map_err(|_| ErrorCode::MathOverflow)
}
