use anchor_lang::prelude::*;

use crate::errors::ErrorCode;


pub const BPS_DENOMINATOR: u128 = 10_000;

/// Input needed to take exactly `amount_out` from the pool
///
/// amount_in = reserve_in × amount_out × 10000 / ((reserve_out − amount_out) × (10000 − fee_bps)) + 1
pub fn get_amount_in(
    amount_out: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_bps: u16,
) -> Result<u64> {
    require!(amount_out > 0, ErrorCode::InvalidAmount);
    require!(
        reserve_in > 0 && reserve_out > amount_out,
        ErrorCode::InsufficientLiquidity
    );
    require!((fee_bps as u128) < BPS_DENOMINATOR, ErrorCode::InvalidFee);

    let numerator = (reserve_in as u128)
        .checked_mul(amount_out as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_mul(BPS_DENOMINATOR)
        .ok_or(ErrorCode::MathOverflow)?;
    let denominator = ((reserve_out - amount_out) as u128)
        .checked_mul(BPS_DENOMINATOR - fee_bps as u128)
        .ok_or(ErrorCode::MathOverflow)?;

    let amount_in = numerator
        .checked_div(denominator)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    u64::try_from(amount_in).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Output received for paying `amount_in`
pub fn get_amount_out(amount_in: u64, reserve_in: u64, reserve_out: u64, fee_bps: u16) -> Result<u64> {
    require!(amount_in > 0, ErrorCode::InvalidAmount);
    require!(
        reserve_in > 0 && reserve_out > 0,
        ErrorCode::InsufficientLiquidity
    );
    require!((fee_bps as u128) < BPS_DENOMINATOR, ErrorCode::InvalidFee);

    let amount_in_with_fee = (amount_in as u128)
        .checked_mul(BPS_DENOMINATOR - fee_bps as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    let numerator = amount_in_with_fee
        .checked_mul(reserve_out as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    let denominator = (reserve_in as u128)
        .checked_mul(BPS_DENOMINATOR)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_add(amount_in_with_fee)
        .ok_or(ErrorCode::MathOverflow)?;

    let amount_out = numerator
        .checked_div(denominator)
        .ok_or(ErrorCode::MathOverflow)?;

    u64::try_from(amount_out).map_err(|_| error!(ErrorCode::MathOverflow))
}
