use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Calculates the settlement payout for an instrument amount:
/// payout = (amount × payout_per_unit) / 10^instrument_decimals
///
/// Example: 2 oTokens (2 × 10^8 raw) at 5_817_378 per unit = 11_634_756 raw USDC
pub fn calculate_settlement_payout(
    amount: u64,
    payout_per_unit: u64,
    instrument_decimals: u8,
) -> Result<u64> {
    let unit = 10_u128
        .checked_pow(instrument_decimals as u32)
        .ok_or(ErrorCode::MathOverflow)?;

    let payout = (amount as u128)
        .checked_mul(payout_per_unit as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(unit)
        .ok_or(ErrorCode::MathOverflow)?;

    u64::try_from(payout).map_err(|_| error!(ErrorCode::MathOverflow))
}
