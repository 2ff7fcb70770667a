use anchor_lang::prelude::*;

use crate::errors::{ErrorCode, ZapResult};
use crate::validate;


/// Outcome of buying quote currency with lamports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapReceipt {
    pub native_spent: u64,
    pub quote_received: u64,
}

/// Checks a SOL → quote swap against its bounds by balance deltas
pub fn verify_swap(
    lamports_before: u64,
    lamports_after: u64,
    quote_before: u64,
    quote_after: u64,
    quote_wanted: u64,
    max_native: u64,
) -> ZapResult<SwapReceipt> {
    let native_spent = lamports_before
        .checked_sub(lamports_after)
        .ok_or(ErrorCode::SwapFailed)?;
    let quote_received = quote_after
        .checked_sub(quote_before)
        .ok_or(ErrorCode::SwapFailed)?;

    validate!(
        quote_received == quote_wanted,
        ErrorCode::SwapFailed,
        "swap returned {} quote, wanted {}",
        quote_received,
        quote_wanted
    )?;
    validate!(
        native_spent <= max_native,
        ErrorCode::SwapFailed,
        "swap spent {} lamports, max {}",
        native_spent,
        max_native
    )?;

    Ok(SwapReceipt {
        native_spent,
        quote_received,
    })
}

/// Pre-computes the lamports a pool would charge for `quote_wanted`, the `getAmountsIn` of the venue
pub fn quote_native_in(pool: &swap_router::state::Pool, quote_wanted: u64) -> Result<u64> {
    swap_router::math::get_amount_in(
        quote_wanted,
        pool.sol_reserve,
        pool.token_reserve,
        pool.fee_bps,
    )
}
