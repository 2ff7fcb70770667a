use crate::errors::{ErrorCode, ZapResult};


/// Lamports a zap must receive up front
///
/// collateral (wrapped into wSOL for the wrapper) + swap budget for quote + exchange protocol fee
pub fn calculate_native_required(
    collateral: u64,
    max_native_for_quote: u64,
    protocol_fee: u64,
) -> ZapResult<u64> {
    collateral
        .checked_add(max_native_for_quote)
        .and_then(|v| v.checked_add(protocol_fee))
        .ok_or(ErrorCode::MathOverflow)
}

/// Lamports to hand back once every stage has run
pub fn calculate_native_refund(lamports_before: u64, lamports_after: u64) -> ZapResult<u64> {
    lamports_after
        .checked_sub(lamports_before)
        .ok_or(ErrorCode::MathOverflow)
}
