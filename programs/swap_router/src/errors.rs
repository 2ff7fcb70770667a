use anchor_lang::prelude::*;

#[error_code]
#[derive(PartialEq, Eq)]
pub enum ErrorCode {
    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Fee must be below 10000 bps")]
    InvalidFee,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Pool has no liquidity for this swap")]
    InsufficientLiquidity,

    #[msg("Required input exceeds maximum")]
    SlippageExceeded,

    #[msg("Unauthorized access")]
    UnauthorizedAccess,
}
