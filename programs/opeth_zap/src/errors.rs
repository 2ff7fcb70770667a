use anchor_lang::prelude::*;

pub type ZapResult<T = ()> = std::result::Result<T, ErrorCode>;

#[error_code]
#[derive(PartialEq, Eq)]
pub enum ErrorCode {
    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Native value sent is below what the zap requires")]
    InsufficientValueSent,

    #[msg("Order fill reverted or missed its bounds")]
    FillReverted,

    #[msg("Fill payload is not a batch fill instruction")]
    InvalidFillPayload,

    #[msg("Swap for quote currency failed")]
    SwapFailed,

    #[msg("Wrapper mint failed")]
    MintFailed,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Wrapper collateral must be wrapped SOL")]
    InvalidCollateralMint,

    #[msg("Swap pool does not trade the quote mint")]
    InvalidSwapPool,

    #[msg("Zap vault balance changed across the operation")]
    ZapResidue,

    #[msg("Math overflow")]
    MathOverflow,
}
