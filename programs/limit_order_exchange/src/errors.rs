use anchor_lang::prelude::*;

#[error_code]
#[derive(PartialEq, Eq)]
pub enum ErrorCode {
    #[msg("Invalid price (must be > 0)")]
    InvalidPrice,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid mint for order side")]
    InvalidMint,

    #[msg("Invalid fill size")]
    InvalidFillSize,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Unauthorized access")]
    UnauthorizedAccess,

    #[msg("Order fully filled")]
    OrderFullyFilled,

    #[msg("Invalid market")]
    InvalidMarket,

    #[msg("Order has expired")]
    OrderExpired,

    #[msg("Expiration must be in the future")]
    InvalidExpiration,

    #[msg("Order cannot be filled for the full requested size")]
    IncompleteFill,

    #[msg("Batch is empty")]
    EmptyBatch,

    #[msg("Remaining accounts do not match the batch")]
    BatchAccountsMismatch,

    #[msg("Escrow does not belong to order")]
    InvalidEscrow,

    #[msg("Maker receive account not owned by order owner")]
    InvalidMakerAccount,
}
