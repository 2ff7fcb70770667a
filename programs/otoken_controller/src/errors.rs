use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Expiry must be in the future")]
    ExpiryInPast,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Math operation overflow")]
    MathOverflow,

    #[msg("Instrument has not expired yet")]
    InstrumentNotExpired,

    #[msg("Settlement price already finalized")]
    SettlementAlreadyFinalized,

    #[msg("Settlement is not allowed for this instrument")]
    SettlementNotAllowed,

    #[msg("Payout vault holds less than the redemption requires")]
    InsufficientPayout,

    #[msg("Invalid instrument mint")]
    InvalidInstrumentMint,

    #[msg("Invalid payout vault")]
    InvalidPayoutVault,

    #[msg("Unauthorized access")]
    UnauthorizedAccess,
}
