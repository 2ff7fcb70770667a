use anchor_lang::prelude::*;

pub type OpethResult<T = ()> = std::result::Result<T, ErrorCode>;

#[error_code]
#[derive(PartialEq, Eq)]
pub enum ErrorCode {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Math operation overflow")]
    MathOverflow,

    #[msg("Redeem amount exceeds wrapper balance")]
    InsufficientBalance,

    #[msg("Token transfer into the wrapper failed")]
    TransferFailed,

    #[msg("Redemption transfer or settlement claim failed")]
    RedemptionFailed,

    #[msg("Payout division with zero wrapper supply")]
    DivideByZeroGuard,

    #[msg("Proceeds already claimed; minting is closed")]
    MintAfterSettlement,

    #[msg("Collateral must have at least as many decimals as the instrument")]
    InvalidCollateralDecimals,

    #[msg("Settlement account does not match the wrapped instrument")]
    InvalidSettlement,

    #[msg("Invalid payout vault")]
    InvalidPayoutVault,

    #[msg("Invalid token account for this wrapper")]
    InvalidTokenAccount,
}
