use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::errors::ErrorCode;
use crate::state::Settlement;

pub const SETTLEMENT_SEED: &[u8] = b"settlement";
pub const PAYOUT_VAULT_SEED: &[u8] = b"payout_vault";

#[derive(Accounts)]
pub struct SettlementCreate<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The Settlement PDA - INITIALIZE it (one per instrument mint)
    #[account(
        init,
        payer = admin,
        space = Settlement::SIZE,
        seeds = [SETTLEMENT_SEED, instrument_mint.key().as_ref()],
        bump
    )]
    pub settlement: Account<'info, Settlement>,

    /// Only the instrument's issuer (its mint authority) may register its settlement
    #[account(
        constraint = instrument_mint.mint_authority == COption::Some(admin.key()) @ ErrorCode::UnauthorizedAccess
    )]
    pub instrument_mint: Account<'info, Mint>,

    pub settlement_mint: Account<'info, Mint>,

    /// Payout vault PDA - INITIALIZE it
    #[account(
        init,
        payer = admin,
        seeds = [PAYOUT_VAULT_SEED, settlement.key().as_ref()],
        bump,
        token::mint = settlement_mint,
        token::authority = settlement,
    )]
    pub payout_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

/// Admin operations on an existing settlement (funding, price finalization)
#[derive(Accounts)]
pub struct SettlementAdmin<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        has_one = admin @ ErrorCode::UnauthorizedAccess,
        has_one = payout_vault @ ErrorCode::InvalidPayoutVault,
        has_one = settlement_mint,
    )]
    pub settlement: Account<'info, Settlement>,

    pub settlement_mint: Account<'info, Mint>,

    #[account(mut)]
    pub payout_vault: Account<'info, TokenAccount>,

    /// Admin's settlement currency account
    #[account(mut)]
    pub admin_payout_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct Redeem<'info> {
    pub holder: Signer<'info>,

    #[account(
        mut,
        has_one = instrument_mint @ ErrorCode::InvalidInstrumentMint,
        has_one = settlement_mint,
        has_one = payout_vault @ ErrorCode::InvalidPayoutVault,
    )]
    pub settlement: Account<'info, Settlement>,

    #[account(mut)]
    pub instrument_mint: Account<'info, Mint>,

    pub settlement_mint: Account<'info, Mint>,

    #[account(mut)]
    pub payout_vault: Account<'info, TokenAccount>,

    /// Holder's instrument account (burned from)
    #[account(
        mut,
        constraint = holder_instrument_account.mint == instrument_mint.key() @ ErrorCode::InvalidInstrumentMint
    )]
    pub holder_instrument_account: Account<'info, TokenAccount>,

    /// Holder's settlement currency account (paid into)
    #[account(mut)]
    pub holder_payout_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
