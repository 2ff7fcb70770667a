use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use otoken_controller::program::OtokenController;
use otoken_controller::Settlement;

use crate::errors::ErrorCode;
use crate::state::WrapperState;
use crate::utils::pda::*;

#[derive(Accounts)]
pub struct WrapperCreate<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The wrapper PDA - INITIALIZE it (one per instrument + collateral pair)
    #[account(
        init,
        payer = payer,
        space = 8 + std::mem::size_of::<WrapperState>(),
        seeds = [
            WRAPPER_SEED,
            instrument_mint.key().as_ref(),
            collateral_mint.key().as_ref(),
        ],
        bump
    )]
    pub wrapper: Box<Account<'info, WrapperState>>,

    pub instrument_mint: Box<Account<'info, Mint>>,

    pub collateral_mint: Box<Account<'info, Mint>>,

    pub settlement_mint: Box<Account<'info, Mint>>,

    /// Controller record the instrument settles through
    #[account(
        constraint = settlement.instrument_mint == instrument_mint.key() @ ErrorCode::InvalidSettlement,
        constraint = settlement.settlement_mint == settlement_mint.key() @ ErrorCode::InvalidSettlement,
    )]
    pub settlement: Box<Account<'info, Settlement>>,

    /// Wrapper unit mint PDA - INITIALIZE it
    #[account(
        init,
        payer = payer,
        seeds = [WRAPPER_MINT_SEED, wrapper.key().as_ref()],
        bump,
        mint::decimals = instrument_mint.decimals,
        mint::authority = wrapper,
    )]
    pub wrapper_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        seeds = [INSTRUMENT_VAULT_SEED, wrapper.key().as_ref()],
        bump,
        token::mint = instrument_mint,
        token::authority = wrapper,
    )]
    pub instrument_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        seeds = [COLLATERAL_VAULT_SEED, wrapper.key().as_ref()],
        bump,
        token::mint = collateral_mint,
        token::authority = wrapper,
    )]
    pub collateral_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        seeds = [SETTLEMENT_VAULT_SEED, wrapper.key().as_ref()],
        bump,
        token::mint = settlement_mint,
        token::authority = wrapper,
    )]
    pub settlement_vault: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

/// Accounts for minting wrapper units
/// All wrapper-owned accounts are validated against the addresses stored at creation
#[derive(Accounts)]
pub struct WrapperContext<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        has_one = instrument_mint,
        has_one = collateral_mint,
        has_one = wrapper_mint,
        has_one = instrument_vault,
        has_one = collateral_vault,
    )]
    pub wrapper: Box<Account<'info, WrapperState>>,

    pub instrument_mint: Box<Account<'info, Mint>>,

    pub collateral_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub wrapper_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub instrument_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub collateral_vault: Box<Account<'info, TokenAccount>>,

    /// User's instrument account (debited)
    #[account(mut)]
    pub user_instrument_account: Box<Account<'info, TokenAccount>>,

    /// User's collateral account (debited)
    #[account(mut)]
    pub user_collateral_account: Box<Account<'info, TokenAccount>>,

    /// User's wrapper account (credited)
    #[account(
        mut,
        constraint = user_wrapper_account.mint == wrapper_mint.key() @ ErrorCode::InvalidTokenAccount
    )]
    pub user_wrapper_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Accounts for redeeming wrapper units, including the settlement path
#[derive(Accounts)]
pub struct SettlementContext<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        has_one = instrument_mint,
        has_one = collateral_mint,
        has_one = settlement_mint,
        has_one = settlement @ ErrorCode::InvalidSettlement,
        has_one = wrapper_mint,
        has_one = instrument_vault,
        has_one = collateral_vault,
        has_one = settlement_vault,
    )]
    pub wrapper: Box<Account<'info, WrapperState>>,

    #[account(
        mut,
        has_one = payout_vault @ ErrorCode::InvalidPayoutVault,
    )]
    pub settlement: Box<Account<'info, Settlement>>,

    /// Mutable: the controller burns redeemed instrument units
    #[account(mut)]
    pub instrument_mint: Box<Account<'info, Mint>>,

    pub collateral_mint: Box<Account<'info, Mint>>,

    pub settlement_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub wrapper_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub instrument_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub collateral_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub settlement_vault: Box<Account<'info, TokenAccount>>,

    /// Controller payout vault (source of settlement proceeds)
    #[account(mut)]
    pub payout_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub user_instrument_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub user_collateral_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub user_settlement_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_wrapper_account.mint == wrapper_mint.key() @ ErrorCode::InvalidTokenAccount,
        constraint = user_wrapper_account.owner == user.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub user_wrapper_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub controller_program: Program<'info, OtokenController>,
}

/// Accounts for the permissionless proceeds claim
#[derive(Accounts)]
pub struct ClaimContext<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        has_one = instrument_mint,
        has_one = settlement_mint,
        has_one = settlement @ ErrorCode::InvalidSettlement,
        has_one = instrument_vault,
        has_one = settlement_vault,
    )]
    pub wrapper: Box<Account<'info, WrapperState>>,

    #[account(
        mut,
        has_one = payout_vault @ ErrorCode::InvalidPayoutVault,
    )]
    pub settlement: Box<Account<'info, Settlement>>,

    #[account(mut)]
    pub instrument_mint: Box<Account<'info, Mint>>,

    pub settlement_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub instrument_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub settlement_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub payout_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub controller_program: Program<'info, OtokenController>,
}
