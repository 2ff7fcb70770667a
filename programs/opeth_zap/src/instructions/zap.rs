use anchor_lang::prelude::*;
use anchor_spl::token::{spl_token, Mint, Token, TokenAccount};
use limit_order_exchange::program::LimitOrderExchange;
use opeth::program::Opeth;
use opeth::WrapperState;
use swap_router::program::SwapRouter;
use swap_router::state::Pool;

use crate::constants::{ZAP_AUTHORITY_SEED, ZAP_VAULT_SEED};
use crate::errors::ErrorCode;

#[derive(Accounts)]
pub struct CreateVault<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(seeds = [ZAP_AUTHORITY_SEED], bump)]
    pub zap_authority: SystemAccount<'info>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        seeds = [ZAP_VAULT_SEED, mint.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = zap_authority,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Accounts for a zap mint
///
/// Remaining accounts: the `batch_fill_limit_orders` account list, taker = `zap_authority`,
/// taker accounts = `zap_instrument_vault` / `zap_quote_vault`.
#[derive(Accounts)]
pub struct ZapMint<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(mut, seeds = [ZAP_AUTHORITY_SEED], bump)]
    pub zap_authority: SystemAccount<'info>,

    // === WRAPPER ===
    #[account(
        mut,
        has_one = instrument_mint,
        has_one = collateral_mint,
        has_one = wrapper_mint,
        has_one = instrument_vault,
        has_one = collateral_vault,
        constraint = wrapper.collateral_mint == spl_token::native_mint::ID @ ErrorCode::InvalidCollateralMint,
    )]
    pub wrapper: Box<Account<'info, WrapperState>>,

    pub instrument_mint: Box<Account<'info, Mint>>,

    /// Wrapped SOL
    pub collateral_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub wrapper_mint: Box<Account<'info, Mint>>,

    pub quote_mint: Box<Account<'info, Mint>>,

    /// Wrapper's instrument vault
    #[account(mut)]
    pub instrument_vault: Box<Account<'info, TokenAccount>>,

    /// Wrapper's collateral vault
    #[account(mut)]
    pub collateral_vault: Box<Account<'info, TokenAccount>>,

    // === ZAP VAULTS ===
    #[account(
        mut,
        seeds = [ZAP_VAULT_SEED, instrument_mint.key().as_ref()],
        bump,
    )]
    pub zap_instrument_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [ZAP_VAULT_SEED, collateral_mint.key().as_ref()],
        bump,
    )]
    pub zap_collateral_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [ZAP_VAULT_SEED, wrapper_mint.key().as_ref()],
        bump,
    )]
    pub zap_wrapper_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [ZAP_VAULT_SEED, quote_mint.key().as_ref()],
        bump,
    )]
    pub zap_quote_vault: Box<Account<'info, TokenAccount>>,

    // === USER ===
    #[account(
        mut,
        constraint = user_wrapper_account.mint == wrapper_mint.key() @ ErrorCode::TransferFailed,
        constraint = user_wrapper_account.owner == user.key() @ ErrorCode::TransferFailed,
    )]
    pub user_wrapper_account: Box<Account<'info, TokenAccount>>,

    /// Receives quote left over when the fill costs less than bought
    #[account(
        mut,
        constraint = user_quote_account.mint == quote_mint.key() @ ErrorCode::TransferFailed,
        constraint = user_quote_account.owner == user.key() @ ErrorCode::TransferFailed,
    )]
    pub user_quote_account: Box<Account<'info, TokenAccount>>,

    // === SWAP VENUE ===
    #[account(
        mut,
        constraint = swap_pool.token_mint == quote_mint.key() @ ErrorCode::InvalidSwapPool,
        constraint = swap_pool.token_vault == swap_token_vault.key() @ ErrorCode::InvalidSwapPool,
        constraint = swap_pool.sol_vault == swap_sol_vault.key() @ ErrorCode::InvalidSwapPool,
    )]
    pub swap_pool: Box<Account<'info, Pool>>,

    #[account(mut)]
    pub swap_token_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub swap_sol_vault: SystemAccount<'info>,

    pub opeth_program: Program<'info, Opeth>,
    pub exchange_program: Program<'info, LimitOrderExchange>,
    pub swap_program: Program<'info, SwapRouter>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
