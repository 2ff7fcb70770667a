use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::ErrorCode;
use crate::instructions::SOL_VAULT_SEED;
use crate::state::Pool;

/// Accounts for adding or removing liquidity (pool authority only)
#[derive(Accounts)]
pub struct Liquidity<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ ErrorCode::UnauthorizedAccess,
        has_one = token_mint,
        has_one = token_vault,
        has_one = sol_vault,
    )]
    pub pool: Account<'info, Pool>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [SOL_VAULT_SEED, pool.key().as_ref()],
        bump = pool.sol_vault_bump
    )]
    pub sol_vault: SystemAccount<'info>,

    #[account(mut)]
    pub authority_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}
