use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::ErrorCode;
use crate::instructions::{POOL_SEED, SOL_VAULT_SEED, TOKEN_VAULT_SEED};
use crate::math::BPS_DENOMINATOR;
use crate::state::Pool;

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = authority,
        space = Pool::SIZE,
        seeds = [POOL_SEED, token_mint.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init,
        payer = authority,
        seeds = [TOKEN_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = pool
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// SOL side of the pool, a lamport-only PDA
    #[account(
        seeds = [SOL_VAULT_SEED, pool.key().as_ref()],
        bump
    )]
    pub sol_vault: SystemAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializePool>, fee_bps: u16) -> Result<()> {
    require!((fee_bps as u128) < BPS_DENOMINATOR, ErrorCode::InvalidFee);

    let pool = &mut ctx.accounts.pool;
    pool.authority = ctx.accounts.authority.key();
    pool.token_mint = ctx.accounts.token_mint.key();
    pool.token_vault = ctx.accounts.token_vault.key();
    pool.sol_vault = ctx.accounts.sol_vault.key();
    pool.sol_reserve = 0;
    pool.token_reserve = 0;
    pool.fee_bps = fee_bps;
    pool.bump = ctx.bumps.pool;
    pool.sol_vault_bump = ctx.bumps.sol_vault;

    msg!("Pool created for {} (fee {} bps)", pool.token_mint, fee_bps);

    Ok(())
}
