use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::errors::ErrorCode;
use crate::instructions::{POOL_SEED, SOL_VAULT_SEED};
use crate::math::get_amount_in;
use crate::state::Pool;

#[derive(Accounts)]
pub struct SwapSolForExactTokens<'info> {
    /// Pays lamports, receives tokens
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
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

    #[account(
        mut,
        constraint = user_token_account.mint == token_mint.key()
    )]
    pub user_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<SwapSolForExactTokens>,
    amount_out: u64,
    max_amount_in: u64,
) -> Result<()> {
    let pool = &ctx.accounts.pool;
    let amount_in = get_amount_in(amount_out, pool.sol_reserve, pool.token_reserve, pool.fee_bps)?;
    require!(amount_in <= max_amount_in, ErrorCode::SlippageExceeded);

    // 1. Lamports from user to SOL vault
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.sol_vault.to_account_info(),
            },
        ),
        amount_in,
    )?;

    // 2. Tokens from vault to user (pool PDA signs)
    let token_mint_key = pool.token_mint;
    let signer_seeds: &[&[&[u8]]] = &[&[POOL_SEED, token_mint_key.as_ref(), &[pool.bump]]];

    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.token_vault.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
                to: ctx.accounts.user_token_account.to_account_info(),
                authority: pool.to_account_info(),
            },
            signer_seeds,
        ),
        amount_out,
        ctx.accounts.token_mint.decimals,
    )?;

    let pool = &mut ctx.accounts.pool;
    pool.sol_reserve = pool
        .sol_reserve
        .checked_add(amount_in)
        .ok_or(ErrorCode::MathOverflow)?;
    pool.token_reserve = pool
        .token_reserve
        .checked_sub(amount_out)
        .ok_or(ErrorCode::MathOverflow)?;

    msg!(
        "Swapped {} lamports for {} tokens. Reserves: {} / {}",
        amount_in,
        amount_out,
        pool.sol_reserve,
        pool.token_reserve
    );

    Ok(())
}
