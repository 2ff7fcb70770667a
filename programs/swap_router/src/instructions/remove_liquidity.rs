use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token_interface::{self, TransferChecked};

use crate::errors::ErrorCode;
use crate::instructions::{POOL_SEED, SOL_VAULT_SEED};
use crate::instructions::Liquidity;

pub fn handler(ctx: Context<Liquidity>, sol_amount: u64, token_amount: u64) -> Result<()> {
    require!(sol_amount > 0 || token_amount > 0, ErrorCode::InvalidAmount);

    let pool = &ctx.accounts.pool;
    require!(
        sol_amount <= pool.sol_reserve && token_amount <= pool.token_reserve,
        ErrorCode::InsufficientLiquidity
    );

    let pool_key = pool.key();

    // 1. Lamports out of the SOL vault (vault PDA signs)
    if sol_amount > 0 {
        let sol_vault_seeds: &[&[&[u8]]] =
            &[&[SOL_VAULT_SEED, pool_key.as_ref(), &[pool.sol_vault_bump]]];

        system_program::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.sol_vault.to_account_info(),
                    to: ctx.accounts.authority.to_account_info(),
                },
                sol_vault_seeds,
            ),
            sol_amount,
        )?;
    }

    // 2. Tokens out of the token vault (pool PDA signs)
    if token_amount > 0 {
        let token_mint_key = pool.token_mint;
        let pool_seeds: &[&[&[u8]]] = &[&[POOL_SEED, token_mint_key.as_ref(), &[pool.bump]]];

        token_interface::transfer_checked(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                TransferChecked {
                    from: ctx.accounts.token_vault.to_account_info(),
                    mint: ctx.accounts.token_mint.to_account_info(),
                    to: ctx.accounts.authority_token_account.to_account_info(),
                    authority: pool.to_account_info(),
                },
                pool_seeds,
            ),
            token_amount,
            ctx.accounts.token_mint.decimals,
        )?;
    }

    let pool = &mut ctx.accounts.pool;
    pool.sol_reserve -= sol_amount;
    pool.token_reserve -= token_amount;

    msg!(
        "Liquidity removed: {} lamports, {} tokens. Reserves: {} / {}",
        sol_amount,
        token_amount,
        pool.sol_reserve,
        pool.token_reserve
    );

    Ok(())
}
