use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token_interface::{self, TransferChecked};

use crate::errors::ErrorCode;
use crate::instructions::Liquidity;

pub fn handler(ctx: Context<Liquidity>, sol_amount: u64, token_amount: u64) -> Result<()> {
    require!(sol_amount > 0 || token_amount > 0, ErrorCode::InvalidAmount);

    // 1. Lamports into the SOL vault
    if sol_amount > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.authority.to_account_info(),
                    to: ctx.accounts.sol_vault.to_account_info(),
                },
            ),
            sol_amount,
        )?;
    }

    // 2. Tokens into the token vault
    if token_amount > 0 {
        token_interface::transfer_checked(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                TransferChecked {
                    from: ctx.accounts.authority_token_account.to_account_info(),
                    mint: ctx.accounts.token_mint.to_account_info(),
                    to: ctx.accounts.token_vault.to_account_info(),
                    authority: ctx.accounts.authority.to_account_info(),
                },
            ),
            token_amount,
            ctx.accounts.token_mint.decimals,
        )?;
    }

    let pool = &mut ctx.accounts.pool;
    pool.sol_reserve = pool
        .sol_reserve
        .checked_add(sol_amount)
        .ok_or(ErrorCode::MathOverflow)?;
    pool.token_reserve = pool
        .token_reserve
        .checked_add(token_amount)
        .ok_or(ErrorCode::MathOverflow)?;

    msg!(
        "Liquidity added: {} lamports, {} tokens. Reserves: {} / {}",
        sol_amount,
        token_amount,
        pool.sol_reserve,
        pool.token_reserve
    );

    Ok(())
}
