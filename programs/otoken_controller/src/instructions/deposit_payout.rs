use anchor_lang::prelude::*;
use anchor_spl::token_interface as token;

use crate::instructions::SettlementAdmin;
use crate::utils::validation::validate_amount;

/// Moves settlement currency from the admin into the payout vault
pub fn handler(ctx: Context<SettlementAdmin>, amount: u64) -> Result<()> {
    validate_amount(amount)?;

    token::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::TransferChecked {
                from: ctx.accounts.admin_payout_account.to_account_info(),
                mint: ctx.accounts.settlement_mint.to_account_info(),
                to: ctx.accounts.payout_vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.settlement_mint.decimals,
    )?;

    msg!(
        "Deposited {} into payout vault of {}",
        amount,
        ctx.accounts.settlement.instrument_mint
    );

    Ok(())
}
