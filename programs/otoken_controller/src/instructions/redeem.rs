use anchor_lang::prelude::*;
use anchor_spl::token_interface as token;

use crate::errors::ErrorCode;
use crate::instructions::{Redeem, SETTLEMENT_SEED};
use crate::utils::validation::{validate_amount, validate_vault_balance};

/// Redeems expired instrument units for settlement currency
/// Post-settlement: holder burns instrument units → receives amount × payout_per_unit
pub fn handler(ctx: Context<Redeem>, amount: u64) -> Result<()> {
    validate_amount(amount)?;

    let settlement = &ctx.accounts.settlement;
    let now = Clock::get()?.unix_timestamp;
    require!(
        settlement.is_settlement_allowed(now),
        ErrorCode::SettlementNotAllowed
    );

    let payout = settlement.payout_for(amount)?;
    validate_vault_balance(ctx.accounts.payout_vault.amount, payout)?;

    // 1. Burn instrument units from holder
    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            token::Burn {
                mint: ctx.accounts.instrument_mint.to_account_info(),
                from: ctx.accounts.holder_instrument_account.to_account_info(),
                authority: ctx.accounts.holder.to_account_info(),
            },
        ),
        amount,
    )?;

    // 2. Pay settlement currency from vault (Settlement PDA signs)
    let instrument_mint_key = settlement.instrument_mint;
    let bump = settlement.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[SETTLEMENT_SEED, instrument_mint_key.as_ref(), &[bump]]];

    if payout > 0 {
        token::transfer_checked(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                token::TransferChecked {
                    from: ctx.accounts.payout_vault.to_account_info(),
                    mint: ctx.accounts.settlement_mint.to_account_info(),
                    to: ctx.accounts.holder_payout_account.to_account_info(),
                    authority: settlement.to_account_info(),
                },
                signer_seeds,
            ),
            payout,
            ctx.accounts.settlement_mint.decimals,
        )?;
    }

    // 3. Bookkeeping
    let settlement = &mut ctx.accounts.settlement;
    settlement.total_redeemed = settlement
        .total_redeemed
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    msg!(
        "Redeemed {} instrument units for {} settlement currency",
        amount,
        payout
    );

    Ok(())
}
