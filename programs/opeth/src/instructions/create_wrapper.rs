use anchor_lang::prelude::*;

use crate::events::WrapperCreatedRecord;
use crate::instructions::WrapperCreate;
use crate::utils::math::calculate_collateral_scale;

pub fn handler(ctx: Context<WrapperCreate>) -> Result<()> {
    let collateral_scale = calculate_collateral_scale(
        ctx.accounts.instrument_mint.decimals,
        ctx.accounts.collateral_mint.decimals,
    )?;

    let wrapper_key = ctx.accounts.wrapper.key();
    let wrapper = &mut ctx.accounts.wrapper;

    // Binding
    wrapper.instrument_mint = ctx.accounts.instrument_mint.key();
    wrapper.collateral_mint = ctx.accounts.collateral_mint.key();
    wrapper.settlement_mint = ctx.accounts.settlement_mint.key();
    wrapper.settlement = ctx.accounts.settlement.key();
    wrapper.wrapper_mint = ctx.accounts.wrapper_mint.key();
    wrapper.instrument_vault = ctx.accounts.instrument_vault.key();
    wrapper.collateral_vault = ctx.accounts.collateral_vault.key();
    wrapper.settlement_vault = ctx.accounts.settlement_vault.key();
    wrapper.instrument_decimals = ctx.accounts.instrument_mint.decimals;
    wrapper.collateral_scale = collateral_scale;
    wrapper.bump = ctx.bumps.wrapper;

    // Ledger starts Active and empty
    wrapper.total_supply = 0;
    wrapper.proceeds_claimed = false;
    wrapper.unit_payout = 0;

    msg!(
        "Created wrapper {} over {} with collateral {} (scale {})",
        wrapper_key,
        wrapper.instrument_mint,
        wrapper.collateral_mint,
        collateral_scale
    );

    emit!(WrapperCreatedRecord {
        ts: Clock::get()?.unix_timestamp,
        wrapper: wrapper_key,
        instrument_mint: wrapper.instrument_mint,
        collateral_mint: wrapper.collateral_mint,
        settlement_mint: wrapper.settlement_mint,
        wrapper_mint: wrapper.wrapper_mint,
        collateral_scale,
    });

    Ok(())
}
