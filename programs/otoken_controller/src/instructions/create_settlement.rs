use anchor_lang::prelude::*;

use crate::instructions::SettlementCreate;
use crate::utils::validation::validate_expiry;

pub fn handler(ctx: Context<SettlementCreate>, expiry: i64) -> Result<()> {
    validate_expiry(expiry)?;

    let settlement = &mut ctx.accounts.settlement;

    settlement.admin = ctx.accounts.admin.key();
    settlement.instrument_mint = ctx.accounts.instrument_mint.key();
    settlement.settlement_mint = ctx.accounts.settlement_mint.key();
    settlement.payout_vault = ctx.accounts.payout_vault.key();
    settlement.instrument_decimals = ctx.accounts.instrument_mint.decimals;
    settlement.expiry = expiry;

    settlement.price_finalized = false;
    settlement.payout_per_unit = 0;
    settlement.total_redeemed = 0;

    settlement.bump = ctx.bumps.settlement;

    msg!(
        "Created settlement for {} paying {} expiring {}",
        settlement.instrument_mint,
        settlement.settlement_mint,
        expiry
    );

    Ok(())
}
