use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::instructions::SettlementAdmin;
use crate::utils::validation::validate_expired;

/// Fixes the payout per full instrument unit; only possible once, after expiry
/// Zero is a valid payout (expired out of the money)
pub fn handler(ctx: Context<SettlementAdmin>, payout_per_unit: u64) -> Result<()> {
    let settlement = &mut ctx.accounts.settlement;

    validate_expired(settlement.expiry)?;
    require!(!settlement.price_finalized, ErrorCode::SettlementAlreadyFinalized);

    settlement.payout_per_unit = payout_per_unit;
    settlement.price_finalized = true;

    msg!(
        "Finalized settlement for {}: {} per unit",
        settlement.instrument_mint,
        payout_per_unit
    );

    Ok(())
}
