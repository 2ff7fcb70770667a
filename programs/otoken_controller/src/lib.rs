use anchor_lang::prelude::*;

use instructions::*;

pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

pub use state::Settlement;

declare_id!("HMpjdbgGz8r1kChx2TYavBLSrcNarJjDKRV6MRngx1KR");

#[program]
pub mod otoken_controller {
    use super::*;

    /// CreateSettlement: registers an instrument mint, its settlement currency and expiry
    pub fn create_settlement(ctx: Context<SettlementCreate>, expiry: i64) -> Result<()> {
        instructions::create_settlement::handler(ctx, expiry)
    }

    /// DepositPayout: funds the payout vault with settlement currency
    pub fn deposit_payout(ctx: Context<SettlementAdmin>, amount: u64) -> Result<()> {
        instructions::deposit_payout::handler(ctx, amount)
    }

    /// FinalizeSettlement: after expiry, fixes the payout per full instrument unit
    pub fn finalize_settlement(ctx: Context<SettlementAdmin>, payout_per_unit: u64) -> Result<()> {
        instructions::finalize_settlement::handler(ctx, payout_per_unit)
    }

    /// Redeem: burn instrument units → receive settlement currency at the finalized rate
    pub fn redeem(ctx: Context<Redeem>, amount: u64) -> Result<()> {
        instructions::redeem::handler(ctx, amount)
    }
}
