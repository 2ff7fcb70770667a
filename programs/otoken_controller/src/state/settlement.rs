use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::utils::math::calculate_settlement_payout;


/// Settlement record for one instrument mint
///
/// PDA Seeds:
/// - "settlement"
/// - instrument_mint
///
/// Integrators query `is_settlement_allowed` before calling `redeem`.
#[account]
#[derive(Default)]
pub struct Settlement {
    pub admin: Pubkey,                // Instrument mint authority; funds the vault and finalizes the price
    pub instrument_mint: Pubkey,      // The expiring instrument (oToken)
    pub settlement_mint: Pubkey,      // Currency paid out on redemption (e.g., USDC)
    pub payout_vault: Pubkey,         // Vault PDA holding settlement currency
    pub instrument_decimals: u8,
    pub expiry: i64,                  // Expiration timestamp
    pub price_finalized: bool,
    pub payout_per_unit: u64,         // Settlement currency per full instrument unit
    pub total_redeemed: u64,          // Instrument units burned through redeem
    pub bump: u8,
}

impl Settlement {
    pub const SIZE: usize = 8 + 32 + 32 + 32 + 32 + 1 + 8 + 1 + 8 + 8 + 1;

    /// Redemption opens once the instrument has expired and its price is final
    pub fn is_settlement_allowed(&self, now: i64) -> bool {
        self.price_finalized && now >= self.expiry
    }

    /// Settlement currency owed for `amount` instrument minor units
    pub fn payout_for(&self, amount: u64) -> Result<u64> {
        require!(self.price_finalized, ErrorCode::SettlementNotAllowed);
        calculate_settlement_payout(amount, self.payout_per_unit, self.instrument_decimals)
    }
}
