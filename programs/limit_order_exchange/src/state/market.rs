use anchor_lang::prelude::*;


/// Trading market for a pair of SPL tokens
#[account]
pub struct Market {
    /// Base token mint (e.g., option instrument)
    pub base_mint: Pubkey,

    /// Quote token mint (e.g., USDC)
    pub quote_mint: Pubkey,

    /// Receives `protocol_fee_per_order` lamports for every order a taker fills
    pub fee_recipient: Pubkey,

    /// Lamports charged to the taker per filled order
    pub protocol_fee_per_order: u64,

    /// PDA bump
    pub bump: u8,

    /// Counter for generating unique order IDs
    pub next_order_id: u64,

    /// Market statistics
    pub total_orders_placed: u64,
    pub total_orders_filled: u64,
    pub total_base_volume: u64,
    pub total_quote_volume: u64,
    pub total_fees_collected: u64,
}

impl Market {
    pub const SIZE: usize = 8 + 32 + 32 + 32 + 8 + 1 + 8 + 8 + 8 + 8 + 8 + 8;

    /// Fee for filling `orders` orders in one batch
    pub fn fee_for(&self, orders: u64) -> Option<u64> {
        self.protocol_fee_per_order.checked_mul(orders)
    }
}
