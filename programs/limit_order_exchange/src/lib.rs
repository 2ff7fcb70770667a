use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("8ujxQrgoJpjTpuuYsQGo7tsgT9gkzfkKqJEaqgQUi5nD");

#[program]
pub mod limit_order_exchange {
    use super::*;

    pub fn create_market(ctx: Context<CreateMarket>, protocol_fee_per_order: u64) -> Result<()> {
        instructions::create_market::handler(ctx, protocol_fee_per_order)
    }

    /// `expires_at == 0` keeps the order open until cancelled
    pub fn place_order(
        ctx: Context<PlaceOrder>,
        price: u64,
        size: u64,
        is_buy: bool,
        expires_at: i64,
    ) -> Result<()> {
        instructions::place_order::handler(ctx, price, size, is_buy, expires_at)
    }

    pub fn cancel_order(ctx: Context<CancelOrder>) -> Result<()> {
        instructions::cancel_order::handler(ctx)
    }

    /// Fills several orders for one taker.
    /// Remaining accounts: `[order, escrow, maker_receive_account]` per entry of `fill_sizes`.
    pub fn batch_fill_limit_orders<'info>(
        ctx: Context<'_, '_, 'info, 'info, BatchFillLimitOrders<'info>>,
        fill_sizes: Vec<u64>,
        revert_if_incomplete: bool,
    ) -> Result<()> {
        instructions::batch_fill_limit_orders::handler(ctx, fill_sizes, revert_if_incomplete)
    }
}
