use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;

declare_id!("8GZgKguny8HH7CFxUJFBALaYZ3Ug2TV1jLJv5AqVZkFW");

#[program]
pub mod swap_router {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>, fee_bps: u16) -> Result<()> {
        instructions::initialize_pool::handler(ctx, fee_bps)
    }

    pub fn add_liquidity(ctx: Context<Liquidity>, sol_amount: u64, token_amount: u64) -> Result<()> {
        instructions::add_liquidity::handler(ctx, sol_amount, token_amount)
    }

    pub fn remove_liquidity(
        ctx: Context<Liquidity>,
        sol_amount: u64,
        token_amount: u64,
    ) -> Result<()> {
        instructions::remove_liquidity::handler(ctx, sol_amount, token_amount)
    }

    /// Buys exactly `amount_out` tokens, paying at most `max_amount_in` lamports
    pub fn swap_sol_for_exact_tokens(
        ctx: Context<SwapSolForExactTokens>,
        amount_out: u64,
        max_amount_in: u64,
    ) -> Result<()> {
        instructions::swap_sol_for_exact_tokens::handler(ctx, amount_out, max_amount_in)
    }
}
