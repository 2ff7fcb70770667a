use anchor_lang::prelude::*;

use instructions::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod macros;
pub mod settlement;
pub mod state;
pub mod utils;

// Re-export at crate root for Anchor's macro expansion
pub use instructions::{ClaimContext, SettlementContext, WrapperContext, WrapperCreate};
pub use state::WrapperState;

declare_id!("836o2JitQie9qPJF1Dw7bccR15TXXhhfehWNKnfeXAwg");

#[program]
pub mod opeth {
    use super::*;

    /// CreateWrapper: binds a wrapper to one instrument + collateral pair and creates its vaults
    pub fn create_wrapper(ctx: Context<WrapperCreate>) -> Result<()> {
        instructions::create_wrapper::handler(ctx)
    }

    /// Mint: deposit instrument + collateral → wrapper units 1:1 with instrument units
    pub fn mint(ctx: Context<WrapperContext>, amount: u64) -> Result<()> {
        instructions::mint_wrapper::handler(ctx, amount)
    }

    /// Redeem: burn wrapper units → collateral plus instrument (unsettled) or settlement payout
    pub fn redeem(ctx: Context<SettlementContext>, amount: u64) -> Result<()> {
        instructions::redeem::handler(ctx, amount)
    }

    /// ClaimProceeds: permissionless, idempotent claim of settlement proceeds
    pub fn claim_proceeds(ctx: Context<ClaimContext>) -> Result<()> {
        instructions::claim_proceeds::handler(ctx)
    }
}
