use anchor_lang::prelude::*;

/// SOL/token constant-product pool
///
/// PDA Seeds: "pool", token_mint
#[account]
pub struct Pool {
    /// Only the authority adds or removes liquidity
    pub authority: Pubkey,
    pub token_mint: Pubkey,
    /// Token account PDA owned by the pool
    pub token_vault: Pubkey,
    /// System-owned PDA holding the SOL side
    pub sol_vault: Pubkey,
    pub sol_reserve: u64,
    pub token_reserve: u64,
    pub fee_bps: u16,
    pub bump: u8,
    pub sol_vault_bump: u8,
}

impl Pool {
    pub const SIZE: usize = 8 + 32 + 32 + 32 + 32 + 8 + 8 + 2 + 1 + 1;
}
