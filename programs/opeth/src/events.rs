use anchor_lang::prelude::*;

#[event]
pub struct WrapperCreatedRecord {
    pub ts: i64,
    pub wrapper: Pubkey,
    pub instrument_mint: Pubkey,
    pub collateral_mint: Pubkey,
    pub settlement_mint: Pubkey,
    pub wrapper_mint: Pubkey,
    pub collateral_scale: u64,
}

#[event]
pub struct MintRecord {
    pub ts: i64,
    pub user: Pubkey,
    pub wrapper: Pubkey,
    pub amount: u64,
    pub collateral_deposited: u64,
    pub total_supply_after: u64,
}

#[event]
pub struct RedeemRecord {
    pub ts: i64,
    pub user: Pubkey,
    pub wrapper: Pubkey,
    pub amount: u64,
    pub collateral_returned: u64,
    pub instrument_returned: u64,
    pub settlement_paid: u64,
    pub total_supply_after: u64,
}

#[event]
pub struct ProceedsClaimedRecord {
    pub ts: i64,
    pub wrapper: Pubkey,
    pub instrument_redeemed: u64,
    pub proceeds: u64,
    pub unit_payout: u64,
    pub total_supply_at_claim: u64,
}
