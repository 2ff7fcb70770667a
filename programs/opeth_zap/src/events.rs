use anchor_lang::prelude::*;

#[event]
pub struct ZapMintRecord {
    pub ts: i64,
    pub user: Pubkey,
    pub wrapper: Pubkey,
    pub wrapper_amount: u64,
    pub native_value: u64,
    pub native_required: u64,
    pub collateral_wrapped: u64,
    pub swap_native_spent: u64,
    pub quote_bought: u64,
    pub quote_paid: u64,
    pub protocol_fee_paid: u64,
    pub quote_returned: u64,
    pub native_refunded: u64,
}
