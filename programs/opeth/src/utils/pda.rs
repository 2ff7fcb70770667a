use anchor_lang::prelude::*;

pub const WRAPPER_SEED: &[u8] = b"wrapper";
pub const WRAPPER_MINT_SEED: &[u8] = b"wrapper_mint";
pub const INSTRUMENT_VAULT_SEED: &[u8] = b"instrument_vault";
pub const COLLATERAL_VAULT_SEED: &[u8] = b"collateral_vault";
pub const SETTLEMENT_VAULT_SEED: &[u8] = b"settlement_vault";

/// Generates PDA signer seeds for the wrapper account
/// The wrapper signs as mint authority of the wrapper mint and owner of every vault
///
/// PDA Seeds:
/// - "wrapper"
/// - instrument_mint
/// - collateral_mint
pub fn wrapper_signer_seeds<'a>(
    instrument_mint: &'a Pubkey,
    collateral_mint: &'a Pubkey,
    bump: &'a [u8; 1],
) -> [&'a [u8]; 4] {
    [
        WRAPPER_SEED,
        instrument_mint.as_ref(),
        collateral_mint.as_ref(),
        bump,
    ]
}
