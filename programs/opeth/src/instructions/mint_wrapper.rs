use anchor_lang::prelude::*;
use anchor_spl::token_interface as token;

use crate::errors::ErrorCode;
use crate::events::MintRecord;
use crate::instructions::WrapperContext;
use crate::utils::pda::wrapper_signer_seeds;
use crate::utils::token::receive;

/// Mints wrapper units by depositing the instrument and its collateral
/// User deposits `amount` instrument + `amount × collateral_scale` collateral → `amount` wrapper units
pub fn handler(ctx: Context<WrapperContext>, amount: u64) -> Result<()> {
    let collateral = ctx.accounts.wrapper.record_mint(amount)?;

    let token_program = ctx.accounts.token_program.to_account_info();
    let user = ctx.accounts.user.to_account_info();

    // 1. Instrument from user to instrument vault
    receive(
        &token_program,
        &ctx.accounts.user_instrument_account,
        &ctx.accounts.instrument_vault,
        &ctx.accounts.instrument_mint,
        &user,
        amount,
    )?;

    // 2. Collateral from user to collateral vault
    receive(
        &token_program,
        &ctx.accounts.user_collateral_account,
        &ctx.accounts.collateral_vault,
        &ctx.accounts.collateral_mint,
        &user,
        collateral,
    )?;

    // 3. Mint wrapper units to user (wrapper PDA signs as mint authority)
    let wrapper = &ctx.accounts.wrapper;
    let instrument_mint_key = wrapper.instrument_mint;
    let collateral_mint_key = wrapper.collateral_mint;
    let bump = [wrapper.bump];
    let seeds = wrapper_signer_seeds(&instrument_mint_key, &collateral_mint_key, &bump);
    let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

    token::mint_to(
        CpiContext::new_with_signer(
            token_program,
            token::MintTo {
                mint: ctx.accounts.wrapper_mint.to_account_info(),
                to: ctx.accounts.user_wrapper_account.to_account_info(),
                authority: wrapper.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
    .map_err(|e| {
        msg!("Minting {} wrapper units failed: {:?}", amount, e);
        error!(ErrorCode::TransferFailed)
    })?;

    msg!(
        "Minted {} wrapper units against {} collateral. Total supply: {}",
        amount,
        collateral,
        wrapper.total_supply
    );

    emit!(MintRecord {
        ts: Clock::get()?.unix_timestamp,
        user: ctx.accounts.user.key(),
        wrapper: wrapper.key(),
        amount,
        collateral_deposited: collateral,
        total_supply_after: wrapper.total_supply,
    });

    Ok(())
}
