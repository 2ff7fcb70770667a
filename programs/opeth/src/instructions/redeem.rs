use anchor_lang::prelude::*;
use anchor_spl::token_interface as token;

use crate::errors::ErrorCode;
use crate::events::RedeemRecord;
use crate::instructions::claim_proceeds::claim_through_controller;
use crate::instructions::SettlementContext;
use crate::state::RedemptionAsset;
use crate::utils::pda::wrapper_signer_seeds;
use crate::utils::token::send_from_vault;

/// Redeems wrapper units
/// Always returns `amount × collateral_scale` collateral, plus:
/// - Active: `amount` instrument units
/// - Settled: `floor(amount × unit_payout / unit)` settlement currency
///
/// Claims the settlement proceeds first when settlement has opened and nobody has claimed yet.
pub fn handler(ctx: Context<SettlementContext>, amount: u64) -> Result<()> {
    let accounts = &mut *ctx.accounts;

    // 1. Settle first if possible, so this redemption sees the final state
    claim_through_controller(
        &mut accounts.wrapper,
        &accounts.settlement,
        &accounts.controller_program,
        &accounts.token_program,
        &accounts.instrument_mint,
        &accounts.settlement_mint,
        &mut accounts.instrument_vault,
        &mut accounts.settlement_vault,
        &accounts.payout_vault,
    )?;

    // 2. Ledger
    let holder_balance = accounts.user_wrapper_account.amount;
    let redemption = accounts.wrapper.record_redeem(amount, holder_balance)?;

    let token_program = accounts.token_program.to_account_info();
    let wrapper = &accounts.wrapper;
    let wrapper_info = wrapper.to_account_info();
    let instrument_mint_key = wrapper.instrument_mint;
    let collateral_mint_key = wrapper.collateral_mint;
    let bump = [wrapper.bump];
    let seeds = wrapper_signer_seeds(&instrument_mint_key, &collateral_mint_key, &bump);
    let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

    // 3. Burn wrapper units from user
    token::burn(
        CpiContext::new(
            token_program.clone(),
            token::Burn {
                mint: accounts.wrapper_mint.to_account_info(),
                from: accounts.user_wrapper_account.to_account_info(),
                authority: accounts.user.to_account_info(),
            },
        ),
        amount,
    )
    .map_err(|e| {
        msg!("Burning {} wrapper units failed: {:?}", amount, e);
        error!(ErrorCode::RedemptionFailed)
    })?;

    // 4. Collateral back to user
    if redemption.collateral > 0 {
        send_from_vault(
            &token_program,
            &accounts.collateral_vault,
            &accounts.user_collateral_account,
            &accounts.collateral_mint,
            &wrapper_info,
            signer_seeds,
            redemption.collateral,
        )?;
    }

    // 5. Instrument (Active) or settlement payout (Settled)
    let (instrument_returned, settlement_paid) = match redemption.asset {
        RedemptionAsset::Instrument(units) => {
            send_from_vault(
                &token_program,
                &accounts.instrument_vault,
                &accounts.user_instrument_account,
                &accounts.instrument_mint,
                &wrapper_info,
                signer_seeds,
                units,
            )?;
            (units, 0)
        }
        RedemptionAsset::Settlement(payout) => {
            if payout > 0 {
                send_from_vault(
                    &token_program,
                    &accounts.settlement_vault,
                    &accounts.user_settlement_account,
                    &accounts.settlement_mint,
                    &wrapper_info,
                    signer_seeds,
                    payout,
                )?;
            }
            (0, payout)
        }
    };

    msg!(
        "Redeemed {} wrapper units: {} collateral, {} instrument, {} settlement currency",
        amount,
        redemption.collateral,
        instrument_returned,
        settlement_paid
    );

    emit!(RedeemRecord {
        ts: Clock::get()?.unix_timestamp,
        user: accounts.user.key(),
        wrapper: wrapper.key(),
        amount,
        collateral_returned: redemption.collateral,
        instrument_returned,
        settlement_paid,
        total_supply_after: wrapper.total_supply,
    });

    Ok(())
}
