use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use otoken_controller::program::OtokenController;
use otoken_controller::Settlement;

use crate::events::ProceedsClaimedRecord;
use crate::instructions::ClaimContext;
use crate::settlement::ControllerSettlement;
use crate::state::{ClaimOutcome, WrapperState};
use crate::utils::pda::wrapper_signer_seeds;

/// Permissionless; a no-op unless settlement is open and proceeds are still unclaimed
pub fn handler(ctx: Context<ClaimContext>) -> Result<()> {
    let accounts = &mut *ctx.accounts;

    let outcome = claim_through_controller(
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

    match outcome {
        ClaimOutcome::NotAllowed => msg!("Settlement not open yet, nothing claimed"),
        ClaimOutcome::AlreadyClaimed => msg!("Proceeds already claimed"),
        ClaimOutcome::NothingOutstanding => msg!("No instrument outstanding, nothing claimed"),
        ClaimOutcome::Claimed { .. } => {}
    }

    Ok(())
}

/// Runs the wrapper's one-time claim against the otoken controller
///
/// Shared by `claim_proceeds` and `redeem`, which claims before paying out.
#[allow(clippy::too_many_arguments)]
pub fn claim_through_controller<'info>(
    wrapper: &mut Account<'info, WrapperState>,
    settlement: &Account<'info, Settlement>,
    controller_program: &Program<'info, OtokenController>,
    token_program: &Program<'info, Token>,
    instrument_mint: &Account<'info, Mint>,
    settlement_mint: &Account<'info, Mint>,
    instrument_vault: &mut Account<'info, TokenAccount>,
    settlement_vault: &mut Account<'info, TokenAccount>,
    payout_vault: &Account<'info, TokenAccount>,
) -> Result<ClaimOutcome> {
    let wrapper_key = wrapper.key();
    let wrapper_info = wrapper.to_account_info();
    let instrument_mint_key = wrapper.instrument_mint;
    let collateral_mint_key = wrapper.collateral_mint;
    let bump = [wrapper.bump];
    let seeds = wrapper_signer_seeds(&instrument_mint_key, &collateral_mint_key, &bump);
    let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

    let now = Clock::get()?.unix_timestamp;
    let instrument_balance = instrument_vault.amount;

    let mut controller = ControllerSettlement {
        settlement,
        controller_program,
        token_program,
        wrapper: wrapper_info,
        instrument_mint,
        settlement_mint,
        instrument_vault,
        settlement_vault,
        payout_vault,
        signer_seeds,
        now,
    };

    let outcome = wrapper.claim_proceeds(&mut controller, instrument_balance)?;

    if let ClaimOutcome::Claimed {
        instrument_redeemed,
        proceeds,
        unit_payout,
        total_supply,
    } = outcome
    {
        msg!(
            "Claimed {} settlement currency for {} instrument units. Unit payout: {}",
            proceeds,
            instrument_redeemed,
            unit_payout
        );

        emit!(ProceedsClaimedRecord {
            ts: now,
            wrapper: wrapper_key,
            instrument_redeemed,
            proceeds,
            unit_payout,
            total_supply_at_claim: total_supply,
        });
    }

    Ok(outcome)
}
