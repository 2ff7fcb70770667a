use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use otoken_controller::program::OtokenController;
use otoken_controller::Settlement;

use crate::errors::{ErrorCode, OpethResult};

pub trait SettlementOracle {
    /// Whether the instrument has expired with a final payout, i.e. redeemable for proceeds
    fn is_settlement_allowed(&self) -> OpethResult<bool>;
}

pub trait InstrumentSettlement {
    /// Redeems `instrument_amount` units held by the wrapper with the settlement authority
    ///
    /// Returns the settlement currency received, measured on the wrapper's settlement vault
    fn claim(&mut self, instrument_amount: u64) -> OpethResult<u64>;
}

/// Settlement through the otoken controller program, signed by the wrapper PDA
pub struct ControllerSettlement<'a, 'info> {
    pub settlement: &'a Account<'info, Settlement>,
    pub controller_program: &'a Program<'info, OtokenController>,
    pub token_program: &'a Program<'info, Token>,
    pub wrapper: AccountInfo<'info>,
    pub instrument_mint: &'a Account<'info, Mint>,
    pub settlement_mint: &'a Account<'info, Mint>,
    pub instrument_vault: &'a mut Account<'info, TokenAccount>,
    pub settlement_vault: &'a mut Account<'info, TokenAccount>,
    pub payout_vault: &'a Account<'info, TokenAccount>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
    pub now: i64,
}

impl<'a, 'info> SettlementOracle for ControllerSettlement<'a, 'info> {
    fn is_settlement_allowed(&self) -> OpethResult<bool> {
        Ok(self.settlement.is_settlement_allowed(self.now))
    }
}

impl<'a, 'info> InstrumentSettlement for ControllerSettlement<'a, 'info> {
    fn claim(&mut self, instrument_amount: u64) -> OpethResult<u64> {
        let proceeds_before = self.settlement_vault.amount;

        otoken_controller::cpi::redeem(
            CpiContext::new_with_signer(
                self.controller_program.to_account_info(),
                otoken_controller::cpi::accounts::Redeem {
                    holder: self.wrapper.clone(),
                    settlement: self.settlement.to_account_info(),
                    instrument_mint: self.instrument_mint.to_account_info(),
                    settlement_mint: self.settlement_mint.to_account_info(),
                    payout_vault: self.payout_vault.to_account_info(),
                    holder_instrument_account: self.instrument_vault.to_account_info(),
                    holder_payout_account: self.settlement_vault.to_account_info(),
                    token_program: self.token_program.to_account_info(),
                },
                self.signer_seeds,
            ),
            instrument_amount,
        )
        .map_err(|e| {
            msg!("Settlement redeem of {} failed: {:?}", instrument_amount, e);
            ErrorCode::RedemptionFailed
        })?;

        self.instrument_vault.reload().map_err(|_e| {
            msg!("Failed to reload instrument_vault");
            ErrorCode::RedemptionFailed
        })?;
        self.settlement_vault.reload().map_err(|_e| {
            msg!("Failed to reload settlement_vault");
            ErrorCode::RedemptionFailed
        })?;

        self.settlement_vault
            .amount
            .checked_sub(proceeds_before)
            .ok_or(ErrorCode::MathOverflow)
    }
}

#[cfg(test)]
pub struct TestSettlement {
    pub allowed: bool,
    pub payout_per_unit: u64,
    pub unit: u64,
    pub claims: u32,
    pub claimed_amount: u64,
    pub fail_claim: bool,
}

#[cfg(test)]
impl TestSettlement {
    pub fn new(allowed: bool, payout_per_unit: u64, unit: u64) -> Self {
        TestSettlement {
            allowed,
            payout_per_unit,
            unit,
            claims: 0,
            claimed_amount: 0,
            fail_claim: false,
        }
    }
}

#[cfg(test)]
impl SettlementOracle for TestSettlement {
    fn is_settlement_allowed(&self) -> OpethResult<bool> {
        Ok(self.allowed)
    }
}

#[cfg(test)]
impl InstrumentSettlement for TestSettlement {
    fn claim(&mut self, instrument_amount: u64) -> OpethResult<u64> {
        if self.fail_claim {
            return Err(ErrorCode::RedemptionFailed);
        }

        self.claims += 1;
        self.claimed_amount += instrument_amount;

        let proceeds = (instrument_amount as u128) * (self.payout_per_unit as u128)
            / (self.unit as u128);
        Ok(proceeds as u64)
    }
}
