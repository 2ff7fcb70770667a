use anchor_lang::prelude::*;

use crate::errors::{ErrorCode, OpethResult};
use crate::settlement::{InstrumentSettlement, SettlementOracle};
use crate::utils::math::{
    calculate_collateral_amount, calculate_redemption_payout, calculate_unit_payout,
    unit_for_decimals,
};
use crate::utils::validation::{validate_amount, validate_holder_balance};
use crate::validate;


/// Ledger for one wrapped instrument
///
/// PDA Seeds (used to derive the wrapper address):
/// - "wrapper"
/// - instrument_mint
/// - collateral_mint
///
/// Lifecycle: Active (unsettled) → Settled (`proceeds_claimed`, `unit_payout` fixed).
/// There is no transition back.
#[account]
#[derive(Default)]
pub struct WrapperState {
    // === BINDING (immutable after create_wrapper) ===
    pub instrument_mint: Pubkey,      // The wrapped instrument (oToken)
    pub collateral_mint: Pubkey,      // Collateral deposited alongside (e.g., wSOL)
    pub settlement_mint: Pubkey,      // Currency the instrument settles in (e.g., USDC)
    pub settlement: Pubkey,           // Controller settlement record for the instrument
    pub wrapper_mint: Pubkey,         // Wrapper unit mint PDA
    pub instrument_vault: Pubkey,
    pub collateral_vault: Pubkey,
    pub settlement_vault: Pubkey,
    pub instrument_decimals: u8,
    pub collateral_scale: u64,        // Collateral minor units per wrapper minor unit
    pub bump: u8,

    // === LEDGER ===
    pub total_supply: u64,            // Wrapper units outstanding
    pub proceeds_claimed: bool,       // Monotonic: false → true once
    pub unit_payout: u64,             // Settlement currency per full instrument unit
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// Settlement authority has not opened redemption yet
    NotAllowed,
    /// Proceeds were claimed by an earlier call
    AlreadyClaimed,
    /// Nothing outstanding to claim against
    NothingOutstanding,
    Claimed {
        instrument_redeemed: u64,
        proceeds: u64,
        unit_payout: u64,
        total_supply: u64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedemptionAsset {
    /// Unsettled: the instrument itself is passed back
    Instrument(u64),
    /// Settled: the pro-rata settlement payout
    Settlement(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redemption {
    pub collateral: u64,
    pub asset: RedemptionAsset,
}

impl WrapperState {
    pub fn unit(&self) -> OpethResult<u64> {
        unit_for_decimals(self.instrument_decimals)
    }

    pub fn is_settled(&self) -> bool {
        self.proceeds_claimed
    }

    pub fn collateral_for(&self, amount: u64) -> OpethResult<u64> {
        calculate_collateral_amount(amount, self.collateral_scale)
    }

    /// Books `amount` new wrapper units; returns the collateral the depositor owes
    pub fn record_mint(&mut self, amount: u64) -> OpethResult<u64> {
        validate_amount(amount)?;
        validate!(!self.proceeds_claimed, ErrorCode::MintAfterSettlement)?;

        let collateral = self.collateral_for(amount)?;

        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(collateral)
    }

    /// Claims settlement proceeds for the whole instrument balance, at most once
    pub fn claim_proceeds<S: SettlementOracle + InstrumentSettlement>(
        &mut self,
        settlement: &mut S,
        instrument_balance: u64,
    ) -> OpethResult<ClaimOutcome> {
        if self.proceeds_claimed {
            return Ok(ClaimOutcome::AlreadyClaimed);
        }

        if !settlement.is_settlement_allowed()? {
            return Ok(ClaimOutcome::NotAllowed);
        }

        if self.total_supply == 0 || instrument_balance == 0 {
            msg!(
                "Skipping claim: total supply {}, instrument balance {}",
                self.total_supply,
                instrument_balance
            );
            return Ok(ClaimOutcome::NothingOutstanding);
        }

        let proceeds = settlement.claim(instrument_balance)?;
        let unit_payout = calculate_unit_payout(proceeds, self.total_supply, self.unit()?)?;

        self.unit_payout = unit_payout;
        self.proceeds_claimed = true;

        Ok(ClaimOutcome::Claimed {
            instrument_redeemed: instrument_balance,
            proceeds,
            unit_payout,
            total_supply: self.total_supply,
        })
    }

    /// Burns `amount` wrapper units from the ledger and works out what the holder receives
    pub fn record_redeem(&mut self, amount: u64, holder_balance: u64) -> OpethResult<Redemption> {
        validate_amount(amount)?;
        validate_holder_balance(holder_balance, amount)?;

        let collateral = self.collateral_for(amount)?;

        let asset = if self.proceeds_claimed {
            RedemptionAsset::Settlement(calculate_redemption_payout(
                amount,
                self.unit_payout,
                self.unit()?,
            )?)
        } else {
            RedemptionAsset::Instrument(amount)
        };

        self.total_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(Redemption { collateral, asset })
    }
}
