use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;
use anchor_lang::Discriminator;
use anchor_spl::token::TokenAccount;

use crate::errors::{ErrorCode, ZapResult};
use crate::validate;


/// Balances the fill is measured against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VenueBalances {
    pub instrument: u64,
    pub quote: u64,
    pub lamports: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillReceipt {
    pub instrument_received: u64,
    pub quote_paid: u64,
    pub fee_paid: u64,
}

pub trait LimitOrderVenue {
    /// Taker-side balances right now
    fn balances(&mut self) -> ZapResult<VenueBalances>;

    /// Executes a pre-encoded fill instruction on the exchange
    fn submit(&mut self, payload: &[u8]) -> ZapResult;
}

/// Buys exactly `instrument_wanted` units for at most `max_payment` quote and `protocol_fee` lamports
///
/// The exchange is a black box: its effect is judged only by the taker's balance deltas.
pub fn fill_for_fixed_output<V: LimitOrderVenue>(
    venue: &mut V,
    instrument_wanted: u64,
    max_payment: u64,
    protocol_fee: u64,
    payload: &[u8],
) -> ZapResult<FillReceipt> {
    validate!(instrument_wanted > 0, ErrorCode::InvalidAmount)?;
    validate!(!payload.is_empty(), ErrorCode::InvalidFillPayload)?;

    let before = venue.balances()?;

    venue.submit(payload)?;

    let after = venue.balances()?;

    let instrument_received = after
        .instrument
        .checked_sub(before.instrument)
        .ok_or(ErrorCode::FillReverted)?;
    let quote_paid = before
        .quote
        .checked_sub(after.quote)
        .ok_or(ErrorCode::FillReverted)?;
    let fee_paid = before
        .lamports
        .checked_sub(after.lamports)
        .ok_or(ErrorCode::FillReverted)?;

    validate!(
        instrument_received == instrument_wanted,
        ErrorCode::FillReverted,
        "fill returned {} instrument units, wanted {}",
        instrument_received,
        instrument_wanted
    )?;
    validate!(
        quote_paid <= max_payment,
        ErrorCode::FillReverted,
        "fill cost {} quote, max {}",
        quote_paid,
        max_payment
    )?;
    validate!(
        fee_paid <= protocol_fee,
        ErrorCode::FillReverted,
        "fill charged {} lamports, protocol fee {}",
        fee_paid,
        protocol_fee
    )?;

    Ok(FillReceipt {
        instrument_received,
        quote_paid,
        fee_paid,
    })
}

/// Fills through `limit_order_exchange::batch_fill_limit_orders`, the zap authority acting as taker
///
/// `accounts` is the exchange instruction's account list, in order, as passed to the zap.
pub struct ExchangeFillVenue<'a, 'info> {
    pub exchange_program: &'a AccountInfo<'info>,
    pub taker: &'a AccountInfo<'info>,
    pub instrument_vault: &'a mut Account<'info, TokenAccount>,
    pub quote_vault: &'a mut Account<'info, TokenAccount>,
    pub accounts: &'a [AccountInfo<'info>],
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

/// Builds the exchange CPI from the forwarded account list
///
/// Only the taker signs; every other account is passed without signing authority,
/// whatever its flag on the outer instruction.
pub fn fill_instruction(
    exchange_program: Pubkey,
    taker: Pubkey,
    accounts: &[AccountInfo],
    payload: &[u8],
) -> Instruction {
    let accounts = accounts
        .iter()
        .map(|info| AccountMeta {
            pubkey: info.key(),
            is_signer: info.key() == taker,
            is_writable: info.is_writable,
        })
        .collect();

    Instruction {
        program_id: exchange_program,
        accounts,
        data: payload.to_vec(),
    }
}

impl<'a, 'info> LimitOrderVenue for ExchangeFillVenue<'a, 'info> {
    fn balances(&mut self) -> ZapResult<VenueBalances> {
        self.instrument_vault.reload().map_err(|e| {
            msg!("{:?}", e);
            ErrorCode::FillReverted
        })?;
        self.quote_vault.reload().map_err(|e| {
            msg!("{:?}", e);
            ErrorCode::FillReverted
        })?;

        Ok(VenueBalances {
            instrument: self.instrument_vault.amount,
            quote: self.quote_vault.amount,
            lamports: self.taker.lamports(),
        })
    }

    fn submit(&mut self, payload: &[u8]) -> ZapResult {
        let discriminator = limit_order_exchange::instruction::BatchFillLimitOrders::DISCRIMINATOR;
        validate!(
            payload.starts_with(discriminator),
            ErrorCode::InvalidFillPayload
        )?;

        let instruction = fill_instruction(
            self.exchange_program.key(),
            self.taker.key(),
            self.accounts,
            payload,
        );

        let mut account_infos = Vec::with_capacity(self.accounts.len() + 1);
        account_infos.push(self.exchange_program.clone());
        account_infos.extend(self.accounts.iter().cloned());

        invoke_signed(&instruction, &account_infos, self.signer_seeds).map_err(|e| {
            msg!("{:?}", e);
            ErrorCode::FillReverted
        })
    }
}

/// In-memory order book: fills at a fixed price per full instrument unit
#[cfg(test)]
pub struct TestOrderBook {
    pub balances: VenueBalances,
    pub liquidity: u64,
    pub price: u64,
    pub unit: u64,
    pub fee_per_order: u64,
    pub orders: u64,
    pub requested: u64,
    pub submissions: u32,
    pub reject: bool,
}

#[cfg(test)]
impl TestOrderBook {
    pub fn new(quote: u64, lamports: u64, liquidity: u64, price: u64, unit: u64) -> Self {
        TestOrderBook {
            balances: VenueBalances {
                instrument: 0,
                quote,
                lamports,
            },
            liquidity,
            price,
            unit,
            fee_per_order: 0,
            orders: 1,
            requested: 0,
            submissions: 0,
            reject: false,
        }
    }
}

#[cfg(test)]
impl LimitOrderVenue for TestOrderBook {
    fn balances(&mut self) -> ZapResult<VenueBalances> {
        Ok(self.balances)
    }

    fn submit(&mut self, _payload: &[u8]) -> ZapResult {
        self.submissions += 1;

        if self.reject {
            return Err(ErrorCode::FillReverted);
        }

        // Non-strict semantics: the book fills what it has
        let filled = self.requested.min(self.liquidity);
        let cost = ((filled as u128) * (self.price as u128) / (self.unit as u128)) as u64;
        let fee = self.fee_per_order * self.orders;

        if cost > self.balances.quote || fee > self.balances.lamports {
            return Err(ErrorCode::FillReverted);
        }

        self.liquidity -= filled;
        self.balances.instrument += filled;
        self.balances.quote -= cost;
        self.balances.lamports -= fee;

        Ok(())
    }
}
