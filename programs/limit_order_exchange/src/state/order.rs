use anchor_lang::prelude::*;

use crate::errors::ErrorCode;


/// Single escrowed limit order
#[account]
pub struct Order {
    /// Market this order belongs to
    pub market: Pubkey,

    /// Unique order ID within the market
    pub order_id: u64,

    /// Order owner
    pub owner: Pubkey,

    /// Order side: true = buy base with quote, false = sell base for quote
    pub is_buy: bool,

    /// Price (quote tokens per full base token)
    pub price: u64,

    /// Original order size (in base token units)
    pub size: u64,

    /// Filled amount (in base token units)
    pub filled: u64,

    /// Escrow token account PDA holding the maker's deposit
    pub escrow: Pubkey,

    /// PDA bump
    pub bump: u8,

    /// Creation timestamp
    pub created_at: i64,

    /// 0 = good until cancelled
    pub expires_at: i64,
}

impl Order {
    pub const SIZE: usize = 8 + 32 + 8 + 32 + 1 + 8 + 8 + 8 + 32 + 1 + 8 + 8;

    pub fn remaining(&self) -> u64 {
        self.size.saturating_sub(self.filled)
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at != 0 && now >= self.expires_at
    }

    /// Tokens the maker locks up front: quote at the fill price for buys, base 1:1 for sells
    pub fn escrow_required(&self, base_decimals: u8) -> Result<u64> {
        if self.is_buy {
            self.quote_for(self.size, base_decimals)
        } else {
            Ok(self.size)
        }
    }

    /// Quote owed for `fill_size` base units: price × fill_size / 10^base_decimals
    pub fn quote_for(&self, fill_size: u64, base_decimals: u8) -> Result<u64> {
        let quote = (self.price as u128)
            .checked_mul(fill_size as u128)
            .ok_or(ErrorCode::MathOverflow)?
            .checked_div(10_u128.pow(base_decimals as u32))
            .ok_or(ErrorCode::MathOverflow)?;

        u64::try_from(quote).map_err(|_| error!(ErrorCode::MathOverflow))
    }

    /// Size to actually fill for a `requested` fill
    ///
    /// Strict: anything short of `requested` fails.
    /// Non-strict: expired or exhausted orders are skipped (0), oversized requests are clamped.
    pub fn plan_fill(&self, requested: u64, now: i64, strict: bool) -> Result<u64> {
        require!(requested > 0, ErrorCode::InvalidAmount);

        if self.is_expired(now) {
            require!(!strict, ErrorCode::OrderExpired);
            return Ok(0);
        }

        let remaining = self.remaining();
        if remaining == 0 {
            require!(!strict, ErrorCode::OrderFullyFilled);
            return Ok(0);
        }

        if requested > remaining {
            require!(!strict, ErrorCode::IncompleteFill);
            return Ok(remaining);
        }

        Ok(requested)
    }
}
