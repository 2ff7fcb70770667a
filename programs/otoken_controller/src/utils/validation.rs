use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Validates that an amount is greater than zero
pub fn validate_amount(amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    Ok(())
}

/// Validates that expiry is in the future
pub fn validate_expiry(expiry: i64) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    require!(expiry > current_time, ErrorCode::ExpiryInPast);
    Ok(())
}

/// Validates that the instrument has expired (for settlement operations)
pub fn validate_expired(expiry: i64) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    require!(current_time >= expiry, ErrorCode::InstrumentNotExpired);
    Ok(())
}

/// Validates sufficient vault balance for a payout
pub fn validate_vault_balance(vault_balance: u64, required: u64) -> Result<()> {
    require!(vault_balance >= required, ErrorCode::InsufficientPayout);
    Ok(())
}
