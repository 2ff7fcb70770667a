use anchor_lang::prelude::*;

use crate::errors::{ErrorCode, OpethResult};
use crate::validate;

/// Validates that an amount is greater than zero
pub fn validate_amount(amount: u64) -> OpethResult {
    validate!(amount > 0, ErrorCode::InvalidAmount)
}

/// Validates that a holder owns at least `required` wrapper units
pub fn validate_holder_balance(balance: u64, required: u64) -> OpethResult {
    validate!(
        balance >= required,
        ErrorCode::InsufficientBalance,
        "balance {} < redeem amount {}",
        balance,
        required
    )
}
