use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};
use anchor_spl::token_interface as token;

use crate::errors::ErrorCode;

/// Pulls tokens from a user account into a wrapper vault (user signs)
pub fn receive<'info>(
    token_program: &AccountInfo<'info>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    mint: &Account<'info, Mint>,
    authority: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    token::transfer_checked(
        CpiContext::new(
            token_program.clone(),
            token::TransferChecked {
                from: from.to_account_info(),
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: authority.clone(),
            },
        ),
        amount,
        mint.decimals,
    )
    .map_err(|e| {
        msg!("Transfer of {} into {} failed: {:?}", amount, to.key(), e);
        error!(ErrorCode::TransferFailed)
    })
}

/// Sends tokens out of a wrapper vault (wrapper PDA signs)
pub fn send_from_vault<'info>(
    token_program: &AccountInfo<'info>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    mint: &Account<'info, Mint>,
    authority: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    token::transfer_checked(
        CpiContext::new_with_signer(
            token_program.clone(),
            token::TransferChecked {
                from: from.to_account_info(),
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
        mint.decimals,
    )
    .map_err(|e| {
        msg!("Transfer of {} from {} failed: {:?}", amount, from.key(), e);
        error!(ErrorCode::RedemptionFailed)
    })
}
