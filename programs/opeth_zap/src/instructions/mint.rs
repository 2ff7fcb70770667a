use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, SyncNative, TransferChecked};

use crate::constants::ZAP_AUTHORITY_SEED;
use crate::errors::ErrorCode;
use crate::events::ZapMintRecord;
use crate::fill::{fill_for_fixed_output, ExchangeFillVenue};
use crate::instructions::ZapMint;
use crate::math::{calculate_native_refund, calculate_native_required};
use crate::swap::{quote_native_in, verify_swap};
use crate::validate;

/// Mints `wrapper_amount` wrapper units paying only lamports
///
/// 1. take `native_value` lamports
/// 2. swap lamports for exactly `quote_payment` quote (≤ `max_native_for_quote`)
/// 3. fill limit orders for `wrapper_amount` instrument units (≤ `quote_payment` quote, ≤ `protocol_fee`)
/// 4. wrap collateral lamports into wSOL
/// 5. mint wrapper units and forward them to the user
/// 6. return leftover quote and lamports
///
/// Any failing stage aborts the transaction, so no stage is ever partially visible.
#[allow(clippy::too_many_arguments)]
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, ZapMint<'info>>,
    wrapper_amount: u64,
    quote_payment: u64,
    max_native_for_quote: u64,
    protocol_fee: u64,
    native_value: u64,
    order_fill_payload: Vec<u8>,
) -> Result<()> {
    validate!(wrapper_amount > 0, ErrorCode::InvalidAmount)?;
    validate!(quote_payment > 0, ErrorCode::InvalidAmount)?;

    let collateral = ctx
        .accounts
        .wrapper
        .collateral_for(wrapper_amount)
        .map_err(|_| ErrorCode::MathOverflow)?;
    let native_required = calculate_native_required(collateral, max_native_for_quote, protocol_fee)?;

    validate!(
        native_value >= native_required,
        ErrorCode::InsufficientValueSent,
        "zap needs {} lamports, got {}",
        native_required,
        native_value
    )?;

    let bump = [ctx.bumps.zap_authority];
    let seeds: [&[u8]; 2] = [ZAP_AUTHORITY_SEED, &bump];
    let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

    let accounts = &mut *ctx.accounts;
    let zap_authority = accounts.zap_authority.to_account_info();
    let token_program = accounts.token_program.to_account_info();
    let system_program_info = accounts.system_program.to_account_info();
    let exchange_program = accounts.exchange_program.to_account_info();

    let vaults_before = [
        accounts.zap_instrument_vault.amount,
        accounts.zap_collateral_vault.amount,
        accounts.zap_wrapper_vault.amount,
        accounts.zap_quote_vault.amount,
    ];
    let lamports_before = zap_authority.lamports();

    // 1. Take value
    system_program::transfer(
        CpiContext::new(
            system_program_info.clone(),
            system_program::Transfer {
                from: accounts.user.to_account_info(),
                to: zap_authority.clone(),
            },
        ),
        native_value,
    )?;

    // 2. Lamports → quote
    let quoted = quote_native_in(&accounts.swap_pool, quote_payment)?;
    validate!(
        quoted <= max_native_for_quote,
        ErrorCode::SwapFailed,
        "pool quotes {} lamports for {} quote, max {}",
        quoted,
        quote_payment,
        max_native_for_quote
    )?;

    let swap_lamports_before = zap_authority.lamports();
    let swap_quote_before = accounts.zap_quote_vault.amount;

    swap_router::cpi::swap_sol_for_exact_tokens(
        CpiContext::new_with_signer(
            accounts.swap_program.to_account_info(),
            swap_router::cpi::accounts::SwapSolForExactTokens {
                user: zap_authority.clone(),
                pool: accounts.swap_pool.to_account_info(),
                token_mint: accounts.quote_mint.to_account_info(),
                token_vault: accounts.swap_token_vault.to_account_info(),
                sol_vault: accounts.swap_sol_vault.to_account_info(),
                user_token_account: accounts.zap_quote_vault.to_account_info(),
                token_program: token_program.clone(),
                system_program: system_program_info.clone(),
            },
            signer_seeds,
        ),
        quote_payment,
        max_native_for_quote,
    )
    .map_err(|e| {
        msg!("{:?}", e);
        ErrorCode::SwapFailed
    })?;

    accounts.zap_quote_vault.reload()?;
    let swap = verify_swap(
        swap_lamports_before,
        zap_authority.lamports(),
        swap_quote_before,
        accounts.zap_quote_vault.amount,
        quote_payment,
        max_native_for_quote,
    )?;

    msg!(
        "Bought {} quote for {} lamports",
        swap.quote_received,
        swap.native_spent
    );

    // 3. Quote → instrument
    let fill = {
        let mut venue = ExchangeFillVenue {
            exchange_program: &exchange_program,
            taker: &zap_authority,
            instrument_vault: &mut accounts.zap_instrument_vault,
            quote_vault: &mut accounts.zap_quote_vault,
            accounts: ctx.remaining_accounts,
            signer_seeds,
        };

        fill_for_fixed_output(
            &mut venue,
            wrapper_amount,
            quote_payment,
            protocol_fee,
            &order_fill_payload,
        )?
    };

    msg!(
        "Filled {} instrument units for {} quote, fee {} lamports",
        fill.instrument_received,
        fill.quote_paid,
        fill.fee_paid
    );

    // 4. Lamports → wSOL collateral
    system_program::transfer(
        CpiContext::new_with_signer(
            system_program_info.clone(),
            system_program::Transfer {
                from: zap_authority.clone(),
                to: accounts.zap_collateral_vault.to_account_info(),
            },
            signer_seeds,
        ),
        collateral,
    )?;

    token::sync_native(CpiContext::new(
        token_program.clone(),
        SyncNative {
            account: accounts.zap_collateral_vault.to_account_info(),
        },
    ))?;

    // 5. Mint wrapper units to the zap, then forward to the user
    opeth::cpi::mint(
        CpiContext::new_with_signer(
            accounts.opeth_program.to_account_info(),
            opeth::cpi::accounts::WrapperContext {
                user: zap_authority.clone(),
                wrapper: accounts.wrapper.to_account_info(),
                instrument_mint: accounts.instrument_mint.to_account_info(),
                collateral_mint: accounts.collateral_mint.to_account_info(),
                wrapper_mint: accounts.wrapper_mint.to_account_info(),
                instrument_vault: accounts.instrument_vault.to_account_info(),
                collateral_vault: accounts.collateral_vault.to_account_info(),
                user_instrument_account: accounts.zap_instrument_vault.to_account_info(),
                user_collateral_account: accounts.zap_collateral_vault.to_account_info(),
                user_wrapper_account: accounts.zap_wrapper_vault.to_account_info(),
                token_program: token_program.clone(),
            },
            signer_seeds,
        ),
        wrapper_amount,
    )
    .map_err(|e| {
        msg!("{:?}", e);
        ErrorCode::MintFailed
    })?;

    token::transfer_checked(
        CpiContext::new_with_signer(
            token_program.clone(),
            TransferChecked {
                from: accounts.zap_wrapper_vault.to_account_info(),
                mint: accounts.wrapper_mint.to_account_info(),
                to: accounts.user_wrapper_account.to_account_info(),
                authority: zap_authority.clone(),
            },
            signer_seeds,
        ),
        wrapper_amount,
        accounts.wrapper_mint.decimals,
    )
    .map_err(|e| {
        msg!("{:?}", e);
        ErrorCode::TransferFailed
    })?;

    // 6. Leftovers back to the user
    accounts.zap_quote_vault.reload()?;
    let quote_returned = accounts
        .zap_quote_vault
        .amount
        .checked_sub(vaults_before[3])
        .ok_or(ErrorCode::ZapResidue)?;
    if quote_returned > 0 {
        token::transfer_checked(
            CpiContext::new_with_signer(
                token_program.clone(),
                TransferChecked {
                    from: accounts.zap_quote_vault.to_account_info(),
                    mint: accounts.quote_mint.to_account_info(),
                    to: accounts.user_quote_account.to_account_info(),
                    authority: zap_authority.clone(),
                },
                signer_seeds,
            ),
            quote_returned,
            accounts.quote_mint.decimals,
        )
        .map_err(|e| {
            msg!("{:?}", e);
            ErrorCode::TransferFailed
        })?;
    }

    let native_refunded = calculate_native_refund(lamports_before, zap_authority.lamports())?;
    if native_refunded > 0 {
        system_program::transfer(
            CpiContext::new_with_signer(
                system_program_info,
                system_program::Transfer {
                    from: zap_authority.clone(),
                    to: accounts.user.to_account_info(),
                },
                signer_seeds,
            ),
            native_refunded,
        )?;
    }

    // Nothing stays behind in the zap
    accounts.zap_instrument_vault.reload()?;
    accounts.zap_collateral_vault.reload()?;
    accounts.zap_wrapper_vault.reload()?;
    accounts.zap_quote_vault.reload()?;
    let vaults_after = [
        accounts.zap_instrument_vault.amount,
        accounts.zap_collateral_vault.amount,
        accounts.zap_wrapper_vault.amount,
        accounts.zap_quote_vault.amount,
    ];
    validate!(
        vaults_after == vaults_before && zap_authority.lamports() == lamports_before,
        ErrorCode::ZapResidue,
        "zap vaults {:?} -> {:?}",
        vaults_before,
        vaults_after
    )?;

    accounts.wrapper.reload()?;

    msg!(
        "Zapped {} wrapper units for {}: refunded {} lamports, returned {} quote",
        wrapper_amount,
        accounts.user.key(),
        native_refunded,
        quote_returned
    );

    emit!(ZapMintRecord {
        ts: Clock::get()?.unix_timestamp,
        user: accounts.user.key(),
        wrapper: accounts.wrapper.key(),
        wrapper_amount,
        native_value,
        native_required,
        collateral_wrapped: collateral,
        swap_native_spent: swap.native_spent,
        quote_bought: swap.quote_received,
        quote_paid: fill.quote_paid,
        protocol_fee_paid: fill.fee_paid,
        quote_returned,
        native_refunded,
    });

    Ok(())
}
