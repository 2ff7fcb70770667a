use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_lang::AccountsExit;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::errors::ErrorCode;
use crate::instructions::ORDER_SEED;
use crate::state::{Market, Order};

/// Remaining accounts per order: order, escrow, maker_receive_account
pub const ACCOUNTS_PER_ORDER: usize = 3;

#[derive(Accounts)]
pub struct BatchFillLimitOrders<'info> {
    /// Pays quote (or base) and the per-order protocol fee in lamports
    #[account(mut)]
    pub taker: Signer<'info>,

    #[account(
        mut,
        has_one = base_mint @ ErrorCode::InvalidMint,
        has_one = quote_mint @ ErrorCode::InvalidMint,
        has_one = fee_recipient @ ErrorCode::InvalidMarket,
    )]
    pub market: Account<'info, Market>,

    pub base_mint: InterfaceAccount<'info, Mint>,
    pub quote_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub taker_base_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub taker_quote_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub fee_recipient: SystemAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, BatchFillLimitOrders<'info>>,
    fill_sizes: Vec<u64>,
    revert_if_incomplete: bool,
) -> Result<()> {
    require!(!fill_sizes.is_empty(), ErrorCode::EmptyBatch);

    let remaining_accounts = ctx.remaining_accounts;
    require!(
        remaining_accounts.len()
            == fill_sizes
                .len()
                .checked_mul(ACCOUNTS_PER_ORDER)
                .ok_or(ErrorCode::MathOverflow)?,
        ErrorCode::BatchAccountsMismatch
    );

    let now = Clock::get()?.unix_timestamp;
    let market_key = ctx.accounts.market.key();
    let base_decimals = ctx.accounts.base_mint.decimals;
    let quote_decimals = ctx.accounts.quote_mint.decimals;

    let mut orders_filled: u64 = 0;
    let mut orders_exhausted: u64 = 0;
    let mut base_volume: u64 = 0;
    let mut quote_volume: u64 = 0;

    for (accounts, requested) in remaining_accounts
        .chunks(ACCOUNTS_PER_ORDER)
        .zip(fill_sizes.iter())
    {
        let order_info = &accounts[0];
        let escrow_info = &accounts[1];
        let maker_receive_info = &accounts[2];

        let mut order: Account<'info, Order> = Account::try_from(order_info)?;
        require!(order.market == market_key, ErrorCode::InvalidMarket);
        require!(order.escrow == escrow_info.key(), ErrorCode::InvalidEscrow);

        let fill_size = order.plan_fill(*requested, now, revert_if_incomplete)?;
        if fill_size == 0 {
            msg!("Skipping order {}: expired or filled", order.order_id);
            continue;
        }

        let maker_receive: InterfaceAccount<'info, TokenAccount> =
            InterfaceAccount::try_from(maker_receive_info)?;
        require!(
            maker_receive.owner == order.owner,
            ErrorCode::InvalidMakerAccount
        );

        let quote_amount = order.quote_for(fill_size, base_decimals)?;
        require!(quote_amount > 0, ErrorCode::InvalidFillSize);

        let order_id_bytes = order.order_id.to_le_bytes();
        let bump = [order.bump];
        let signer_seeds: &[&[&[u8]]] = &[&[
            ORDER_SEED,
            market_key.as_ref(),
            order_id_bytes.as_ref(),
            &bump,
        ]];

        if order.is_buy {
            // Maker buying: taker gives base, receives quote from escrow
            token_interface::transfer_checked(
                CpiContext::new(
                    ctx.accounts.token_program.to_account_info(),
                    TransferChecked {
                        from: ctx.accounts.taker_base_account.to_account_info(),
                        mint: ctx.accounts.base_mint.to_account_info(),
                        to: maker_receive.to_account_info(),
                        authority: ctx.accounts.taker.to_account_info(),
                    },
                ),
                fill_size,
                base_decimals,
            )?;

            token_interface::transfer_checked(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    TransferChecked {
                        from: escrow_info.clone(),
                        mint: ctx.accounts.quote_mint.to_account_info(),
                        to: ctx.accounts.taker_quote_account.to_account_info(),
                        authority: order.to_account_info(),
                    },
                    signer_seeds,
                ),
                quote_amount,
                quote_decimals,
            )?;
        } else {
            // Maker selling: taker receives base from escrow, gives quote
            token_interface::transfer_checked(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    TransferChecked {
                        from: escrow_info.clone(),
                        mint: ctx.accounts.base_mint.to_account_info(),
                        to: ctx.accounts.taker_base_account.to_account_info(),
                        authority: order.to_account_info(),
                    },
                    signer_seeds,
                ),
                fill_size,
                base_decimals,
            )?;

            token_interface::transfer_checked(
                CpiContext::new(
                    ctx.accounts.token_program.to_account_info(),
                    TransferChecked {
                        from: ctx.accounts.taker_quote_account.to_account_info(),
                        mint: ctx.accounts.quote_mint.to_account_info(),
                        to: maker_receive.to_account_info(),
                        authority: ctx.accounts.taker.to_account_info(),
                    },
                ),
                quote_amount,
                quote_decimals,
            )?;
        }

        order.filled = order
            .filled
            .checked_add(fill_size)
            .ok_or(ErrorCode::MathOverflow)?;
        order.exit(&crate::ID)?;

        msg!(
            "Filled order {}: {} @ price {}",
            order.order_id,
            fill_size,
            order.price
        );

        orders_filled = orders_filled.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        if order.remaining() == 0 {
            orders_exhausted = orders_exhausted
                .checked_add(1)
                .ok_or(ErrorCode::MathOverflow)?;
        }
        base_volume = base_volume
            .checked_add(fill_size)
            .ok_or(ErrorCode::MathOverflow)?;
        quote_volume = quote_volume
            .checked_add(quote_amount)
            .ok_or(ErrorCode::MathOverflow)?;
    }

    // Protocol fee, once per filled order
    let fee = ctx
        .accounts
        .market
        .fee_for(orders_filled)
        .ok_or(ErrorCode::MathOverflow)?;
    if fee > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.taker.to_account_info(),
                    to: ctx.accounts.fee_recipient.to_account_info(),
                },
            ),
            fee,
        )?;
    }

    let market = &mut ctx.accounts.market;
    market.total_orders_filled = market
        .total_orders_filled
        .checked_add(orders_exhausted)
        .ok_or(ErrorCode::MathOverflow)?;
    market.total_base_volume = market
        .total_base_volume
        .checked_add(base_volume)
        .ok_or(ErrorCode::MathOverflow)?;
    market.total_quote_volume = market
        .total_quote_volume
        .checked_add(quote_volume)
        .ok_or(ErrorCode::MathOverflow)?;
    market.total_fees_collected = market
        .total_fees_collected
        .checked_add(fee)
        .ok_or(ErrorCode::MathOverflow)?;

    msg!(
        "Batch filled {} orders: {} base, {} quote, fee {} lamports",
        orders_filled,
        base_volume,
        quote_volume,
        fee
    );

    Ok(())
}
