use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::errors::ErrorCode;
use crate::instructions::{ESCROW_SEED, ORDER_SEED};
use crate::state::{Market, Order};

#[derive(Accounts)]
pub struct PlaceOrder<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,

    #[account(mut, has_one = base_mint @ ErrorCode::InvalidMint)]
    pub market: Account<'info, Market>,

    #[account(
        init,
        payer = maker,
        space = Order::SIZE,
        seeds = [
            ORDER_SEED,
            market.key().as_ref(),
            market.next_order_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub order: Account<'info, Order>,

    pub base_mint: InterfaceAccount<'info, Mint>,

    /// Base for sells, quote for buys
    pub deposit_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub maker_deposit_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init,
        payer = maker,
        seeds = [ESCROW_SEED, order.key().as_ref()],
        bump,
        token::mint = deposit_mint,
        token::authority = order
    )]
    pub escrow: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<PlaceOrder>,
    price: u64,
    size: u64,
    is_buy: bool,
    expires_at: i64,
) -> Result<()> {
    require!(price > 0, ErrorCode::InvalidPrice);
    require!(size > 0, ErrorCode::InvalidAmount);

    let now = Clock::get()?.unix_timestamp;
    require!(
        expires_at == 0 || expires_at > now,
        ErrorCode::InvalidExpiration
    );

    let market = &mut ctx.accounts.market;
    let deposit_side = if is_buy {
        market.quote_mint
    } else {
        market.base_mint
    };
    require!(
        ctx.accounts.deposit_mint.key() == deposit_side,
        ErrorCode::InvalidMint
    );

    let order = &mut ctx.accounts.order;
    **order = Order {
        market: market.key(),
        order_id: market.next_order_id,
        owner: ctx.accounts.maker.key(),
        is_buy,
        price,
        size,
        filled: 0,
        escrow: ctx.accounts.escrow.key(),
        bump: ctx.bumps.order,
        created_at: now,
        expires_at,
    };

    let escrow_amount = order.escrow_required(ctx.accounts.base_mint.decimals)?;
    require!(escrow_amount > 0, ErrorCode::InvalidAmount);

    token_interface::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.maker_deposit_account.to_account_info(),
                mint: ctx.accounts.deposit_mint.to_account_info(),
                to: ctx.accounts.escrow.to_account_info(),
                authority: ctx.accounts.maker.to_account_info(),
            },
        ),
        escrow_amount,
        ctx.accounts.deposit_mint.decimals,
    )?;

    market.next_order_id = market
        .next_order_id
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;
    market.total_orders_placed = market
        .total_orders_placed
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    msg!(
        "Order {} placed: {} {} @ {} (escrowed {}, expires {})",
        order.order_id,
        if is_buy { "BUY" } else { "SELL" },
        size,
        price,
        escrow_amount,
        expires_at
    );

    Ok(())
}
