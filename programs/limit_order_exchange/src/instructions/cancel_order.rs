use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    self, CloseAccount, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::errors::ErrorCode;
use crate::instructions::{ESCROW_SEED, ORDER_SEED};
use crate::state::Order;

#[derive(Accounts)]
pub struct CancelOrder<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        close = user,
        constraint = order.owner == user.key() @ ErrorCode::UnauthorizedAccess
    )]
    pub order: Account<'info, Order>,

    pub return_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub user_return_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, order.key().as_ref()],
        bump
    )]
    pub escrow: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Closes an order and its escrow, returning whatever is still escrowed
/// A fully filled order has an empty escrow; cancelling it only reclaims rent.
pub fn handler(ctx: Context<CancelOrder>) -> Result<()> {
    let order = &ctx.accounts.order;

    // Escrow authority is the order PDA
    let market_key = order.market;
    let order_id_bytes = order.order_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        ORDER_SEED,
        market_key.as_ref(),
        order_id_bytes.as_ref(),
        &[order.bump],
    ]];

    // 1. Return escrowed tokens
    let escrowed = ctx.accounts.escrow.amount;
    if escrowed > 0 {
        token_interface::transfer_checked(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                TransferChecked {
                    from: ctx.accounts.escrow.to_account_info(),
                    mint: ctx.accounts.return_mint.to_account_info(),
                    to: ctx.accounts.user_return_account.to_account_info(),
                    authority: order.to_account_info(),
                },
                signer_seeds,
            ),
            escrowed,
            ctx.accounts.return_mint.decimals,
        )?;
    }

    // 2. Close escrow, rent back to maker
    token_interface::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.escrow.to_account_info(),
            destination: ctx.accounts.user.to_account_info(),
            authority: order.to_account_info(),
        },
        signer_seeds,
    ))?;

    msg!(
        "Order {} closed with {} of {} filled, {} returned",
        order.order_id,
        order.filled,
        order.size,
        escrowed
    );

    Ok(())
}
