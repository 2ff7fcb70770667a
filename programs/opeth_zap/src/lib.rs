use anchor_lang::prelude::*;

use instructions::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod fill;
pub mod instructions;
pub mod macros;
pub mod math;
pub mod swap;

declare_id!("8g676XifxCPw2Udv1aLGTA56befeCSCbcrtCkVTLBe7U");

#[program]
pub mod opeth_zap {
    use super::*;

    /// CreateVault: zap-owned token account for one mint (instrument, wSOL, wrapper, quote)
    pub fn create_vault(ctx: Context<CreateVault>) -> Result<()> {
        instructions::create_vault::handler(ctx)
    }

    /// Mint: lamports in → wrapper units out, buying the instrument on the exchange on the way
    ///
    /// `native_value` lamports are taken from the user and must cover
    /// collateral + `max_native_for_quote` + `protocol_fee`; the unspent part is refunded.
    #[allow(clippy::too_many_arguments)]
    pub fn mint<'info>(
        ctx: Context<'_, '_, 'info, 'info, ZapMint<'info>>,
        wrapper_amount: u64,
        quote_payment: u64,
        max_native_for_quote: u64,
        protocol_fee: u64,
        native_value: u64,
        order_fill_payload: Vec<u8>,
    ) -> Result<()> {
        instructions::mint::handler(
            ctx,
            wrapper_amount,
            quote_payment,
            max_native_for_quote,
            protocol_fee,
            native_value,
            order_fill_payload,
        )
    }
}
