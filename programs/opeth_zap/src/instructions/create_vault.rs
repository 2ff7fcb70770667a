use anchor_lang::prelude::*;

use crate::instructions::CreateVault;

pub fn handler(ctx: Context<CreateVault>) -> Result<()> {
    msg!(
        "Zap vault {} created for mint {}",
        ctx.accounts.vault.key(),
        ctx.accounts.mint.key()
    );

    Ok(())
}
