use anchor_lang::solana_program::account_info::AccountInfo;
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::solana_program::pubkey::Pubkey;
use anchor_spl::token::spl_token;
use solana_program_test::{processor, ProgramTest};

use crate::token::native_mint_account;

// Anchor entrypoints take the account slice and its accounts under one lifetime
fn opeth_entry(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    opeth::entry(program_id, accounts, data)
}

fn controller_entry(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    otoken_controller::entry(program_id, accounts, data)
}

pub fn setup_programs() -> ProgramTest {
    let mut validator = ProgramTest::new("opeth", opeth::id(), processor!(opeth_entry));
    validator.add_program(
        "otoken_controller",
        otoken_controller::id(),
        processor!(controller_entry),
    );
    validator.add_account(spl_token::native_mint::ID, native_mint_account());
    validator
}
