use anchor_lang::solana_program::account_info::AccountInfo;
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::solana_program::pubkey::Pubkey;
use anchor_spl::token::spl_token;
use solana_program_test::{processor, ProgramTest};

use crate::token::native_mint_account;

// Anchor entrypoints take the account slice and its accounts under one lifetime
macro_rules! anchor_processor {
    ($name:ident, $program:ident) => {
        fn $name(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
            let accounts = Box::leak(Box::new(accounts.to_vec()));
            $program::entry(program_id, accounts, data)
        }
    };
}

anchor_processor!(zap_entry, opeth_zap);
anchor_processor!(opeth_entry, opeth);
anchor_processor!(controller_entry, otoken_controller);
anchor_processor!(exchange_entry, limit_order_exchange);
anchor_processor!(swap_entry, swap_router);

pub fn setup_programs() -> ProgramTest {
    let mut validator = ProgramTest::new("opeth_zap", opeth_zap::id(), processor!(zap_entry));
    validator.add_program("opeth", opeth::id(), processor!(opeth_entry));
    validator.add_program(
        "otoken_controller",
        otoken_controller::id(),
        processor!(controller_entry),
    );
    validator.add_program(
        "limit_order_exchange",
        limit_order_exchange::id(),
        processor!(exchange_entry),
    );
    validator.add_program("swap_router", swap_router::id(), processor!(swap_entry));
    validator.add_account(spl_token::native_mint::ID, native_mint_account());
    validator
}
