use anchor_lang::error::ERROR_CODE_OFFSET;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::pubkey::Pubkey;
use anchor_lang::AccountDeserialize;
use solana_program_test::{BanksClient, BanksClientError};
use solana_sdk::instruction::InstructionError;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::{Transaction, TransactionError};

pub async fn process(
    banks_client: &mut BanksClient,
    ixs: Vec<Instruction>,
    payer: &Keypair,
    signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    let tx = Transaction::new_signed_with_payer(
        &ixs,
        Some(&payer.pubkey()),
        signers,
        banks_client.get_latest_blockhash().await?,
    );
    banks_client.process_transaction(tx).await
}

/// Program error code of a failed transaction, `None` if it failed some other way
pub fn custom_error(result: Result<(), BanksClientError>) -> Option<u32> {
    match result.err()?.unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(code),
        _ => None,
    }
}

/// Wire code of an `#[error_code]` variant
pub fn anchor_code(variant: u32) -> u32 {
    ERROR_CODE_OFFSET + variant
}

pub async fn get_anchor_account<T: AccountDeserialize>(
    banks_client: &mut BanksClient,
    key: &Pubkey,
) -> anyhow::Result<T> {
    let account = banks_client
        .get_account(*key)
        .await?
        .ok_or_else(|| anyhow::anyhow!("account {} not found", key))?;
    T::try_deserialize(&mut account.data.as_slice())
        .map_err(|e| anyhow::anyhow!("failed to deserialize {}: {:?}", key, e))
}
