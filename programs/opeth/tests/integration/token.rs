use anchor_lang::solana_program::program_option::COption;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::solana_program::pubkey::Pubkey;
use anchor_lang::solana_program::rent::Rent;
use anchor_lang::solana_program::system_instruction;
use anchor_spl::token::spl_token;
use anchor_spl::token::spl_token::state::{Account as TokenAccount, Mint};
use solana_program_test::BanksClient;
use solana_sdk::account::Account;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

use crate::utils::process;

// wSOL mint as the token program expects to find it
pub fn native_mint_account() -> Account {
    let mut data = vec![0; Mint::LEN];
    Mint {
        mint_authority: COption::None,
        supply: 0,
        decimals: 9,
        is_initialized: true,
        freeze_authority: COption::None,
    }
    .pack_into_slice(&mut data);

    Account {
        lamports: Rent::default().minimum_balance(Mint::LEN),
        data,
        owner: spl_token::ID,
        executable: false,
        rent_epoch: 0,
    }
}

// payer is the mint authority
pub async fn create_mint(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    decimals: u8,
) -> anyhow::Result<Pubkey> {
    let mint = Keypair::new();
    let rent = banks_client.get_rent().await?;

    let ixs = vec![
        system_instruction::create_account(
            &payer.pubkey(),
            &mint.pubkey(),
            rent.minimum_balance(Mint::LEN),
            Mint::LEN as u64,
            &spl_token::ID,
        ),
        spl_token::instruction::initialize_mint2(
            &spl_token::ID,
            &mint.pubkey(),
            &payer.pubkey(),
            None,
            decimals,
        )?,
    ];
    process(banks_client, ixs, payer, &[payer, &mint]).await?;

    Ok(mint.pubkey())
}

pub async fn create_token_account(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
) -> anyhow::Result<Pubkey> {
    let account = Keypair::new();
    let rent = banks_client.get_rent().await?;

    let ixs = vec![
        system_instruction::create_account(
            &payer.pubkey(),
            &account.pubkey(),
            rent.minimum_balance(TokenAccount::LEN),
            TokenAccount::LEN as u64,
            &spl_token::ID,
        ),
        spl_token::instruction::initialize_account3(
            &spl_token::ID,
            &account.pubkey(),
            mint,
            owner,
        )?,
    ];
    process(banks_client, ixs, payer, &[payer, &account]).await?;

    Ok(account.pubkey())
}

pub async fn mint_to(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    mint: &Pubkey,
    account: &Pubkey,
    amount: u64,
) -> anyhow::Result<()> {
    let ix = spl_token::instruction::mint_to(
        &spl_token::ID,
        mint,
        account,
        &payer.pubkey(),
        &[],
        amount,
    )?;
    process(banks_client, vec![ix], payer, &[payer]).await?;
    Ok(())
}

// lamports into a wSOL account, then sync its token amount
pub async fn wrap_sol(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    account: &Pubkey,
    lamports: u64,
) -> anyhow::Result<()> {
    let ixs = vec![
        system_instruction::transfer(&payer.pubkey(), account, lamports),
        spl_token::instruction::sync_native(&spl_token::ID, account)?,
    ];
    process(banks_client, ixs, payer, &[payer]).await?;
    Ok(())
}

pub async fn token_balance(banks_client: &mut BanksClient, account: &Pubkey) -> anyhow::Result<u64> {
    let account = banks_client
        .get_account(*account)
        .await?
        .ok_or_else(|| anyhow::anyhow!("token account {} not found", account))?;
    Ok(TokenAccount::unpack(&account.data)?.amount)
}
