use anchor_lang::solana_program::clock::Clock;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::pubkey::Pubkey;
use anchor_lang::solana_program::{system_instruction, sysvar};
use anchor_lang::{system_program, InstructionData, ToAccountMetas};
use anchor_spl::token::spl_token;
use limit_order_exchange::instructions::{ESCROW_SEED, MARKET_SEED, ORDER_SEED};
use limit_order_exchange::state::Order;
use opeth::utils::pda::{
    COLLATERAL_VAULT_SEED, INSTRUMENT_VAULT_SEED, SETTLEMENT_VAULT_SEED, WRAPPER_MINT_SEED,
    WRAPPER_SEED,
};
use opeth::WrapperState;
use opeth_zap::constants::{ZAP_AUTHORITY_SEED, ZAP_VAULT_SEED};
use opeth_zap::errors::ErrorCode;
use otoken_controller::instructions::{PAYOUT_VAULT_SEED, SETTLEMENT_SEED};
use solana_program_test::{tokio, BanksClient, BanksClientError};
use solana_sdk::message::Message;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use swap_router::instructions::{POOL_SEED, SOL_VAULT_SEED, TOKEN_VAULT_SEED};
use swap_router::state::Pool;

use crate::program::setup_programs;
use crate::token::{create_mint, create_token_account, mint_to, token_balance};
use crate::utils::{anchor_code, custom_error, get_anchor_account, process};

mod program;

const OTOKEN_UNIT: u64 = 100_000_000;
const COLLATERAL_SCALE: u64 = 10;
const USDC_DECIMALS: u8 = 6;

// 1.5 USDC per oToken, 70_000 lamports per filled order
const ORDER_PRICE: u64 = 1_500_000;
const PROTOCOL_FEE: u64 = 70_000;

// 100 SOL against 15_000 USDC, 0.3%
const POOL_SOL: u64 = 100_000_000_000;
const POOL_USDC: u64 = 15_000_000_000;
const POOL_FEE_BPS: u16 = 30;

const WRAPPER_AMOUNT: u64 = 2 * OTOKEN_UNIT;
// Fill costs 3 USDC; the rest comes back to the user
const QUOTE_PAYMENT: u64 = 3_500_000;
const FILL_COST: u64 = 3_000_000;
const SWAP_SLACK: u64 = 1_000_000;

struct ZapKeys {
    instrument_mint: Pubkey,
    usdc: Pubkey,
    wrapper: Pubkey,
    wrapper_mint: Pubkey,
    instrument_vault: Pubkey,
    collateral_vault: Pubkey,
    zap_authority: Pubkey,
    zap_instrument_vault: Pubkey,
    zap_collateral_vault: Pubkey,
    zap_wrapper_vault: Pubkey,
    zap_quote_vault: Pubkey,
    pool: Pubkey,
    pool_token_vault: Pubkey,
    pool_sol_vault: Pubkey,
    market: Pubkey,
    fee_recipient: Pubkey,
    order: Pubkey,
    escrow: Pubkey,
    maker_instrument: Pubkey,
    maker_usdc: Pubkey,
}

struct User {
    keypair: Keypair,
    wrapper: Pubkey,
    quote: Pubkey,
}

/// Everything a zap can move
#[derive(Debug, PartialEq, Eq)]
struct Snapshot {
    user_lamports: u64,
    user_wrapper: u64,
    user_quote: u64,
    zap_authority_lamports: u64,
    zap_vaults: [u64; 4],
    wrapper_supply: u64,
    order_filled: u64,
    pool_reserves: (u64, u64),
    fee_recipient_lamports: u64,
    maker_usdc: u64,
}

fn zap_vault(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[ZAP_VAULT_SEED, mint.as_ref()], &opeth_zap::id()).0
}

async fn snapshot(
    banks_client: &mut BanksClient,
    keys: &ZapKeys,
    user: &User,
) -> anyhow::Result<Snapshot> {
    let wrapper: WrapperState = get_anchor_account(banks_client, &keys.wrapper).await?;
    let order: Order = get_anchor_account(banks_client, &keys.order).await?;
    let pool: Pool = get_anchor_account(banks_client, &keys.pool).await?;

    Ok(Snapshot {
        user_lamports: banks_client.get_balance(user.keypair.pubkey()).await?,
        user_wrapper: token_balance(banks_client, &user.wrapper).await?,
        user_quote: token_balance(banks_client, &user.quote).await?,
        zap_authority_lamports: banks_client.get_balance(keys.zap_authority).await?,
        zap_vaults: [
            token_balance(banks_client, &keys.zap_instrument_vault).await?,
            token_balance(banks_client, &keys.zap_collateral_vault).await?,
            token_balance(banks_client, &keys.zap_wrapper_vault).await?,
            token_balance(banks_client, &keys.zap_quote_vault).await?,
        ],
        wrapper_supply: wrapper.total_supply,
        order_filled: order.filled,
        pool_reserves: (pool.sol_reserve, pool.token_reserve),
        fee_recipient_lamports: banks_client.get_balance(keys.fee_recipient).await?,
        maker_usdc: token_balance(banks_client, &keys.maker_usdc).await?,
    })
}

/// Wrapper over wSOL, zap vaults, a SOL/USDC pool and one resting sell order for the whole amount
async fn setup_zap(banks_client: &mut BanksClient, payer: &Keypair) -> anyhow::Result<ZapKeys> {
    let instrument_mint = create_mint(banks_client, payer, 8).await?;
    let usdc = create_mint(banks_client, payer, USDC_DECIMALS).await?;
    let native_mint = spl_token::native_mint::ID;

    // === WRAPPER ===
    let controller = otoken_controller::id();
    let (settlement, _) =
        Pubkey::find_program_address(&[SETTLEMENT_SEED, instrument_mint.as_ref()], &controller);
    let (payout_vault, _) =
        Pubkey::find_program_address(&[PAYOUT_VAULT_SEED, settlement.as_ref()], &controller);
    let (wrapper, _) = Pubkey::find_program_address(
        &[WRAPPER_SEED, instrument_mint.as_ref(), native_mint.as_ref()],
        &opeth::id(),
    );
    let wrapper_pda =
        |seed: &[u8]| Pubkey::find_program_address(&[seed, wrapper.as_ref()], &opeth::id()).0;
    let wrapper_mint = wrapper_pda(WRAPPER_MINT_SEED);
    let instrument_vault = wrapper_pda(INSTRUMENT_VAULT_SEED);
    let collateral_vault = wrapper_pda(COLLATERAL_VAULT_SEED);

    let clock = banks_client.get_sysvar::<Clock>().await?;
    process(
        banks_client,
        vec![
            Instruction {
                program_id: controller,
                accounts: otoken_controller::accounts::SettlementCreate {
                    admin: payer.pubkey(),
                    settlement,
                    instrument_mint,
                    settlement_mint: usdc,
                    payout_vault,
                    system_program: system_program::ID,
                    token_program: spl_token::ID,
                    rent: sysvar::rent::ID,
                }
                .to_account_metas(None),
                data: otoken_controller::instruction::CreateSettlement {
                    expiry: clock.unix_timestamp + 3_600,
                }
                .data(),
            },
            Instruction {
                program_id: opeth::id(),
                accounts: opeth::accounts::WrapperCreate {
                    payer: payer.pubkey(),
                    wrapper,
                    instrument_mint,
                    collateral_mint: native_mint,
                    settlement_mint: usdc,
                    settlement,
                    wrapper_mint,
                    instrument_vault,
                    collateral_vault,
                    settlement_vault: wrapper_pda(SETTLEMENT_VAULT_SEED),
                    system_program: system_program::ID,
                    token_program: spl_token::ID,
                    rent: sysvar::rent::ID,
                }
                .to_account_metas(None),
                data: opeth::instruction::CreateWrapper {}.data(),
            },
        ],
        payer,
        &[payer],
    )
    .await?;

    // === ZAP VAULTS ===
    let (zap_authority, _) =
        Pubkey::find_program_address(&[ZAP_AUTHORITY_SEED], &opeth_zap::id());
    let create_vaults = [instrument_mint, native_mint, wrapper_mint, usdc]
        .iter()
        .map(|mint| Instruction {
            program_id: opeth_zap::id(),
            accounts: opeth_zap::accounts::CreateVault {
                payer: payer.pubkey(),
                zap_authority,
                mint: *mint,
                vault: zap_vault(mint),
                token_program: spl_token::ID,
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: opeth_zap::instruction::CreateVault {}.data(),
        })
        .collect();
    process(banks_client, create_vaults, payer, &[payer]).await?;

    // === SWAP POOL ===
    let maker_usdc = create_token_account(banks_client, payer, &usdc, &payer.pubkey()).await?;
    mint_to(banks_client, payer, &usdc, &maker_usdc, POOL_USDC).await?;

    let swap = swap_router::id();
    let (pool, _) = Pubkey::find_program_address(&[POOL_SEED, usdc.as_ref()], &swap);
    let (pool_token_vault, _) =
        Pubkey::find_program_address(&[TOKEN_VAULT_SEED, pool.as_ref()], &swap);
    let (pool_sol_vault, _) = Pubkey::find_program_address(&[SOL_VAULT_SEED, pool.as_ref()], &swap);
    process(
        banks_client,
        vec![
            Instruction {
                program_id: swap,
                accounts: swap_router::accounts::InitializePool {
                    authority: payer.pubkey(),
                    token_mint: usdc,
                    pool,
                    token_vault: pool_token_vault,
                    sol_vault: pool_sol_vault,
                    token_program: spl_token::ID,
                    system_program: system_program::ID,
                }
                .to_account_metas(None),
                data: swap_router::instruction::InitializePool {
                    fee_bps: POOL_FEE_BPS,
                }
                .data(),
            },
            Instruction {
                program_id: swap,
                accounts: swap_router::accounts::Liquidity {
                    authority: payer.pubkey(),
                    pool,
                    token_mint: usdc,
                    token_vault: pool_token_vault,
                    sol_vault: pool_sol_vault,
                    authority_token_account: maker_usdc,
                    token_program: spl_token::ID,
                    system_program: system_program::ID,
                }
                .to_account_metas(None),
                data: swap_router::instruction::AddLiquidity {
                    sol_amount: POOL_SOL,
                    token_amount: POOL_USDC,
                }
                .data(),
            },
        ],
        payer,
        &[payer],
    )
    .await?;

    // === EXCHANGE ===
    let exchange = limit_order_exchange::id();
    let fee_recipient = Keypair::new().pubkey();
    let (market, _) = Pubkey::find_program_address(
        &[MARKET_SEED, instrument_mint.as_ref(), usdc.as_ref()],
        &exchange,
    );
    let (order, _) = Pubkey::find_program_address(
        &[ORDER_SEED, market.as_ref(), 0u64.to_le_bytes().as_ref()],
        &exchange,
    );
    let (escrow, _) = Pubkey::find_program_address(&[ESCROW_SEED, order.as_ref()], &exchange);

    let maker_instrument =
        create_token_account(banks_client, payer, &instrument_mint, &payer.pubkey()).await?;
    mint_to(banks_client, payer, &instrument_mint, &maker_instrument, WRAPPER_AMOUNT).await?;

    process(
        banks_client,
        vec![
            system_instruction::transfer(&payer.pubkey(), &fee_recipient, 1_000_000_000),
            Instruction {
                program_id: exchange,
                accounts: limit_order_exchange::accounts::CreateMarket {
                    creator: payer.pubkey(),
                    base_mint: instrument_mint,
                    quote_mint: usdc,
                    fee_recipient,
                    market,
                    system_program: system_program::ID,
                }
                .to_account_metas(None),
                data: limit_order_exchange::instruction::CreateMarket {
                    protocol_fee_per_order: PROTOCOL_FEE,
                }
                .data(),
            },
            Instruction {
                program_id: exchange,
                accounts: limit_order_exchange::accounts::PlaceOrder {
                    maker: payer.pubkey(),
                    market,
                    order,
                    base_mint: instrument_mint,
                    deposit_mint: instrument_mint,
                    maker_deposit_account: maker_instrument,
                    escrow,
                    token_program: spl_token::ID,
                    system_program: system_program::ID,
                }
                .to_account_metas(None),
                data: limit_order_exchange::instruction::PlaceOrder {
                    price: ORDER_PRICE,
                    size: WRAPPER_AMOUNT,
                    is_buy: false,
                    expires_at: 0,
                }
                .data(),
            },
        ],
        payer,
        &[payer],
    )
    .await?;

    Ok(ZapKeys {
        instrument_mint,
        usdc,
        wrapper,
        wrapper_mint,
        instrument_vault,
        collateral_vault,
        zap_authority,
        zap_instrument_vault: zap_vault(&instrument_mint),
        zap_collateral_vault: zap_vault(&native_mint),
        zap_wrapper_vault: zap_vault(&wrapper_mint),
        zap_quote_vault: zap_vault(&usdc),
        pool,
        pool_token_vault,
        pool_sol_vault,
        market,
        fee_recipient,
        order,
        escrow,
        maker_instrument,
        maker_usdc,
    })
}

async fn create_user(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    keys: &ZapKeys,
) -> anyhow::Result<User> {
    let keypair = Keypair::new();
    let owner = keypair.pubkey();

    process(
        banks_client,
        vec![system_instruction::transfer(&payer.pubkey(), &owner, 10_000_000_000)],
        payer,
        &[payer],
    )
    .await?;
    let wrapper = create_token_account(banks_client, payer, &keys.wrapper_mint, &owner).await?;
    let quote = create_token_account(banks_client, payer, &keys.usdc, &owner).await?;

    Ok(User {
        keypair,
        wrapper,
        quote,
    })
}

/// Lamports the pool charges for the quote leg, and the budget the zap is given for it
fn swap_budget() -> anyhow::Result<(u64, u64)> {
    let native_in = swap_router::math::get_amount_in(QUOTE_PAYMENT, POOL_SOL, POOL_USDC, POOL_FEE_BPS)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((native_in, native_in + SWAP_SLACK))
}

fn native_required(max_native_for_quote: u64) -> u64 {
    WRAPPER_AMOUNT * COLLATERAL_SCALE + max_native_for_quote + PROTOCOL_FEE
}

fn zap_ix(keys: &ZapKeys, user: &User, max_native_for_quote: u64, native_value: u64) -> Instruction {
    let mut fill_accounts = limit_order_exchange::accounts::BatchFillLimitOrders {
        taker: keys.zap_authority,
        market: keys.market,
        base_mint: keys.instrument_mint,
        quote_mint: keys.usdc,
        taker_base_account: keys.zap_instrument_vault,
        taker_quote_account: keys.zap_quote_vault,
        fee_recipient: keys.fee_recipient,
        token_program: spl_token::ID,
        system_program: system_program::ID,
    }
    .to_account_metas(None);
    fill_accounts.extend([
        AccountMeta::new(keys.order, false),
        AccountMeta::new(keys.escrow, false),
        AccountMeta::new(keys.maker_usdc, false),
    ]);
    // The zap authority is a PDA; it signs the fill through the zap
    for meta in fill_accounts.iter_mut() {
        meta.is_signer = false;
    }

    let order_fill_payload = limit_order_exchange::instruction::BatchFillLimitOrders {
        fill_sizes: vec![WRAPPER_AMOUNT],
        revert_if_incomplete: true,
    }
    .data();

    let mut accounts = opeth_zap::accounts::ZapMint {
        user: user.keypair.pubkey(),
        zap_authority: keys.zap_authority,
        wrapper: keys.wrapper,
        instrument_mint: keys.instrument_mint,
        collateral_mint: spl_token::native_mint::ID,
        wrapper_mint: keys.wrapper_mint,
        quote_mint: keys.usdc,
        instrument_vault: keys.instrument_vault,
        collateral_vault: keys.collateral_vault,
        zap_instrument_vault: keys.zap_instrument_vault,
        zap_collateral_vault: keys.zap_collateral_vault,
        zap_wrapper_vault: keys.zap_wrapper_vault,
        zap_quote_vault: keys.zap_quote_vault,
        user_wrapper_account: user.wrapper,
        user_quote_account: user.quote,
        swap_pool: keys.pool,
        swap_token_vault: keys.pool_token_vault,
        swap_sol_vault: keys.pool_sol_vault,
        opeth_program: opeth::id(),
        exchange_program: limit_order_exchange::id(),
        swap_program: swap_router::id(),
        token_program: spl_token::ID,
        system_program: system_program::ID,
    }
    .to_account_metas(None);
    accounts.extend(fill_accounts);

    Instruction {
        program_id: opeth_zap::id(),
        accounts,
        data: opeth_zap::instruction::Mint {
            wrapper_amount: WRAPPER_AMOUNT,
            quote_payment: QUOTE_PAYMENT,
            max_native_for_quote,
            protocol_fee: PROTOCOL_FEE,
            native_value,
            order_fill_payload,
        }
        .data(),
    }
}

// The user pays for the zap transaction, keeping it to one signature
async fn submit_zap(
    banks_client: &mut BanksClient,
    user: &User,
    ix: Instruction,
) -> anyhow::Result<(u64, Result<(), BanksClientError>)> {
    let message = Message::new_with_blockhash(
        &[ix.clone()],
        Some(&user.keypair.pubkey()),
        &banks_client.get_latest_blockhash().await?,
    );
    let fee = banks_client
        .get_fee_for_message(message)
        .await?
        .ok_or_else(|| anyhow::anyhow!("no fee quoted for the zap"))?;

    let result = process(banks_client, vec![ix], &user.keypair, &[&user.keypair]).await;
    Ok((fee, result))
}

#[tokio::test]
async fn zap_one_lamport_short_fails_without_moving_anything() -> anyhow::Result<()> {
    let (mut banks_client, payer, _hash) = setup_programs().start().await;
    let keys = setup_zap(&mut banks_client, &payer).await?;
    let user = create_user(&mut banks_client, &payer, &keys).await?;

    let (_, max_native_for_quote) = swap_budget()?;
    let required = native_required(max_native_for_quote);
    let before = snapshot(&mut banks_client, &keys, &user).await?;

    let (fee, result) = submit_zap(
        &mut banks_client,
        &user,
        zap_ix(&keys, &user, max_native_for_quote, required - 1),
    )
    .await?;
    assert_eq!(
        custom_error(result),
        Some(anchor_code(ErrorCode::InsufficientValueSent as u32))
    );

    // Only the transaction fee left the user
    let after = snapshot(&mut banks_client, &keys, &user).await?;
    assert_eq!(
        after,
        Snapshot {
            user_lamports: before.user_lamports - fee,
            ..before
        }
    );

    Ok(())
}

#[tokio::test]
async fn zap_with_exact_value_mints_and_leaves_nothing_behind() -> anyhow::Result<()> {
    let (mut banks_client, payer, _hash) = setup_programs().start().await;
    let keys = setup_zap(&mut banks_client, &payer).await?;
    let user = create_user(&mut banks_client, &payer, &keys).await?;

    let (native_in, max_native_for_quote) = swap_budget()?;
    let required = native_required(max_native_for_quote);
    let collateral = WRAPPER_AMOUNT * COLLATERAL_SCALE;
    let before = snapshot(&mut banks_client, &keys, &user).await?;

    let (fee, result) = submit_zap(
        &mut banks_client,
        &user,
        zap_ix(&keys, &user, max_native_for_quote, required),
    )
    .await?;
    result?;

    let after = snapshot(&mut banks_client, &keys, &user).await?;

    // User: wrapper units and leftover quote in, only what was spent out
    assert_eq!(after.user_wrapper, WRAPPER_AMOUNT);
    assert_eq!(after.user_quote, QUOTE_PAYMENT - FILL_COST);
    assert_eq!(
        before.user_lamports - after.user_lamports,
        collateral + native_in + PROTOCOL_FEE + fee
    );

    // Zap: back where it started
    assert_eq!(after.zap_vaults, before.zap_vaults);
    assert_eq!(after.zap_authority_lamports, before.zap_authority_lamports);

    // Wrapper: instrument and wSOL collateral deposited, supply minted
    assert_eq!(after.wrapper_supply, WRAPPER_AMOUNT);
    assert_eq!(
        token_balance(&mut banks_client, &keys.instrument_vault).await?,
        WRAPPER_AMOUNT
    );
    assert_eq!(
        token_balance(&mut banks_client, &keys.collateral_vault).await?,
        collateral
    );

    // Venues: order filled, maker paid, fee charged once, pool moved by the swap
    assert_eq!(after.order_filled, WRAPPER_AMOUNT);
    assert_eq!(after.maker_usdc, before.maker_usdc + FILL_COST);
    assert_eq!(
        after.fee_recipient_lamports,
        before.fee_recipient_lamports + PROTOCOL_FEE
    );
    assert_eq!(
        after.pool_reserves,
        (POOL_SOL + native_in, POOL_USDC - QUOTE_PAYMENT)
    );

    Ok(())
}

#[tokio::test]
async fn maker_closes_order_filled_by_zap() -> anyhow::Result<()> {
    let (mut banks_client, payer, _hash) = setup_programs().start().await;
    let keys = setup_zap(&mut banks_client, &payer).await?;
    let user = create_user(&mut banks_client, &payer, &keys).await?;

    let (_, max_native_for_quote) = swap_budget()?;
    let (_, result) = submit_zap(
        &mut banks_client,
        &user,
        zap_ix(
            &keys,
            &user,
            max_native_for_quote,
            native_required(max_native_for_quote),
        ),
    )
    .await?;
    result?;

    let order: Order = get_anchor_account(&mut banks_client, &keys.order).await?;
    assert_eq!(order.remaining(), 0);
    assert_eq!(token_balance(&mut banks_client, &keys.escrow).await?, 0);

    let maker_before = banks_client.get_balance(payer.pubkey()).await?;
    let order_rent = banks_client.get_balance(keys.order).await?;

    process(
        &mut banks_client,
        vec![Instruction {
            program_id: limit_order_exchange::id(),
            accounts: limit_order_exchange::accounts::CancelOrder {
                user: payer.pubkey(),
                order: keys.order,
                return_mint: keys.instrument_mint,
                user_return_account: keys.maker_instrument,
                escrow: keys.escrow,
                token_program: spl_token::ID,
            }
            .to_account_metas(None),
            data: limit_order_exchange::instruction::CancelOrder {}.data(),
        }],
        &payer,
        &[&payer],
    )
    .await?;

    // Both accounts closed, rent back to the maker
    assert!(banks_client.get_account(keys.order).await?.is_none());
    assert!(banks_client.get_account(keys.escrow).await?.is_none());
    assert!(banks_client.get_balance(payer.pubkey()).await? > maker_before + order_rent - 10_000);
    assert_eq!(token_balance(&mut banks_client, &keys.maker_instrument).await?, 0);

    Ok(())
}
