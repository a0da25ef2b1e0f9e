// Test utilities for the QAO token program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use litesvm::LiteSVM;
use litesvm_token::{get_spl_account, CreateAssociatedTokenAccount};
use solana_sdk::{
    clock::Clock,
    hash::hash,
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id!
pub const TOKEN_PROGRAM: Pubkey = Pubkey::new_from_array(qao_token::ID.to_bytes());

// Standard program IDs
pub const SPL_TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds (must match constants.rs)
pub const CONFIG_SEED: &[u8] = b"config";
pub const MINT_SEED: &[u8] = b"mint";
pub const TREASURY_SEED: &[u8] = b"treasury";

pub const TOKEN_UNIT: u64 = 10_000;
pub const DAY: i64 = 86_400;
pub const YEAR: i64 = 365 * DAY;

// One hour into a UTC day
pub const GENESIS_TIME: i64 = 19_675 * DAY + 3_600;

pub const DAILY_MINT: u64 = 100_000_000 * TOKEN_UNIT;
pub const GENESIS_RECIPIENT_AMOUNT: u64 = 9_000_000_000_000 * TOKEN_UNIT;
pub const GENESIS_TREASURY_AMOUNT: u64 = 1_000_000_000_000 * TOKEN_UNIT;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the token program
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../../target/deploy/qao_token.so");
    svm.add_program(TOKEN_PROGRAM, program_bytes)
        .expect("Failed to add token program");
    set_time(&mut svm, GENESIS_TIME);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn set_time(svm: &mut LiteSVM, unix_timestamp: i64) {
    let mut clock: Clock = svm.get_sysvar();
    clock.unix_timestamp = unix_timestamp;
    svm.set_sysvar(&clock);
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: i64) {
    let clock: Clock = svm.get_sysvar();
    set_time(svm, clock.unix_timestamp + seconds);
}

// Sign and send a single instruction on a fresh blockhash,
// so repeating an identical instruction is not deduplicated
pub fn send(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> Result<(), String> {
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
        .map(|_| ())
        .map_err(|failure| format!("{:?}", failure))
}

// Assert a transaction failed with the given custom program error code
pub fn assert_custom_error(result: Result<(), String>, code: u32) {
    let err = result.expect_err("Transaction should fail");
    assert!(
        err.contains(&format!("Custom({})", code)),
        "Expected custom error {}, got: {}",
        code,
        err
    );
}

pub fn token_error(err: qao_token::errors::TokenError) -> u32 {
    err as u32 + anchor_lang::error::ERROR_CODE_OFFSET
}

pub fn to_sdk(key: &anchor_lang::prelude::Pubkey) -> Pubkey {
    Pubkey::new_from_array(key.to_bytes())
}

pub fn balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, token_account).expect("Token account should exist");
    account.amount
}

pub fn supply(svm: &LiteSVM) -> u64 {
    let mint: spl_token::state::Mint =
        get_spl_account(svm, &derive_mint_pda().0).expect("Mint should exist");
    mint.supply
}

pub fn fetch_config(svm: &LiteSVM) -> qao_token::state::Config {
    let account = svm
        .get_account(&derive_config_pda().0)
        .expect("Config should exist");
    qao_token::state::Config::try_deserialize(&mut account.data.as_slice())
        .expect("Config should deserialize")
}

// ======================== PDAs ========================

pub fn derive_config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], &TOKEN_PROGRAM)
}

pub fn derive_mint_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_SEED], &TOKEN_PROGRAM)
}

pub fn derive_treasury_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_SEED], &TOKEN_PROGRAM)
}

pub fn qao_ata(owner: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, &derive_mint_pda().0)
}

// ======================== FIXTURE ========================

// Distribution destinations
#[derive(Clone, Copy)]
pub struct Pools {
    pub airdrop: Pubkey,
    pub liquidity: Pubkey,
    pub api_reward: Pubkey,
}

pub struct TokenFixture {
    pub admin: Keypair,
    pub guard: Keypair,
    pub recipient: Keypair,
    pub pools: Pools,
}

impl TokenFixture {
    pub fn recipient_ata(&self) -> Pubkey {
        qao_ata(&self.recipient.pubkey())
    }
}

pub fn create_qao_account(svm: &mut LiteSVM, payer: &Keypair, owner: &Pubkey) -> Pubkey {
    CreateAssociatedTokenAccount::new(svm, payer, &derive_mint_pda().0)
        .owner(owner)
        .send()
        .expect("ATA creation should succeed")
}

// Initialize the token and register the three pools; minting stays inactive
pub fn setup_token(svm: &mut LiteSVM) -> TokenFixture {
    let admin = create_funded_account(svm, 100 * LAMPORTS_PER_SOL);
    let guard = create_funded_account(svm, 10 * LAMPORTS_PER_SOL);
    let recipient = create_funded_account(svm, 10 * LAMPORTS_PER_SOL);

    let ix = build_initialize_ix(&admin.pubkey(), &recipient.pubkey(), &guard.pubkey());
    send(svm, ix, &admin, &[&admin]).expect("Initialize should succeed");

    let airdrop = create_qao_account(svm, &admin, &Keypair::new().pubkey());
    let liquidity = create_qao_account(svm, &admin, &Keypair::new().pubkey());
    let api_reward = create_qao_account(svm, &admin, &Keypair::new().pubkey());

    for (kind, pool) in [(0u8, airdrop), (1u8, liquidity), (2u8, api_reward)] {
        let ix = build_set_pool_ix(&admin.pubkey(), &pool, kind);
        send(svm, ix, &admin, &[&admin]).expect("Set pool should succeed");
    }

    TokenFixture {
        admin,
        guard,
        recipient,
        pools: Pools {
            airdrop,
            liquidity,
            api_reward,
        },
    }
}

pub fn activate(svm: &mut LiteSVM, fixture: &TokenFixture) {
    let ix = build_activate_minting_ix(&fixture.admin.pubkey(), &fixture.pools);
    send(svm, ix, &fixture.admin, &[&fixture.admin]).expect("Activation should succeed");
}

// ======================== INSTRUCTIONS ========================

// Trailing accounts shared by every instruction that runs the scheduler
pub fn minting_metas(pools: &Pools) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new(derive_config_pda().0, false),
        AccountMeta::new(derive_mint_pda().0, false),
        AccountMeta::new(pools.airdrop, false),
        AccountMeta::new(pools.liquidity, false),
        AccountMeta::new(pools.api_reward, false),
        AccountMeta::new(derive_treasury_pda().0, false),
        AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
    ]
}

pub fn build_initialize_ix(admin: &Pubkey, genesis_recipient: &Pubkey, guard: &Pubkey) -> Instruction {
    let mut data = anchor_discriminator("initialize").to_vec();
    data.extend_from_slice(guard.as_ref());

    Instruction {
        program_id: TOKEN_PROGRAM,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(derive_config_pda().0, false),
            AccountMeta::new(derive_mint_pda().0, false),
            AccountMeta::new(derive_treasury_pda().0, false),
            AccountMeta::new_readonly(*genesis_recipient, false),
            AccountMeta::new(qao_ata(genesis_recipient), false),
            AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// set_mint_multiplier / set_*_share / set_strict_shares / set_voting_engine
pub fn build_admin_ix(admin: &Pubkey, method: &str, args: &[u8]) -> Instruction {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(args);

    Instruction {
        program_id: TOKEN_PROGRAM,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(derive_config_pda().0, false),
        ],
        data,
    }
}

pub fn build_set_pool_ix(admin: &Pubkey, pool: &Pubkey, kind: u8) -> Instruction {
    let mut data = anchor_discriminator("set_pool").to_vec();
    data.push(kind);

    Instruction {
        program_id: TOKEN_PROGRAM,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(derive_config_pda().0, false),
            AccountMeta::new_readonly(*pool, false),
        ],
        data,
    }
}

pub fn build_activate_minting_ix(admin: &Pubkey, pools: &Pools) -> Instruction {
    let mut accounts = vec![AccountMeta::new_readonly(*admin, true)];
    accounts.extend(minting_metas(pools));

    Instruction {
        program_id: TOKEN_PROGRAM,
        accounts,
        data: anchor_discriminator("activate_minting").to_vec(),
    }
}

pub fn build_catch_up_ix(pools: &Pools) -> Instruction {
    Instruction {
        program_id: TOKEN_PROGRAM,
        accounts: minting_metas(pools),
        data: anchor_discriminator("catch_up_minting").to_vec(),
    }
}

pub fn build_transfer_ix(authority: &Pubkey, from: &Pubkey, to: &Pubkey, pools: &Pools, amount: u64) -> Instruction {
    let mut data = anchor_discriminator("transfer").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    let mut accounts = vec![
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(*from, false),
        AccountMeta::new(*to, false),
    ];
    accounts.extend(minting_metas(pools));

    Instruction {
        program_id: TOKEN_PROGRAM,
        accounts,
        data,
    }
}

pub fn build_transfer_from_ix(delegate: &Pubkey, from: &Pubkey, to: &Pubkey, pools: &Pools, amount: u64) -> Instruction {
    let mut ix = build_transfer_ix(delegate, from, to, pools, amount);
    ix.data[..8].copy_from_slice(&anchor_discriminator("transfer_from"));
    ix
}

// approve / increase_allowance / decrease_allowance
pub fn build_allowance_ix(method: &str, owner: &Pubkey, source: &Pubkey, spender: &Pubkey, amount: u64) -> Instruction {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: TOKEN_PROGRAM,
        accounts: vec![
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new(*source, false),
            AccountMeta::new_readonly(*spender, false),
            AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

pub fn build_burn_ix(owner: &Pubkey, source: &Pubkey, pools: &Pools, amount: u64) -> Instruction {
    let mut data = anchor_discriminator("burn").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    let mut accounts = vec![
        AccountMeta::new_readonly(*owner, true),
        AccountMeta::new(*source, false),
    ];
    accounts.extend(minting_metas(pools));

    Instruction {
        program_id: TOKEN_PROGRAM,
        accounts,
        data,
    }
}

// unlock_treasury_by_owner / unlock_treasury_by_guard
pub fn build_unlock_ix(method: &str, signer: &Pubkey) -> Instruction {
    Instruction {
        program_id: TOKEN_PROGRAM,
        accounts: vec![
            AccountMeta::new_readonly(*signer, true),
            AccountMeta::new(derive_config_pda().0, false),
        ],
        data: anchor_discriminator(method).to_vec(),
    }
}

pub fn build_withdraw_ix(admin: &Pubkey, recipient: &Pubkey, pools: &Pools, amount: u64) -> Instruction {
    let mut data = anchor_discriminator("withdraw_from_treasury").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    let mut accounts = vec![
        AccountMeta::new_readonly(*admin, true),
        AccountMeta::new(*recipient, false),
    ];
    accounts.extend(minting_metas(pools));

    Instruction {
        program_id: TOKEN_PROGRAM,
        accounts,
        data,
    }
}

pub fn build_mint_reward_ix(voting_engine: &Pubkey, destination: &Pubkey, amount: u64) -> Instruction {
    let mut data = anchor_discriminator("mint_reward").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: TOKEN_PROGRAM,
        accounts: vec![
            AccountMeta::new_readonly(*voting_engine, true),
            AccountMeta::new_readonly(derive_config_pda().0, false),
            AccountMeta::new(derive_mint_pda().0, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(SPL_TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}
